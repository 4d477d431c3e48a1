//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultats, erreur, réglages, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{ModeLexical, Reglages, Resultat};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub infixe: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,   // forme exacte (n ou n/d)
    pub lecture: String, // lecture décimale tronquée
    pub erreur: String,  // message d’erreur (si lexing/conversion/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages: Reglages::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.reglages = Reglages::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// La lecture et la démarche sont coupées.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet du noyau.
    pub fn set_resultat(&mut self, r: Resultat) {
        self.erreur.clear();
        self.exact = r.exact;
        self.lecture = r.lecture;
        self.demarche = Demarche {
            infixe: r.infixe.join(" "),
            postfixe: r.postfixe.join(" "),
        };
        self.focus_entree = true;
    }

    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.reglages = self.reglages.avec_chiffres(chiffres);
        self.focus_entree = true;
    }

    pub fn set_strict(&mut self, strict: bool) {
        let mode = if strict {
            ModeLexical::Strict
        } else {
            ModeLexical::Permissif
        };
        self.reglages = self.reglages.avec_lexique(mode);
        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat ou erreur.
    pub fn evaluer(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match crate::noyau::eval_expression(s, &self.reglages) {
            Ok(r) => {
                log::info!("{s} = {}", r.valeur);
                self.set_resultat(r);
            }
            Err(e) => {
                log::debug!("échec {:?}: {e}", e.genre());
                self.set_erreur(format!("{}: {e}", e.genre()));
            }
        }
    }
}
