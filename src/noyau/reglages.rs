// src/noyau/reglages.rs
//
// Réglages du pipeline (aucun état global : passés par valeur/référence à chaque appel).

/// Précision de la lecture décimale par défaut.
pub const CHIFFRES_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const CHIFFRES_MAX: usize = 200;

/// Traitement des caractères inconnus par le lexer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeLexical {
    /// Caractère inconnu => erreur lexicale.
    #[default]
    Strict,
    /// Caractère inconnu => ignoré (journalisé en warn).
    Permissif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Chiffres après la virgule pour la lecture décimale tronquée.
    pub chiffres: usize,
    pub lexique: ModeLexical,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres: CHIFFRES_DEFAUT,
            lexique: ModeLexical::Strict,
        }
    }
}

impl Reglages {
    pub fn avec_chiffres(mut self, chiffres: usize) -> Self {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
        self
    }

    pub fn avec_lexique(mut self, lexique: ModeLexical) -> Self {
        self.lexique = lexique;
        self
    }
}
