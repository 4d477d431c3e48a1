//! Noyau: calcul exact par notation postfixe
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (moins unaire réécrit en `-1 *`)
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - lecture.rs  : affichage EXACT + lecture décimale tronquée
//! - erreur.rs   : genres d’erreurs
//! - reglages.rs : précision + mode lexical

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{eval_expression, Resultat};
pub use reglages::{ModeLexical, Reglages};
