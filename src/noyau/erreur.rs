// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque erreur interrompt l’expression courante : aucun résultat partiel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèses non appariées{}", fmt_position(.position))]
    ParentheseNonAppariee { position: Option<usize> },

    /// Opérateur binaire avec moins de deux opérandes sur la pile.
    #[error("opérande manquant pour '{operateur}'")]
    PileInsuffisante { operateur: String },

    #[error("division par zéro")]
    DivisionParZero,

    /// La pile de valeurs ne contient pas exactement une valeur à la fin.
    #[error("expression invalide ({profondeur} valeurs restantes au lieu d’une)")]
    ExpressionMalformee { profondeur: usize },

    /// Mode strict seulement.
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),
}

impl ErreurNoyau {
    /// Nom court et stable du genre d’erreur (affichage, tests).
    pub fn genre(&self) -> &'static str {
        match self {
            ErreurNoyau::ParentheseNonAppariee { .. } => "MismatchedParenthesis",
            ErreurNoyau::PileInsuffisante { .. } => "StackUnderflow",
            ErreurNoyau::DivisionParZero => "DivisionByZero",
            ErreurNoyau::ExpressionMalformee { .. } => "MalformedExpression",
            ErreurNoyau::CaractereInattendu { .. } => "LexicalError",
            ErreurNoyau::NombreInvalide(_) => "LexicalError",
        }
    }
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" (position {p})"),
        None => String::new(),
    }
}
