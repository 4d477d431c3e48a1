//! Noyau: évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs -> EXACT + lecture décimale
//!
//! Chaque appel est une fonction pure de son entrée : aucun état partagé entre
//! deux expressions, appels ré-entrants.

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, lexemes, tokenize, Genre, Tok};
use super::lecture::{format_exact, lecture_decimale};
use super::reglages::Reglages;
use super::rpn::to_rpn;

/// Sortie complète d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultat {
    /// Lexèmes infixes (après réécriture du moins unaire).
    pub infixe: Vec<String>,
    /// Lexèmes postfixes (RPN).
    pub postfixe: Vec<String>,
    pub valeur: BigRational,
    /// Forme exacte : `n` ou `n/d`.
    pub exact: String,
    /// Lecture décimale tronquée à `Reglages::chiffres`.
    pub lecture: String,
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// - nombre     => empile
/// - opérateur  => dépile `right` puis `left`, empile `left op right`
/// - fin        => exactement une valeur doit rester
pub fn evaluate(postfix: Vec<Tok>) -> Result<BigRational, ErreurNoyau> {
    let mut st: Vec<BigRational> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        let op = match tok.genre {
            Genre::Num(v) => {
                st.push(v);
                continue;
            }
            Genre::LPar | Genre::RPar => {
                return Err(ErreurNoyau::ParentheseNonAppariee {
                    position: Some(tok.position),
                })
            }
            op => op,
        };

        let (Some(right), Some(left)) = (st.pop(), st.pop()) else {
            return Err(ErreurNoyau::PileInsuffisante {
                operateur: tok.lexeme,
            });
        };

        let r = match op {
            Genre::Plus => left + right,
            Genre::Minus => left - right,
            Genre::Star => left * right,
            Genre::Slash => {
                if right.is_zero() {
                    return Err(ErreurNoyau::DivisionParZero);
                }
                left / right
            }
            Genre::Num(_) | Genre::LPar | Genre::RPar => unreachable!(),
        };

        st.push(r);
    }

    if st.len() != 1 {
        return Err(ErreurNoyau::ExpressionMalformee {
            profondeur: st.len(),
        });
    }
    st.pop()
        .ok_or(ErreurNoyau::ExpressionMalformee { profondeur: 0 })
}

/// API publique : évalue une expression texte et retourne infixe, postfixe,
/// valeur exacte et lecture décimale.
pub fn eval_expression(expr_str: &str, reglages: &Reglages) -> Result<Resultat, ErreurNoyau> {
    // 1) Jetons
    let jetons = tokenize(expr_str, reglages.lexique)?;
    log::debug!("jetons: {}", format_tokens(&jetons));
    let infixe = lexemes(&jetons);

    // 2) RPN
    let rpn = to_rpn(jetons)?;
    log::debug!("rpn: {}", format_tokens(&rpn));
    let postfixe = lexemes(&rpn);

    // 3) Pile de valeurs
    let valeur = evaluate(rpn)?;
    let exact = format_exact(&valeur);
    log::debug!("résultat: {exact}");

    let lecture = lecture_decimale(&valeur, reglages.chiffres);

    Ok(Resultat {
        infixe,
        postfixe,
        valeur,
        exact,
        lecture,
    })
}
