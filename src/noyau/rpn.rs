// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - nombre      => sortie directe
// - '('         => pile
// - ')'         => dépile vers la sortie jusqu’à '(' (jetée) ; pile vide avant => erreur
// - opérateur   => empile si pile vide ou précédence strictement plus forte que le sommet,
//                  sinon sort tous les sommets de précédence >= (associativité à gauche)
// - fin         => vide la pile ; une '(' restante => erreur
//
// Les jetons passent par valeur d’une séquence à l’autre (pas de clone).

use super::erreur::ErreurNoyau;
use super::jetons::{Genre, Tok};

/// Convertit une suite de jetons infixes en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: Vec<Tok>) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens {
        match tok.genre {
            Genre::Num(_) => out.push(tok),

            Genre::LPar => ops.push(tok),

            Genre::RPar => loop {
                match ops.pop() {
                    Some(top) if top.genre == Genre::LPar => break,
                    Some(top) => out.push(top),
                    None => {
                        return Err(ErreurNoyau::ParentheseNonAppariee {
                            position: Some(tok.position),
                        })
                    }
                }
            },

            Genre::Plus | Genre::Minus | Genre::Star | Genre::Slash => {
                // '(' a une précédence 0 : elle bloque naturellement le dépilement.
                while let Some(top) = ops.last() {
                    if top.precedence >= tok.precedence {
                        if let Some(top) = ops.pop() {
                            out.push(top);
                        }
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op.genre == Genre::LPar {
            return Err(ErreurNoyau::ParentheseNonAppariee {
                position: Some(op.position),
            });
        }
        out.push(op);
    }

    Ok(out)
}
