// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurNoyau;
use super::reglages::ModeLexical;

/// Précédence des opérateurs additifs.
pub const PREC_ADDITIF: u8 = 1;
/// Précédence des opérateurs multiplicatifs.
pub const PREC_MULTIPLICATIF: u8 = 2;
/// Précédence du `*` synthétique du moins unaire : le -1 reste collé à son opérande.
pub const PREC_UNAIRE: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Genre {
    Num(BigRational),
    Plus,
    Minus,
    Star,
    Slash,
    LPar,
    RPar,
}

/// Jeton immuable : genre (+ valeur si nombre), lexème d’affichage, précédence, position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tok {
    pub genre: Genre,
    pub lexeme: String,
    /// 0 pour les nombres et parenthèses.
    pub precedence: u8,
    /// Index (en caractères) du caractère source.
    pub position: usize,
}

impl Tok {
    pub fn num(valeur: BigRational, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            genre: Genre::Num(valeur),
            lexeme: lexeme.into(),
            precedence: 0,
            position,
        }
    }

    fn symbole(genre: Genre, lexeme: char, precedence: u8, position: usize) -> Self {
        Self {
            genre,
            lexeme: lexeme.to_string(),
            precedence,
            position,
        }
    }

    pub fn plus(position: usize) -> Self {
        Self::symbole(Genre::Plus, '+', PREC_ADDITIF, position)
    }

    pub fn minus(position: usize) -> Self {
        Self::symbole(Genre::Minus, '-', PREC_ADDITIF, position)
    }

    pub fn star(position: usize) -> Self {
        Self::symbole(Genre::Star, '*', PREC_MULTIPLICATIF, position)
    }

    pub fn slash(position: usize) -> Self {
        Self::symbole(Genre::Slash, '/', PREC_MULTIPLICATIF, position)
    }

    pub fn lpar(position: usize) -> Self {
        Self::symbole(Genre::LPar, '(', 0, position)
    }

    pub fn rpar(position: usize) -> Self {
        Self::symbole(Genre::RPar, ')', 0, position)
    }
}

/// Le '-' à la position courante est-il unaire ?
/// Unaire si aucun jeton avant, ou si le précédent n’est ni un nombre ni ')'.
fn moins_est_unaire(out: &[Tok]) -> bool {
    match out.last() {
        None => true,
        Some(t) => !matches!(t.genre, Genre::Num(_) | Genre::RPar),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12), consommés d’un bloc
/// - opérateurs + - * /
/// - parenthèses ( )
/// - moins unaire réécrit en `-1 *`
///
/// Caractère inconnu : erreur en `Strict`, ignoré en `Permissif`.
pub fn tokenize(s: &str, mode: ModeLexical) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '+' => out.push(Tok::plus(i)),
            '*' => out.push(Tok::star(i)),
            '/' => out.push(Tok::slash(i)),
            '(' => out.push(Tok::lpar(i)),
            ')' => out.push(Tok::rpar(i)),
            '-' => {
                if moins_est_unaire(&out) {
                    out.push(Tok::num(-BigRational::one(), "-1", i));
                    out.push(Tok::symbole(Genre::Star, '*', PREC_UNAIRE, i));
                } else {
                    out.push(Tok::minus(i));
                }
            }
            _ if c.is_ascii_digit() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let texte: String = chars[start..i].iter().collect();
                let n = BigInt::parse_bytes(texte.as_bytes(), 10)
                    .ok_or_else(|| ErreurNoyau::NombreInvalide(texte.clone()))?;
                out.push(Tok::num(BigRational::from_integer(n), texte, start));
                continue;
            }
            _ => match mode {
                ModeLexical::Strict => {
                    return Err(ErreurNoyau::CaractereInattendu {
                        caractere: c,
                        position: i,
                    })
                }
                ModeLexical::Permissif => {
                    log::warn!("caractère ignoré: {c:?} (position {i})");
                }
            },
        }

        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (affichage “démarche”) : lexèmes séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    lexemes(tokens).join(" ")
}

pub fn lexemes(tokens: &[Tok]) -> Vec<String> {
    tokens.iter().map(|t| t.lexeme.clone()).collect()
}
