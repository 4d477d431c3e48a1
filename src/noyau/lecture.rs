// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/* ------------------------ EXACT ------------------------ */

/// Forme exacte : `n` si entier, sinon `n/d` (fraction réduite, signe au numérateur).
pub fn format_exact(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = r * 10^digits, tronqué vers zéro.
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Lecture décimale tronquée (vers zéro) à `digits` chiffres après la virgule.
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}
