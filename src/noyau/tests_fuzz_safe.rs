//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : valeur comparée à un calcul indépendant
//! - bruit aléatoire : jamais de panique, seulement des genres d’erreurs connus

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::reglages::{ModeLexical, Reglages};
use super::{eval_expression, ErreurNoyau};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression entièrement parenthésée + sa valeur attendue
/// (None si une division par zéro apparaît quelque part).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Option<BigRational>) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(20) as i64;
        let v = BigRational::from_integer(BigInt::from(n));
        return if rng.pick(5) == 0 {
            (format!("-{n}"), Some(-v))
        } else {
            (format!("{n}"), Some(v))
        };
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);
    let esp = if rng.coin() { " " } else { "" };

    let (op, v) = match rng.pick(4) {
        0 => ('+', va.zip(vb).map(|(x, y)| x + y)),
        1 => ('-', va.zip(vb).map(|(x, y)| x - y)),
        2 => ('*', va.zip(vb).map(|(x, y)| x * y)),
        _ => (
            '/',
            match (va, vb) {
                (Some(x), Some(y)) if !y.is_zero() => Some(x / y),
                _ => None,
            },
        ),
    };

    (format!("({a}{esp}{op}{esp}{b})"), v)
}

/// Chaîne de bruit : chiffres, opérateurs, parenthèses, espaces, et quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '+', '-', '*', '/', '(', ')', ' ', ' ', 'x', '.', 'é',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn is_genre_connu(e: &ErreurNoyau) -> bool {
    matches!(
        e.genre(),
        "MismatchedParenthesis"
            | "StackUnderflow"
            | "DivisionByZero"
            | "MalformedExpression"
            | "LexicalError"
    )
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let reglages = Reglages::default();

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);

        match (eval_expression(&expr, &reglages), attendu) {
            (Ok(r), Some(v)) => {
                assert_eq!(r.valeur, v, "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(ErreurNoyau::DivisionParZero), None) => seen_div0 += 1,
            (obtenu, attendu) => {
                panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}")
            }
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, len);

        for mode in [ModeLexical::Strict, ModeLexical::Permissif] {
            let reglages = Reglages::default().avec_lexique(mode);
            match eval_expression(&s, &reglages) {
                Ok(_) => seen_ok += 1,
                Err(e) => {
                    assert!(is_genre_connu(&e), "erreur inconnue: s={s:?} err={e:?}");
                    if mode == ModeLexical::Permissif {
                        assert!(
                            !matches!(e, ErreurNoyau::CaractereInattendu { .. }),
                            "mode permissif ne doit pas rejeter: s={s:?}"
                        );
                    }
                    seen_err += 1;
                }
            }
        }
    }

    assert!(seen_ok > 0, "aucun succès: bruit trop bruyant");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut rng_a = Rng::new(42);
    let mut rng_b = Rng::new(42);

    for _ in 0..60 {
        let (a, _) = gen_expr(&mut rng_a, 3);
        let (b, _) = gen_expr(&mut rng_b, 3);
        assert_eq!(a, b);

        let ra = eval_expression(&a, &Reglages::default());
        let rb = eval_expression(&b, &Reglages::default());
        assert_eq!(ra, rb, "expr={a:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("7", 800);
    let r = eval_expression(&expr, &Reglages::default()).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*7 = 5600
    assert_eq!(r.exact, "5600");
}

#[test]
fn fuzz_safe_chaine_longue_sans_parentheses() {
    // 2000 termes alternés : pile d’opérateurs bornée par l’associativité à gauche
    let mut expr = String::from("1");
    for i in 0..2000 {
        expr.push_str(if i % 2 == 0 { "+3" } else { "-2" });
    }
    let r = eval_expression(&expr, &Reglages::default()).unwrap();
    // 1 + 1000*3 - 1000*2
    assert_eq!(r.exact, "1001");
}
