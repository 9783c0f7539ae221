//! Declared properties of the functions in this crate, and a runner for them.

use std::fmt;

use log::info;

use super::gen::{pairs, same_length, vecs, Generator, Ints, Strings};
use super::property::{expect, expect_eq, Check, CheckerConfig, Property, Report};
use crate::isomorphic::is_isomorphic;
use crate::parity::odd_or_pos;
use crate::reverse::reverse;

/// The functions under test.
///
/// [`Subject::default`] wires this crate's implementations. Other implementations can be
/// plugged in to check whether the properties detect their faults.
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub reverse: fn(i32) -> i32,
    pub is_isomorphic: fn(&str, &str) -> bool,
    pub odd_or_pos: fn(&[i32]) -> usize,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            reverse,
            is_isomorphic,
            odd_or_pos,
        }
    }
}

/// Digit reversal computed on the decimal string of the magnitude, without overflow checks.
pub fn reverse_oracle(x: i32) -> i64 {
    let magnitude = x
        .unsigned_abs()
        .to_string()
        .bytes()
        .rev()
        .fold(0i64, |acc, d| acc * 10 + (d - b'0') as i64);
    if x < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// What [`reverse`] must return for `x`: the oracle value if it fits, `0` otherwise.
fn expected_reverse(x: i32) -> i32 {
    i32::try_from(reverse_oracle(x)).unwrap_or(0)
}

fn boxed<G>(property: Property<G>) -> Box<dyn Check>
where
    G: Generator + 'static,
{
    Box::new(property)
}

pub fn reverse_properties(subject: &Subject) -> Vec<Box<dyn Check>> {
    let reverse = subject.reverse;
    vec![
        boxed(Property::new(
            "reverse_twice_restores_input",
            Ints::any().filter(|x| x % 10 != 0),
            move |&x| match reverse(x) {
                0 => Ok(()),
                reversed => expect_eq(x, reverse(reversed)),
            },
        )),
        boxed(Property::new("reverse_stays_in_range", Ints::any(), move |&x| {
            expect_eq(expected_reverse(x), reverse(x))
        })),
        boxed(Property::new(
            "reverse_drops_leading_zeros",
            Ints::between(-1_000_000, 1_000_000).scaled_by(&[1, 10, 100, 1000]),
            move |&x| {
                let reversed = reverse(x);
                if reversed == 0 {
                    return Ok(());
                }
                let digits = reversed.unsigned_abs().to_string();
                expect(!digits.starts_with('0'), "no leading zero", &digits)?;
                let significant: String = x.unsigned_abs().to_string().trim_end_matches('0').chars().rev().collect();
                expect_eq(significant, digits)
            },
        )),
        boxed(Property::new("reverse_handles_negatives", Ints::between(-9999, -1), move |&x| {
            expect_eq(expected_reverse(x), reverse(x))
        })),
        boxed(Property::new("reverse_preserves_sign", Ints::any(), move |&x| match reverse(x) {
            0 => Ok(()),
            reversed => expect_eq(x.signum(), reversed.signum()),
        })),
    ]
}

/// Renames every code point `c < 256` to `(c + shift) mod 256`, a bijection on Latin-1.
fn rotate_latin1(s: &str, shift: i32) -> String {
    s.chars()
        .map(|c| char::from(((c as u32 + shift as u32) % 256) as u8))
        .collect()
}

pub fn isomorphism_properties(subject: &Subject) -> Vec<Box<dyn Check>> {
    let is_isomorphic = subject.is_isomorphic;
    vec![
        boxed(Property::new(
            "different_lengths_never_isomorphic",
            pairs(Strings::ascii(0, 10), Strings::ascii(0, 10)).filter(|(s, t)| s.chars().count() != t.chars().count()),
            move |(s, t)| expect_eq(false, is_isomorphic(s, t)),
        )),
        boxed(Property::new(
            "isomorphism_is_symmetric",
            same_length(Strings::ascii(0, 10)),
            move |(s, t)| expect_eq(is_isomorphic(s, t), is_isomorphic(t, s)),
        )),
        boxed(Property::new(
            "isomorphism_is_symmetric_on_small_alphabet",
            same_length(Strings::alphabet("abc", 0, 8)),
            move |(s, t)| expect_eq(is_isomorphic(s, t), is_isomorphic(t, s)),
        )),
        boxed(Property::new("isomorphism_is_reflexive", Strings::ascii(0, 10), move |s| {
            expect_eq(true, is_isomorphic(s, s))
        })),
        boxed(Property::new(
            "isomorphism_survives_renaming",
            pairs(Strings::latin1(0, 12), Ints::between(1, 255)),
            move |(s, shift)| expect_eq(true, is_isomorphic(s, &rotate_latin1(s, *shift))),
        )),
    ]
}

pub fn counter_properties(subject: &Subject) -> Vec<Box<dyn Check>> {
    let odd_or_pos = subject.odd_or_pos;
    vec![
        boxed(Property::new(
            "negative_even_not_counted",
            Ints::any().filter(|&x| x < 0 && x % 2 == 0),
            move |&x| expect_eq(0, odd_or_pos(&[x])),
        )),
        boxed(Property::new(
            "positive_counted",
            Ints::any().filter(|&x| x > 0),
            move |&x| expect_eq(1, odd_or_pos(&[x])),
        )),
        boxed(Property::new(
            "odd_counted",
            Ints::any().filter(|&x| x % 2 != 0),
            move |&x| expect_eq(1, odd_or_pos(&[x])),
        )),
        boxed(Property::new("zeros_not_counted", vecs(Ints::between(0, 0), 0, 16), move |v| {
            expect_eq(0, odd_or_pos(v))
        })),
        boxed(Property::new(
            "count_matches_sign_parity_model",
            vecs(Ints::any(), 0, 32),
            move |v| {
                let positive = v.iter().filter(|&&x| x > 0).count();
                let negative_odd = v.iter().filter(|&&x| x < 0 && x.rem_euclid(2) == 1).count();
                expect_eq(positive + negative_odd, odd_or_pos(v))
            },
        )),
        boxed(Property::new(
            "count_is_additive",
            pairs(vecs(Ints::any(), 0, 16), vecs(Ints::any(), 0, 16)),
            move |(a, b)| {
                let joined: Vec<i32> = a.iter().chain(b).copied().collect();
                expect_eq(odd_or_pos(a) + odd_or_pos(b), odd_or_pos(&joined))
            },
        )),
    ]
}

pub fn all_properties(subject: &Subject) -> Vec<Box<dyn Check>> {
    let mut properties = reverse_properties(subject);
    properties.extend(isomorphism_properties(subject));
    properties.extend(counter_properties(subject));
    properties
}

/// Runs a set of properties, each independently of the others.
pub struct Verifier {
    config: CheckerConfig,
    properties: Vec<Box<dyn Check>>,
}

impl Verifier {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config,
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = Box<dyn Check>>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Keeps only the properties whose name contains `pattern`.
    pub fn filter(mut self, pattern: &str) -> Self {
        self.properties.retain(|p| p.name().contains(pattern));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Checks every property sequentially under one base seed.
    pub fn run(&self) -> Summary {
        let seed = self.config.resolve_seed();
        let config = CheckerConfig {
            seed: Some(seed),
            ..self.config.clone()
        };
        info!("Checking {} properties with seed {}", self.properties.len(), seed);

        let reports = self.properties.iter().map(|p| p.check(&config)).collect();
        Summary { seed, reports }
    }
}

/// Reports of a [`Verifier`] run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub seed: u64,
    pub reports: Vec<Report>,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.is_passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().filter(|r| !r.is_passed())
    }

    pub fn report(&self, property: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.property == property)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        let failed = self.failures().count();
        write!(
            f,
            "{} properties, {} passed, {} failed (seed {})",
            self.reports.len(),
            self.reports.len() - failed,
            failed,
            self.seed
        )
    }
}
