//! Properties and the generate-evaluate-shrink loop.
//!
//! A [`Property`] pairs a [`Generator`] with a predicate that must hold for every generated value.
//! Checking draws samples from a seeded generator until either the configured number of cases
//! pass, a violation is found, or too many samples get discarded. A violation is then shrunk
//! greedily: the first simpler candidate that still fails replaces the current counterexample,
//! until no candidate fails any more.
//!
//! ## Example
//!
//! ```rust
//! use auxiliary_methods::verify::{expect_eq, Check, CheckerConfig, Ints, Property};
//!
//! let property = Property::new("abs is idempotent", Ints::between(-1000, 1000), |&x| {
//!     expect_eq(x.abs(), x.abs().abs())
//! });
//! let report = property.check(&CheckerConfig::default().with_seed(42));
//! assert!(report.is_passed());
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info};
use rand::Rng;

use super::gen::Generator;

/// Configuration for property checking.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Number of accepted samples per property.
    pub cases: usize,
    /// Base seed. `None` draws a fresh one, which is then recorded in the reports.
    pub seed: Option<u64>,
    /// Maximum number of accepted shrink steps.
    pub max_shrink_steps: usize,
    /// Maximum number of discarded samples before a property is reported as exhausted.
    pub max_discards: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            cases: 1000,
            seed: None,
            max_shrink_steps: 1000,
            max_discards: 10_000,
        }
    }
}

impl CheckerConfig {
    pub fn with_cases(mut self, cases: usize) -> Self {
        self.cases = cases;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_shrink_steps(mut self, steps: usize) -> Self {
        self.max_shrink_steps = steps;
        self
    }

    pub fn with_max_discards(mut self, discards: usize) -> Self {
        self.max_discards = discards;
        self
    }

    /// The configured seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

/// Seed for a single property, derived from the base seed and the property name (FNV-1a).
pub fn property_seed(base: u64, name: &str) -> u64 {
    name.bytes()
        .fold(base ^ 0xcbf2_9ce4_8422_2325, |h, b| (h ^ b as u64).wrapping_mul(0x0100_0000_01b3))
}

/// Expected and actual values of a violated property, rendered for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

/// Verdict of a predicate on a single value.
pub type Outcome = Result<(), Mismatch>;

/// Passes iff `expected == actual`.
pub fn expect_eq<T: PartialEq + fmt::Debug>(expected: T, actual: T) -> Outcome {
    if expected == actual {
        Ok(())
    } else {
        Err(Mismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Passes iff `condition` holds; `expected` describes the condition.
pub fn expect(condition: bool, expected: impl fmt::Display, actual: impl fmt::Debug) -> Outcome {
    if condition {
        Ok(())
    } else {
        Err(Mismatch {
            expected: expected.to_string(),
            actual: format!("{:?}", actual),
        })
    }
}

/// A named predicate over the values of a generator.
pub struct Property<G: Generator> {
    name: String,
    generator: G,
    predicate: Box<dyn Fn(&G::Value) -> Outcome>,
}

impl<G: Generator> Property<G> {
    pub fn new<F>(name: impl Into<String>, generator: G, predicate: F) -> Self
    where
        F: Fn(&G::Value) -> Outcome + 'static,
    {
        Self {
            name: name.into(),
            generator,
            predicate: Box::new(predicate),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Evaluates the predicate, turning a panic into a mismatch.
    pub fn evaluate(&self, value: &G::Value) -> Outcome {
        panic::catch_unwind(AssertUnwindSafe(|| (self.predicate)(value))).unwrap_or_else(|payload| {
            Err(Mismatch {
                expected: "no panic".to_string(),
                actual: format!("panic: {}", panic_message(payload.as_ref())),
            })
        })
    }

    fn run(&self, seed: u64, config: &CheckerConfig) -> CheckResult {
        let mut cases = 0;
        let mut discards = 0;

        for sample in self.generator.samples(seed) {
            if cases >= config.cases {
                break;
            }
            let Some(value) = sample else {
                discards += 1;
                if discards > config.max_discards {
                    return CheckResult::Exhausted { cases, discards };
                }
                continue;
            };

            cases += 1;
            if let Err(mismatch) = self.evaluate(&value) {
                debug!("{}: case {} fails on {:?}: {}", self.name, cases, value, mismatch);
                return CheckResult::Failed(self.shrink(value, mismatch, cases, config));
            }
        }

        CheckResult::Passed { cases, discards }
    }

    fn shrink(&self, original: G::Value, mismatch: Mismatch, case: usize, config: &CheckerConfig) -> Counterexample {
        let mut current = original.clone();
        let mut current_mismatch = mismatch;
        let mut steps = 0;

        while steps < config.max_shrink_steps {
            let smaller = self
                .generator
                .shrink(&current)
                .into_iter()
                .find_map(|candidate| self.evaluate(&candidate).err().map(|m| (candidate, m)));
            match smaller {
                Some((candidate, m)) => {
                    debug!("{}: shrunk to {:?}", self.name, candidate);
                    current = candidate;
                    current_mismatch = m;
                    steps += 1;
                }
                None => break,
            }
        }

        Counterexample {
            original: format!("{:?}", original),
            minimal: format!("{:?}", current),
            case,
            shrink_steps: steps,
            mismatch: current_mismatch,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string payload>".to_string()
    }
}

/// Object-safe view of a property, so properties over different generators can be run together.
pub trait Check {
    fn name(&self) -> &str;

    fn check(&self, config: &CheckerConfig) -> Report;
}

impl<G: Generator> Check for Property<G> {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, config: &CheckerConfig) -> Report {
        let seed = config.resolve_seed();
        debug!("Checking '{}' with seed {} ({} cases)", self.name, seed, config.cases);

        let result = self.run(property_seed(seed, &self.name), config);
        let report = Report {
            property: self.name.clone(),
            seed,
            result,
        };
        info!("{}", report);
        report
    }
}

/// Minimal failing input found for a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    /// First failing sample, as generated.
    pub original: String,
    /// Failing sample after shrinking.
    pub minimal: String,
    /// Index (1-based) of the failing case.
    pub case: usize,
    pub shrink_steps: usize,
    /// Expected and actual values for the minimal sample.
    pub mismatch: Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed { cases: usize, discards: usize },
    Failed(Counterexample),
    /// Too many samples were discarded to reach the requested number of cases.
    Exhausted { cases: usize, discards: usize },
}

/// Outcome of checking one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub property: String,
    /// Base seed; passing it back via [`CheckerConfig::with_seed`] reproduces the run.
    pub seed: u64,
    pub result: CheckResult,
}

impl Report {
    pub fn is_passed(&self) -> bool {
        matches!(self.result, CheckResult::Passed { .. })
    }

    pub fn counterexample(&self) -> Option<&Counterexample> {
        match &self.result {
            CheckResult::Failed(cex) => Some(cex),
            _ => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            CheckResult::Passed { cases, discards } => {
                write!(f, "{}: passed {} cases ({} discarded)", self.property, cases, discards)
            }
            CheckResult::Exhausted { cases, discards } => write!(
                f,
                "{}: exhausted after {} cases, {} samples discarded (seed {})",
                self.property, cases, discards, self.seed
            ),
            CheckResult::Failed(cex) => {
                writeln!(f, "{}: FAILED at case {} (seed {})", self.property, cex.case, self.seed)?;
                writeln!(f, "  original: {}", cex.original)?;
                writeln!(f, "  minimal:  {} after {} shrink steps", cex.minimal, cex.shrink_steps)?;
                writeln!(f, "  expected: {}", cex.mismatch.expected)?;
                write!(f, "  actual:   {}", cex.mismatch.actual)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::verify::gen::{vecs, Ints};

    fn config() -> CheckerConfig {
        CheckerConfig::default().with_seed(2024)
    }

    #[test]
    fn test_property_pass() {
        let prop = Property::new("square is non-negative", Ints::between(-1000, 1000), |&x| {
            expect(x * x >= 0, "non-negative square", x * x)
        });
        let report = prop.check(&config());
        assert_eq!(report.result, CheckResult::Passed { cases: 1000, discards: 0 });
        assert_eq!(report.seed, 2024);
    }

    #[test]
    fn test_property_fail_shrinks() {
        let prop = Property::new("small", Ints::any(), |&x| expect(x < 50, "x < 50", x));
        let report = prop.check(&config());
        let cex = report.counterexample().expect("property should fail");
        assert_eq!(cex.minimal, "50");
        assert_eq!(cex.mismatch.actual, "50");
    }

    #[test]
    fn test_shrinks_negative_towards_zero() {
        let prop = Property::new("not very negative", Ints::any(), |&x| expect(x > -10, "x > -10", x));
        let cex = prop.check(&config()).counterexample().cloned().unwrap();
        assert_eq!(cex.minimal, "-10");
    }

    #[test]
    fn test_shrinks_vectors() {
        let prop = Property::new("all below 10", vecs(Ints::between(0, 100), 0, 10), |v| {
            expect(v.iter().all(|&x| x < 10), "all elements < 10", v)
        });
        let cex = prop.check(&config()).counterexample().cloned().unwrap();
        assert_eq!(cex.minimal, "[10]");
    }

    #[test]
    fn test_panic_is_a_failure() {
        let prop = Property::new("never panics", Ints::between(0, 10), |&x| {
            if x >= 3 {
                panic!("boom at {}", x);
            }
            Ok(())
        });
        let cex = prop.check(&config()).counterexample().cloned().unwrap();
        assert_eq!(cex.minimal, "3");
        assert_eq!(cex.mismatch.expected, "no panic");
        assert_eq!(cex.mismatch.actual, "panic: boom at 3");
    }

    #[test]
    fn test_exhausted() {
        let prop = Property::new("impossible", Ints::between(0, 10).filter(|&x| x > 10), |_| Ok(()));
        let report = prop.check(&config().with_max_discards(100));
        assert_eq!(report.result, CheckResult::Exhausted { cases: 0, discards: 101 });
        assert!(!report.is_passed());
    }

    #[test]
    fn test_deterministic_given_seed() {
        let prop = Property::new("small", Ints::any(), |&x| expect(x < 1_000_000, "x < 1000000", x));
        let a = prop.check(&config());
        let b = prop.check(&config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_property_seed_depends_on_name() {
        assert_eq!(property_seed(1, "a"), property_seed(1, "a"));
        assert_ne!(property_seed(1, "a"), property_seed(1, "b"));
        assert_ne!(property_seed(1, "a"), property_seed(2, "a"));
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            property: "p".to_string(),
            seed: 7,
            result: CheckResult::Failed(Counterexample {
                original: "123".to_string(),
                minimal: "1".to_string(),
                case: 4,
                shrink_steps: 2,
                mismatch: Mismatch {
                    expected: "0".to_string(),
                    actual: "1".to_string(),
                },
            }),
        };
        let text = report.to_string();
        assert!(text.starts_with("p: FAILED at case 4 (seed 7)"));
        assert!(text.contains("minimal:  1 after 2 shrink steps"));
    }
}
