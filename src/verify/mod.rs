//! Property-based verification of the functions in this crate.
//!
//! - [`gen`]: seeded generators with shrinking
//! - [`property`]: properties, the check loop, and reports
//! - [`suite`]: the declared properties and a [`Verifier`] running them

pub mod gen;
pub mod property;
pub mod suite;

pub use gen::{pairs, same_length, vecs, Filter, Generator, Ints, Pairs, SameLength, SampleRng, Samples, Scaled, Strings, Vecs};
pub use property::{expect, expect_eq, Check, CheckResult, CheckerConfig, Counterexample, Mismatch, Outcome, Property, Report};
pub use suite::{all_properties, counter_properties, isomorphism_properties, reverse_properties, Subject, Summary, Verifier};
