//! # auxiliary-methods: small integer and string algorithms, verified by properties
//!
//! Three independent, pure functions:
//!
//! - **[`reverse`]**: reverses the decimal digits of an `i32`. Overflow is reported as an
//!   [`Error::Overflow`] by [`checked_reverse`][crate::reverse::checked_reverse], and as the
//!   sentinel `0` by [`reverse()`][crate::reverse::reverse].
//! - **[`isomorphic`]**: decides whether two strings are related by a character bijection.
//! - **[`parity`]**: counts the elements of a slice that are odd or positive.
//!
//! The [`verify`] module checks these functions against their properties: seeded generators
//! produce samples, each property predicate is evaluated on them, and a violation is shrunk to a
//! minimal counterexample.
//!
//! ## Basic Usage
//!
//! ```rust
//! use auxiliary_methods::isomorphic::is_isomorphic;
//! use auxiliary_methods::parity::odd_or_pos;
//! use auxiliary_methods::reverse::reverse;
//!
//! assert_eq!(reverse(-123), -321);
//! assert_eq!(reverse(1534236469), 0); // overflow
//! assert!(is_isomorphic("egg", "add"));
//! assert_eq!(odd_or_pos(&[-3, -4, 0, 2]), 2);
//! ```
//!
//! ## Checking Properties
//!
//! ```rust
//! use auxiliary_methods::verify::{all_properties, CheckerConfig, Subject, Verifier};
//!
//! let config = CheckerConfig::default().with_cases(100).with_seed(42);
//! let summary = Verifier::new(config)
//!     .with_properties(all_properties(&Subject::default()))
//!     .run();
//! assert!(summary.all_passed(), "{}", summary);
//! ```

pub mod error;
pub mod isomorphic;
pub mod parity;
pub mod reverse;
pub mod verify;

pub use error::{Error, Result};
