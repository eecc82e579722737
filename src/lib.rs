//! Crustabip is a RUST Abstract BIPolar argumentation reasoner.
//!
//! Bipolar argumentation frameworks are made of arguments, attacks and supports.
//! This library provides a generic [`BipolarFramework`] type parameterized by a semantics
//! (deductive, evidential or necessity), and the reasoning functions these semantics define:
//! support closures, derived attacks, evidential support, acceptability and coherence checks.
//!
//! # Example
//!
//! ```
//! # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
//! let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
//! framework.add_prima_facie(Argument::new("a")).unwrap();
//! framework.add_support_by_labels(&["a"], &"b").unwrap();
//! assert!(framework
//!     .has_evidential_support(&Argument::new("b"), &ArgumentSet::from_labels(&["a"]))
//!     .unwrap());
//! ```

#![warn(missing_docs)]

pub mod bipolar;
pub use bipolar::Argument;
pub use bipolar::ArgumentSet;
pub use bipolar::Attack;
pub use bipolar::BinaryAttack;
pub use bipolar::BinarySupport;
pub use bipolar::BipolarEntity;
pub use bipolar::BipolarError;
pub use bipolar::BipolarFramework;
pub use bipolar::BipolarSemantics;
pub use bipolar::Endpoint;
pub use bipolar::LabelType;
pub use bipolar::Relation;
pub use bipolar::SetAttack;
pub use bipolar::SetSupport;
pub use bipolar::Support;

pub mod semantics;
pub use semantics::DeductiveFramework;
pub use semantics::EvidentialFramework;
pub use semantics::EvidentialSystem;
pub use semantics::NecessityFramework;

pub mod utils;
