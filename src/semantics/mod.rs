//! The semantics of bipolar argumentation frameworks.
//!
//! Each semantics is a type implementing [`BipolarSemantics`](crate::BipolarSemantics),
//! selecting the kind of relations of the frameworks using it and the way acceptability is decided.
//! The functions specific to a semantics are implemented on the corresponding framework type.

mod conversions;

mod deductive;
pub use deductive::Deductive;
pub use deductive::DeductiveFramework;

mod evidential;
pub use evidential::BinaryEvidential;
pub use evidential::EvidentialFramework;
pub use evidential::EvidentialSemantics;
pub use evidential::EvidentialSystem;
pub use evidential::SetEvidential;
pub use evidential::DEFAULT_FRAMEWORK_SENTINEL;
pub use evidential::DEFAULT_SYSTEM_SENTINEL;

mod necessity;
pub use necessity::Necessity;
pub use necessity::NecessityFramework;

mod support_closure;
