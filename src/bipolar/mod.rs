//! This module contains the main material used to define bipolar argumentation frameworks.

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod bipolar_framework;
pub use bipolar_framework::BipolarFramework;
pub use bipolar_framework::BipolarSemantics;

mod error;
pub use error::BipolarError;

mod relation_index;

mod relations;
pub use relations::Attack;
pub use relations::BinaryAttack;
pub use relations::BinarySupport;
pub use relations::BipolarEntity;
pub use relations::Endpoint;
pub use relations::Relation;
pub use relations::SetAttack;
pub use relations::SetSupport;
pub use relations::Support;

pub use crate::semantics::DeductiveFramework;
pub use crate::semantics::EvidentialFramework;
pub use crate::semantics::EvidentialSystem;
pub use crate::semantics::NecessityFramework;
