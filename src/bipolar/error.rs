/// The kinds of errors raised by bipolar frameworks.
///
/// Functions of this crate return [anyhow::Result] values.
/// When an error belongs to this taxonomy, the underlying error is a [BipolarError]
/// that can be recovered with [anyhow::Error::downcast_ref], even if some context was attached to it.
///
/// All these errors are raised before any modification of the framework occurs.
///
/// # Example
///
/// ```
/// # use crustabip::bipolar::{Argument, BipolarError, EvidentialFramework};
/// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
/// let err = framework
///     .add_attack_by_labels(&["a"], &"eta")
///     .unwrap_err();
/// assert!(matches!(
///     err.downcast_ref::<BipolarError>(),
///     Some(BipolarError::ForbiddenSentinelUse(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BipolarError {
    /// A relation does not fit the endpoint arity of the framework.
    #[error("invalid relation type: {0}")]
    InvalidRelationType(String),

    /// The sentinel argument was used where it is not allowed.
    #[error("forbidden use of the sentinel argument: {0}")]
    ForbiddenSentinelUse(String),

    /// A precondition of a set-relative check does not hold.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),

    /// The operation is not defined for this kind of framework.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An exhaustive search would involve a set larger than the configured bound.
    #[error("search limit exceeded: {0}")]
    SearchLimitExceeded(String),

    /// A search was cancelled or ran past its deadline.
    #[error("search interrupted: {0}")]
    Interrupted(String),
}
