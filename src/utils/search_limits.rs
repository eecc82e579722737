use crate::bipolar::BipolarError;
use anyhow::Result;
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The default size of the largest set an exhaustive search accepts to enumerate the subsets of.
pub const DEFAULT_MAX_SEARCH_SIZE: usize = 20;

/// The default size above which a warning is logged before an exhaustive search.
pub const DEFAULT_WARN_SEARCH_SIZE: usize = 14;

/// The largest value accepted for the maximal search size.
///
/// Enumerating the subsets of larger sets would never end anyway.
pub const MAX_SEARCH_SIZE_CAP: usize = 63;

/// Bounds applied to the exhaustive searches performed by a framework.
///
/// Computing minimal evidential supports or minimal attacking sets requires to enumerate the subsets of some sets,
/// which is exponential in their size.
/// These limits make the searches fail early instead of running for an unbounded time.
///
/// # Example
///
/// ```
/// # use crustabip::utils::SearchLimits;
/// # use std::time::Duration;
/// let limits = SearchLimits::default()
///     .with_max_search_size(16)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(16, limits.max_search_size());
/// assert_eq!(Some(Duration::from_secs(10)), limits.timeout());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    max_search_size: usize,
    warn_search_size: usize,
    timeout: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_search_size: DEFAULT_MAX_SEARCH_SIZE,
            warn_search_size: DEFAULT_WARN_SEARCH_SIZE,
            timeout: None,
        }
    }
}

impl SearchLimits {
    /// Sets the size of the largest set whose subsets may be enumerated.
    ///
    /// Values above [`MAX_SEARCH_SIZE_CAP`] are lowered to it.
    pub fn with_max_search_size(mut self, max_search_size: usize) -> Self {
        self.max_search_size = max_search_size.min(MAX_SEARCH_SIZE_CAP);
        self
    }

    /// Sets the size above which a warning is logged before enumerating subsets.
    pub fn with_warn_search_size(mut self, warn_search_size: usize) -> Self {
        self.warn_search_size = warn_search_size;
        self
    }

    /// Sets the time a top-level search may take before being interrupted.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the size of the largest set whose subsets may be enumerated.
    pub fn max_search_size(&self) -> usize {
        self.max_search_size
    }

    /// Returns the size above which a warning is logged before enumerating subsets.
    pub fn warn_search_size(&self) -> usize {
        self.warn_search_size
    }

    /// Returns the time a top-level search may take, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A shared flag used to interrupt the searches of a framework.
///
/// Clones of a token share the same flag, so a token obtained from a framework may be moved to another thread
/// and cancelled from there while a search is running.
/// Once cancelled, every search fails with [`BipolarError::Interrupted`] until [`reset`](Self::reset) is called.
///
/// # Example
///
/// ```
/// # use crustabip::utils::CancellationToken;
/// let token = CancellationToken::default();
/// let other = token.clone();
/// other.cancel();
/// assert!(token.is_cancelled());
/// token.reset();
/// assert!(!other.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Requests the interruption of the searches.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Clears a previous cancellation request.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }

    /// Returns `true` iff an interruption was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// The state of a running search, bundling its limits, its deadline and the cancellation token.
///
/// A guard is created when a top-level search starts, and passed to all the recursive calls it makes.
#[derive(Debug)]
pub struct SearchGuard<'a> {
    limits: &'a SearchLimits,
    deadline: Option<Instant>,
    token: &'a CancellationToken,
}

impl<'a> SearchGuard<'a> {
    pub(crate) fn new(limits: &'a SearchLimits, token: &'a CancellationToken) -> Self {
        let deadline = limits.timeout.and_then(|t| Instant::now().checked_add(t));
        Self {
            limits,
            deadline,
            token,
        }
    }

    /// Checks the search may go on.
    ///
    /// Fails with [`BipolarError::Interrupted`] if the token was cancelled or if the deadline is over.
    pub fn check(&self) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(BipolarError::Interrupted("cancellation requested".to_string()).into());
        }
        if let Some(d) = self.deadline {
            if Instant::now() >= d {
                return Err(BipolarError::Interrupted("deadline exceeded".to_string()).into());
            }
        }
        Ok(())
    }

    /// Checks the subsets of a set of the given size may be enumerated.
    ///
    /// Fails with [`BipolarError::SearchLimitExceeded`] if the size is above the limit,
    /// and logs a warning if it is above the warning threshold.
    pub fn check_size(&self, what: &str, size: usize) -> Result<()> {
        self.check()?;
        if size > self.limits.max_search_size {
            return Err(BipolarError::SearchLimitExceeded(format!(
                "{} has {} arguments while the limit is {}",
                what, size, self.limits.max_search_size
            ))
            .into());
        }
        if size > self.limits.warn_search_size {
            warn!(
                "enumerating the subsets of {} ({} arguments); this may take a while",
                what, size
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = SearchLimits::default();
        assert_eq!(DEFAULT_MAX_SEARCH_SIZE, limits.max_search_size());
        assert_eq!(DEFAULT_WARN_SEARCH_SIZE, limits.warn_search_size());
        assert_eq!(None, limits.timeout());
    }

    #[test]
    fn test_max_search_size_is_capped() {
        let limits = SearchLimits::default().with_max_search_size(1000);
        assert_eq!(MAX_SEARCH_SIZE_CAP, limits.max_search_size());
    }

    #[test]
    fn test_guard_size() {
        let limits = SearchLimits::default().with_max_search_size(3);
        let token = CancellationToken::default();
        let guard = SearchGuard::new(&limits, &token);
        assert!(guard.check_size("test set", 3).is_ok());
        let err = guard.check_size("test set", 4).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::SearchLimitExceeded(_))
        ));
    }

    #[test]
    fn test_guard_cancelled() {
        let limits = SearchLimits::default();
        let token = CancellationToken::default();
        let guard = SearchGuard::new(&limits, &token);
        assert!(guard.check().is_ok());
        token.clone().cancel();
        assert!(matches!(
            guard.check().unwrap_err().downcast_ref::<BipolarError>(),
            Some(BipolarError::Interrupted(_))
        ));
        token.reset();
        assert!(guard.check().is_ok());
    }

    #[test]
    fn test_guard_deadline() {
        let limits = SearchLimits::default().with_timeout(Duration::ZERO);
        let token = CancellationToken::default();
        let guard = SearchGuard::new(&limits, &token);
        assert!(matches!(
            guard.check().unwrap_err().downcast_ref::<BipolarError>(),
            Some(BipolarError::Interrupted(_))
        ));
    }
}
