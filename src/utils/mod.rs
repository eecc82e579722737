//! Miscellaneous components used in the library.

mod logging;
pub use logging::init_logger;
pub use logging::init_logger_with_level;

mod search_limits;
pub use search_limits::CancellationToken;
pub use search_limits::SearchGuard;
pub use search_limits::SearchLimits;
pub use search_limits::DEFAULT_MAX_SEARCH_SIZE;
pub use search_limits::DEFAULT_WARN_SEARCH_SIZE;
pub use search_limits::MAX_SEARCH_SIZE_CAP;

mod subsets;
pub use subsets::cartesian_product;
pub use subsets::iter_proper_subsets;
pub use subsets::iter_subsets;
