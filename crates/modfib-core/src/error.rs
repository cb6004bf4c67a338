//! Error type for orbit enumeration.

/// Errors raised before or around an enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrbitError {
    /// The base is zero or negative.
    #[error("invalid base {0}: base must be positive")]
    InvalidBase(i64),

    /// The state space of the base cannot be indexed on this platform.
    #[error("base {0} is too large: its state space cannot be indexed")]
    BaseTooLarge(i64),

    /// The visited-pair bitmap could not be allocated.
    #[error("cannot allocate {bytes} bytes for the visited-pair bitmap")]
    Allocation {
        /// Bytes requested.
        bytes: usize,
    },

    /// The estimated footprint exceeds the configured memory budget.
    #[error("estimated memory ({required} bytes) exceeds limit ({limit} bytes)")]
    MemoryLimit {
        /// Estimated bytes for the run.
        required: usize,
        /// Configured budget in bytes.
        limit: usize,
    },
}
