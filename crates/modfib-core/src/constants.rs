//! Constants for orbit enumeration and process exit codes.

/// Base used when the command line does not supply a parseable one.
pub const DEFAULT_BASE: i64 = 10;

/// Number of state-pair bits held by one storage word of the visited set.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Bytes needed to hold one residue of an emitted orbit.
pub const RESIDUE_BYTES: usize = std::mem::size_of::<u32>();

/// Exit codes returned by the `modfib` binary.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (base out of range, memory budget exceeded,
    /// bitmap allocation refused).
    pub const ERROR_CONFIG: i32 = 4;
}
