//! Errors reported by table management and pin operations.
//!
//! Every variant is a caller contract violation rather than a transient
//! condition, so nothing here is retried. A release with no matching acquire
//! is deliberately *not* representable as an error: it panics in
//! [`MuxTable::deactivate`](crate::mux::MuxTable::deactivate), because
//! continuing with corrupted reference accounting would let the hardware
//! drift from what the table claims.

use thiserror::Error;

/// Errors returned by [`MuxTable`](crate::mux::MuxTable) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxError {
    /// The pin table was never allocated.
    #[error("pin table not initialized")]
    NotInitialized,
    /// The pin table was already allocated by an earlier call.
    #[error("pin table already initialized")]
    AlreadyInitialized,
    /// A zero-sized pin table was requested.
    #[error("pin table size must be non-zero")]
    InvalidArgument,
    /// Pin index at or beyond the table size.
    #[error("pin {pin} out of range (table holds {len} pins)")]
    OutOfRange { pin: usize, len: usize },
    /// The table storage could not be allocated.
    #[error("pin table allocation failed")]
    OutOfMemory,
}

/// One board entry that could not be installed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pin {pin} install failed: {source}")]
pub struct InstallFailure {
    pub pin: usize,
    #[source]
    pub source: MuxError,
}

/// Failure report from a bulk install.
///
/// The installer attempts every entry regardless of earlier failures; this
/// collects the entries that were skipped by the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{failed} of {attempted} board entries failed to install", failed = .failures.len())]
pub struct InstallError {
    /// Number of entries in the batch.
    pub attempted: usize,
    /// The entries the table rejected, in batch order.
    pub failures: Vec<InstallFailure>,
}
