//! Ingestion of the fixed-schema building and library description streams.
//!
//! The format is strictly positional and line-oriented: every field occupies
//! one line whose leading label token is discarded unread, and composite
//! sections are preceded by two heading lines that are discarded without
//! inspection. Each stream is consumed once, start to finish, with no
//! backtracking; the first detected anomaly aborts the whole load.

pub mod eplus;
pub mod library;
pub mod record;
pub mod snapshot;

use crate::model::cfs::DecodeError;
use std::io::Write;
use thiserror::Error;

/// Fatal load failures.
///
/// Allocation failure has no variant: child entities are value-owned by their
/// parent containers and cannot be constructed in a null state.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A count field exceeded the format's static maximum.
    #[error("exceeded maximum {kind} limit of {limit} (got {count})")]
    CapacityExceeded {
        kind: &'static str,
        limit: usize,
        count: usize,
    },

    /// A CFS parameter signature was not recognized by the decoder.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The stream ended in the middle of a record.
    #[error("unexpected end of building description")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Enforces a capacity limit right after its count field was read.
///
/// On violation an `ERROR:` line goes to the diagnostic sink and the load
/// aborts; nothing further is read from the offending section.
pub(crate) fn check_capacity(
    kind: &'static str,
    count: usize,
    limit: usize,
    diag: &mut dyn Write,
) -> Result<(), LoadError> {
    if count > limit {
        let _ = writeln!(diag, "ERROR: exceeded maximum {kind} limit of {limit}");
        return Err(LoadError::CapacityExceeded { kind, limit, count });
    }
    Ok(())
}
