// =====================================================================
// File: error.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 14, 2026
//
// Description:
//   Error type shared by the record store and the command layer.
//   Lookups in the store itself return `Option`; these variants are
//   what the REPL reports back to the user.
// =====================================================================
use crate::store::RecordId;
use thiserror::Error;

/// Recoverable errors raised while handling a record command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record has this id.
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// Listing was asked to sort on a field records do not have.
    #[error("invalid sort field '{0}' (expected name, color, size or weight)")]
    InvalidSortField(String),

    /// Malformed command input. Only the command layer produces this,
    /// the store always receives typed values.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
