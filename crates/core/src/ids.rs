//! Identifier validation for ids arriving as raw strings.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw path segment into a [`DbId`].
///
/// Only positive integers are well-formed: BIGSERIAL keys start at 1.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    let id: DbId = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))?;
    ensure_valid_id(id)
}

/// Reject ids that can never name a row.
pub fn ensure_valid_id(id: DbId) -> Result<DbId, CoreError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(CoreError::InvalidId(id.to_string()))
    }
}
