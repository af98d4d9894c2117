//! Block ordering rules.
//!
//! Blocks carry an integer `order`; a reorder request lists block ids in
//! their new sequence and each id receives its index as its order.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate a reorder request.
///
/// The list must be non-empty and free of duplicates. Ids that do not belong
/// to the project are filtered out later by the owner-scoped update.
pub fn validate_reorder(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation("Blocks array is required".into()));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Block {id} appears more than once in the order"
            )));
        }
    }
    Ok(())
}

/// Pair each block id with its new order (its position in the list).
pub fn assign_orders(ids: &[DbId]) -> Vec<(DbId, i32)> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i32))
        .collect()
}

/// Order for a block appended after the current last block.
///
/// Fails when the last block already holds the largest representable order.
pub fn next_order(current_max: Option<i32>) -> Result<i32, CoreError> {
    match current_max {
        None => Ok(0),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            CoreError::Validation(
                "Cannot append a block after the maximum order; reorder the blocks first".into(),
            )
        }),
    }
}
