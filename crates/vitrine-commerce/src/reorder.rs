//! Single-element move and renumbering for sibling groups.
//!
//! A drag gesture moves exactly one entity from one position to another
//! within its sibling group; everything else keeps its relative order.
//! After a move the whole group is renumbered 1..N so the backend payload
//! is always contiguous and free of gaps or duplicates.

use crate::catalog::Orderable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reorder validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// An index does not address an element of the group. The engine
    /// rejects the gesture rather than silently reordering to an
    /// unintended position.
    #[error("index {index} out of range for group of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Whether a validated move actually changed the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The element was moved; the group needs renumbering and persisting.
    Moved,
    /// Source and destination were identical; nothing changed and no
    /// persistence call should be issued.
    Unchanged,
}

/// One `{id, sort_order}` pair of a bulk-reorder payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortOrderUpdate {
    pub id: String,
    pub sort_order: i32,
}

/// Move the element at `from` to position `to`, shifting the elements in
/// between while keeping their relative order.
///
/// Both indices are validated against the group length first; `from ==
/// to` is reported as [`MoveOutcome::Unchanged`] without touching the
/// group. The result depends only on the two indices, never on the
/// element values.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<MoveOutcome, ReorderError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ReorderError::IndexOutOfRange { index, len });
        }
    }
    if from == to {
        return Ok(MoveOutcome::Unchanged);
    }

    let moved = items.remove(from);
    items.insert(to, moved);
    Ok(MoveOutcome::Moved)
}

/// Assign every element `sort_order = position + 1` (1-based, contiguous)
/// and return the full payload for the group's bulk-reorder request.
pub fn renumber<T: Orderable>(items: &mut [T]) -> Vec<SortOrderUpdate> {
    items
        .iter_mut()
        .enumerate()
        .map(|(position, item)| {
            let sort_order = position as i32 + 1;
            item.set_sort_order(sort_order);
            SortOrderUpdate {
                id: item.entity_id().to_string(),
                sort_order,
            }
        })
        .collect()
}
