//! Point-buy - attribute cost table and the budget allocator
//!
//! The allocator is the only place that spends or refunds attribute points,
//! so `remaining == POINT_BUDGET - spent_points(attributes)` holds for every
//! draft built through it.

use crate::domain::value_objects::{Attribute, Attributes, POINT_BUY_MIN};

/// Total points available to a new character
pub const POINT_BUDGET: i32 = 27;

/// Cost of buying a score up from the floor.
///
/// Scores 8-13 cost one point per step; 14 and 15 are surcharged.
/// Returns `None` for scores outside the point-buy band.
pub fn point_cost(score: i32) -> Option<i32> {
    match score {
        POINT_BUY_MIN..=13 => Some(score - POINT_BUY_MIN),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Points spent on a full set of scores, `None` if any score is outside the band
pub fn spent_points(attributes: &Attributes) -> Option<i32> {
    attributes
        .iter()
        .map(|(_, score)| point_cost(score))
        .sum::<Option<i32>>()
}

/// Why the allocator refused a change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("{attribute} must be between 8 and 15 (requested {requested})")]
    OutOfRange { attribute: Attribute, requested: i32 },

    #[error(
        "Not enough attribute points to set {attribute} to {requested}: \
         needs {cost}, {remaining} remaining"
    )]
    InsufficientPoints {
        attribute: Attribute,
        requested: i32,
        cost: i32,
        remaining: i32,
    },
}

/// Result of an accepted allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub attributes: Attributes,
    pub remaining_points: i32,
    /// Points consumed by this change; negative for a refund
    pub cost: i32,
}

/// Set one purchased score, spending or refunding points.
///
/// Accepts iff the new value is within the point-buy band and the budget
/// covers the cost difference. The inputs are never modified.
pub fn allocate(
    attributes: &Attributes,
    remaining_points: i32,
    attribute: Attribute,
    new_value: i32,
) -> Result<Allocation, AllocationError> {
    let new_cost = point_cost(new_value).ok_or(AllocationError::OutOfRange {
        attribute,
        requested: new_value,
    })?;
    let current = attributes.get(attribute);
    let current_cost = point_cost(current).ok_or(AllocationError::OutOfRange {
        attribute,
        requested: current,
    })?;

    let delta = new_cost - current_cost;
    if remaining_points - delta < 0 {
        return Err(AllocationError::InsufficientPoints {
            attribute,
            requested: new_value,
            cost: delta,
            remaining: remaining_points,
        });
    }

    Ok(Allocation {
        attributes: attributes.with(attribute, new_value),
        remaining_points: remaining_points - delta,
        cost: delta,
    })
}
