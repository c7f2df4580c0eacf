// ---------------------------------------------------------------------------
// TilingError: invariant violations reported by TilingStore::verify
// ---------------------------------------------------------------------------

use std::fmt;

use crate::rectangle::RectId;

/// A broken tiling invariant.
///
/// `split` never produces one of these; they exist so tests and the
/// debug-build verifier can say exactly which invariant failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TilingError {
    /// A rectangle extends past the root square.
    OutOfBounds(RectId),
    /// A rectangle has zero or negative width or height.
    Degenerate(RectId),
    /// The map key does not match the id stored in the rectangle.
    KeyMismatch { key: RectId, stored: RectId },
    /// A live id was never handed out by the counter.
    IdNotBelowCounter { id: RectId, next_id: u32 },
    /// Live areas do not sum to the root area.
    AreaMismatch { expected: f64, found: f64 },
    /// Two live rectangles share interior area.
    Overlap(RectId, RectId),
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TilingError::OutOfBounds(id) => write!(f, "Rectangle {id} lies outside the root"),
            TilingError::Degenerate(id) => write!(f, "Rectangle {id} has no area"),
            TilingError::KeyMismatch { key, stored } => {
                write!(f, "Rectangle stored under {key} carries id {stored}")
            }
            TilingError::IdNotBelowCounter { id, next_id } => {
                write!(f, "Rectangle {id} was never allocated (next id is {next_id})")
            }
            TilingError::AreaMismatch { expected, found } => {
                write!(f, "Area mismatch: tiling covers {found}, root is {expected}")
            }
            TilingError::Overlap(a, b) => write!(f, "Rectangles {a} and {b} overlap"),
        }
    }
}

impl std::error::Error for TilingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_overlap_names_both_ids() {
        let msg = TilingError::Overlap(RectId(4), RectId(9)).to_string();
        assert!(msg.contains("#4"), "got: {msg}");
        assert!(msg.contains("#9"), "got: {msg}");
    }

    #[test]
    fn test_display_area_mismatch() {
        let err = TilingError::AreaMismatch {
            expected: 10_000.0,
            found: 5_000.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("5000"), "got: {msg}");
        assert!(msg.contains("10000"), "got: {msg}");
    }

    #[test]
    fn test_display_id_not_below_counter() {
        let err = TilingError::IdNotBelowCounter {
            id: RectId(12),
            next_id: 8,
        };
        let msg = format!("{err}");
        assert!(msg.contains("#12"), "got: {msg}");
        assert!(msg.contains('8'), "got: {msg}");
    }

    #[test]
    fn test_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(TilingError::Degenerate(RectId(2)));
        assert!(err.source().is_none());
        assert!(err.to_string().contains("no area"));
    }
}
