//! Center of pressure over four corner load cells.
//!
//! The platform has a load cell under each corner. The center of pressure
//! is the weight-weighted average of the corner positions, reported as a
//! [`Coordinate`] with the origin at the platform center, +x toward the
//! right edge and +y toward the front edge.

use crate::Coordinate;

/// Smallest total weight treated as an actual load. Below this the
/// platform is considered empty and no position is reported.
const MIN_TOTAL_WEIGHT: f32 = 1e-6;

/// Weights currently measured at each corner, in whatever unit the
/// cells were calibrated to.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CornerWeights {
    pub front_left: f32,
    pub front_right: f32,
    pub back_left: f32,
    pub back_right: f32,
}

impl CornerWeights {
    pub fn total(&self) -> f32 {
        self.front_left + self.front_right + self.back_left + self.back_right
    }
}

/// Physical dimensions of the platform the cells sit under.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Platform {
    half_width: f32,
    half_depth: f32,
}

impl Platform {
    /// `width` spans left to right, `depth` spans back to front, in the
    /// unit positions should be reported in.
    pub fn new(width: f32, depth: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_depth: depth / 2.0,
        }
    }

    /// Where the load currently sits, or `None` for an empty platform.
    pub fn center_of_pressure(&self, weights: &CornerWeights) -> Option<Coordinate> {
        let total = weights.total();
        if total < MIN_TOTAL_WEIGHT {
            return None;
        }
        let x = self.half_width
            * ((weights.front_right + weights.back_right)
                - (weights.front_left + weights.back_left))
            / total;
        let y = self.half_depth
            * ((weights.front_left + weights.front_right)
                - (weights.back_left + weights.back_right))
            / total;
        Some(Coordinate::new(x, y))
    }
}
