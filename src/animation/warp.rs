//! Coordinate warps that make the mark appear to flap and sway.

/// Per-frame warp parameters: a pivot and the current wing-flap factor.
///
/// All mappings are pure. With `horizontal_factor = 1` the x mappings are the identity; every
/// mapping fixes `center_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warp {
    /// Horizontal pivot in artwork units.
    pub center_x: f64,
    /// Wing-flap factor in `[0.7, 1.0]` while animating.
    pub horizontal_factor: f64,
}

impl Warp {
    /// Build a warp from its two parameters.
    pub fn new(center_x: f64, horizontal_factor: f64) -> Self {
        Self {
            center_x,
            horizontal_factor,
        }
    }

    /// Distance-weighted warp for points on the left wing.
    ///
    /// Points far from the pivot move more than points near it, giving a perspective flap.
    pub fn left(&self, x: f64) -> f64 {
        let to_center = self.center_x - x;
        let factor = self.weighted_factor(to_center);
        self.center_x - factor * to_center
    }

    /// Mirror of [`Warp::left`] for points on the right wing.
    pub fn right(&self, x: f64) -> f64 {
        let from_center = x - self.center_x;
        let factor = self.weighted_factor(from_center);
        self.center_x + factor * from_center
    }

    /// Uniform scale about the pivot, used for the tail.
    pub fn flip(&self, x: f64) -> f64 {
        self.center_x + self.horizontal_factor * (x - self.center_x)
    }

    /// Vertical sway of the tail, in sync with the wings.
    pub fn tail_y(&self, y: f64) -> f64 {
        (self.horizontal_factor - 0.7) * 50.0 + y
    }

    fn weighted_factor(&self, distance: f64) -> f64 {
        if self.center_x == 0.0 {
            return self.horizontal_factor;
        }
        1.0 - (1.0 - self.horizontal_factor) * (distance / self.center_x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/warp.rs"]
mod tests;
