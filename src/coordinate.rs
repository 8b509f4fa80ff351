//! 2D point on the platform surface.

/// A mutable 2D coordinate.
///
/// Used to report positions on the platform, with the origin at the
/// platform center. Any float value is valid for either axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    x: f32,
    y: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub const fn get_x(&self) -> f32 {
        self.x
    }

    pub const fn get_y(&self) -> f32 {
        self.y
    }
}
