//! 2D vector arithmetic and angle helpers.
//!
//! Angles are in degrees, measured from the +x axis towards +y. With the
//! map's y axis pointing down, a negative rotation turns to the left.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector with the same direction, or `None` for the zero vector.
    pub fn versor(self) -> Option<Vector2D> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            None
        } else {
            Some(self / len)
        }
    }

    /// Angle of the vector relative to the +x axis, in degrees.
    pub fn base_angle(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn from_angle(degrees: f64) -> Vector2D {
        let radians = degrees.to_radians();
        Vector2D::new(radians.cos(), radians.sin())
    }

    /// Unit vector rotated by `degrees` from this vector's base angle.
    pub fn rotated(self, degrees: f64) -> Vector2D {
        Vector2D::from_angle(self.base_angle() + degrees)
    }
}

/// Snap `v` to the nearest direction whose angle is an integer multiple of
/// `step` degrees. The result is always a unit vector.
pub fn closest_vec_multiple_angle(v: Vector2D, step: f64) -> Vector2D {
    let snapped = (v.base_angle() / step).round() * step;
    Vector2D::from_angle(snapped)
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;
    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}
