//! Angle and circle helpers.
//!
//! Angles are in degrees unless a name says otherwise, measured
//! counter-clockwise from the positive x-axis.

use glam::Vec2;

/// Convert an angle from degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Double-precision flavour of [`to_radians`].
#[inline]
pub fn to_radians_f64(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

/// Point at `distance` from `center` in the direction of `angle` degrees.
///
/// A negative distance yields the point on the opposite side of the circle.
pub fn point_on_circle(center: Vec2, distance: f32, angle: f32) -> Vec2 {
    let (sin, cos) = to_radians(angle).sin_cos();
    Vec2::new(center.x + distance * cos, center.y + distance * sin)
}

/// Degree conversion as a method on `f32`.
pub trait AngleExt {
    fn deg_to_rad(self) -> Self;
}

impl AngleExt for f32 {
    #[inline]
    fn deg_to_rad(self) -> f32 {
        to_radians(self)
    }
}

/// Circle geometry as a method on a center point.
pub trait CircleExt {
    fn point_on_circle(self, distance: f32, angle: f32) -> Self;
}

impl CircleExt for Vec2 {
    #[inline]
    fn point_on_circle(self, distance: f32, angle: f32) -> Vec2 {
        point_on_circle(self, distance, angle)
    }
}
