//! Hit and proximity tests shared by the player controller and the
//! creature behavior engine. All tests are pure and strict (`<`) on radii,
//! inclusive (`<=`) on box and height extents.

use glam::Vec3;

/// 3D distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Distance on the ground plane, ignoring height.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Axis-aligned box test around `center`.
pub fn point_in_box(point: Vec3, center: Vec3, half_extents: Vec3) -> bool {
    let d = (point - center).abs();
    d.x <= half_extents.x && d.y <= half_extents.y && d.z <= half_extents.z
}

/// Vertical cylinder test: horizontally closer than `radius` to the axis
/// through `center`, and within `half_height` of it vertically.
pub fn point_in_cylinder(point: Vec3, center: Vec3, radius: f32, half_height: f32) -> bool {
    horizontal_distance(point, center) < radius && (point.y - center.y).abs() <= half_height
}

/// Whether `point` lies in the cylinder around any of `targets`.
pub fn near_any(point: Vec3, targets: &[Vec3], radius: f32, half_height: f32) -> bool {
    targets
        .iter()
        .any(|&t| point_in_cylinder(point, t, radius, half_height))
}
