//! Pixel-space points and the angle arithmetic behind rotational drags.

// ════════════════════════════════════════════════════════════════════════════
// Tuning constants
// ════════════════════════════════════════════════════════════════════════════

/// A handle is hit within this multiple of its half-size.
pub const HIT_SLOP: f32 = 1.1;

/// A raw per-event delta larger than this (degrees) is taken to be a crossing
/// of the ±180° seam of `atan2` rather than a real movement.
pub const SEAM_JUMP_DEG: f64 = 100.0;

/// Largest per-event rotation (degrees) accepted as a drag step.
pub const MAX_STEP_DEG: f64 = 20.0;

/// Slack on [`MAX_STEP_DEG`] for `f32` pixel rounding: a pointer placed at
/// exactly ±170° comes back as ±169.9999994°, which would push an exact 20°
/// step just past the limit.
pub const STEP_TOLERANCE_DEG: f64 = 1e-4;

// ════════════════════════════════════════════════════════════════════════════
// Point
// ════════════════════════════════════════════════════════════════════════════

/// A position in the host's pixel coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point at `radius` from `self` in direction `radians`.
    pub fn on_circle(self, radius: f32, radians: f64) -> Point {
        Point {
            x: self.x + (radians.cos() as f32) * radius,
            y: self.y + (radians.sin() as f32) * radius,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Angles
// ════════════════════════════════════════════════════════════════════════════

/// Angle of `p` around `center` in degrees, in `(-180, 180]`.
pub fn angle_degrees(center: Point, p: Point) -> f64 {
    let dy = f64::from(p.y - center.y);
    let dx = f64::from(p.x - center.x);
    dy.atan2(dx).to_degrees()
}

/// Delta between two successive angles, corrected for a crossing of the
/// ±180° seam.
///
/// The corrected value is `360 − |last| − |current|`, negated when
/// `current > 0`.  The sign rule is kept as-is even though it is asymmetric.
pub fn seam_corrected_delta(last: f64, current: f64) -> f64 {
    let diff = current - last;
    if diff.abs() <= SEAM_JUMP_DEG {
        return diff;
    }
    let short = 360.0 - last.abs() - current.abs();
    if current > 0.0 { -short } else { short }
}

/// The seam-corrected delta if it is small enough to be a real drag step.
pub fn drag_step(last: f64, current: f64) -> Option<f64> {
    let diff = seam_corrected_delta(last, current);
    (diff.abs() <= MAX_STEP_DEG + STEP_TOLERANCE_DEG).then_some(diff)
}

/// Whether `p` lands on a handle centred at `center`.
pub fn handle_hit(center: Point, half_size: f32, p: Point) -> bool {
    center.distance_to(p) <= half_size * HIT_SLOP
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(0.0, 0.0);

    #[test]
    fn angle_follows_screen_axes() {
        assert_eq!(angle_degrees(ORIGIN, Point::new(10.0, 0.0)), 0.0);
        assert!((angle_degrees(ORIGIN, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((angle_degrees(ORIGIN, Point::new(-10.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((angle_degrees(ORIGIN, Point::new(0.0, -10.0)) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn small_deltas_pass_through() {
        assert_eq!(seam_corrected_delta(10.0, 25.0), 15.0);
        assert_eq!(seam_corrected_delta(-40.0, -60.0), -20.0);
        assert_eq!(seam_corrected_delta(0.0, 100.0), 100.0);
    }

    #[test]
    fn seam_crossing_from_positive_side() {
        // naive diff is −340
        assert_eq!(seam_corrected_delta(170.0, -170.0), 20.0);
        assert_eq!(drag_step(170.0, -170.0), Some(20.0));
    }

    #[test]
    fn seam_crossing_from_negative_side() {
        // naive diff is +340, current > 0 negates
        assert_eq!(seam_corrected_delta(-170.0, 170.0), -20.0);
    }

    #[test]
    fn large_jumps_are_rejected() {
        assert_eq!(drag_step(0.0, 50.0), None);
        assert_eq!(drag_step(0.0, -21.0), None);
        assert_eq!(drag_step(0.0, 20.0), Some(20.0));
    }

    #[test]
    fn pixel_rounding_at_the_step_limit_is_absorbed() {
        // ±170° after an f32 round trip through pixel coordinates
        let p = Point::new(0.0, 0.0).on_circle(100.0, 170f64.to_radians());
        let last = angle_degrees(ORIGIN, p);
        let current = angle_degrees(ORIGIN, Point::new(p.x, -p.y));
        let step = drag_step(last, current).expect("20° seam step applied");
        assert!((step - 20.0).abs() < 1e-4);
        assert_eq!(drag_step(0.0, 20.001), None);
    }

    #[test]
    fn hit_radius_includes_slop() {
        let c = Point::new(100.0, 100.0);
        assert!(handle_hit(c, 10.0, Point::new(110.5, 100.0)));
        assert!(!handle_hit(c, 10.0, Point::new(111.5, 100.0)));
    }

    #[test]
    fn on_circle_places_point() {
        let p = Point::new(50.0, 50.0).on_circle(20.0, std::f64::consts::PI);
        assert!((p.x - 30.0).abs() < 1e-4);
        assert!((p.y - 50.0).abs() < 1e-4);
    }
}
