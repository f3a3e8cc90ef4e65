//! Wheel geometry for a given view size.
//!
//! Everything here is derived from the view's width and height alone:
//!
//! ```text
//! radius      = 0.7 × min(cx, cy)
//! wheel width = 0.25 × radius
//! handle size = wheel width + 4 × border
//! ```
//!
//! Idle handles rest at 0 rad (right) and π rad (left).  Those idle centres
//! are what pointer-downs are tested against, so [`WheelLayout`] is itself the
//! [`HandleLayout`] handed to the tracker.

use calibration_wheel::{HandleLayout, Point, RangeModel};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

const RADIUS_FRACTION:      f32 = 0.7;
const WHEEL_WIDTH_FRACTION: f32 = 0.25;
pub const BORDER:           f32 = 1.5;

pub const RIGHT_IDLE_RAD: f64 = 0.0;
pub const LEFT_IDLE_RAD:  f64 = std::f64::consts::PI;

// ════════════════════════════════════════════════════════════════════════════
// WheelLayout
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelLayout {
    pub center:      Point,
    pub radius:      f32,
    pub wheel_width: f32,
    pub border:      f32,
    pub half_handle: f32,
}

impl WheelLayout {
    pub fn for_view(width: usize, height: usize) -> Self {
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        let radius = cx.min(cy) * RADIUS_FRACTION;
        let wheel_width = radius * WHEEL_WIDTH_FRACTION;
        let handle_size = wheel_width + 4.0 * BORDER;
        WheelLayout {
            center: Point::new(cx, cy),
            radius,
            wheel_width,
            border: BORDER,
            half_handle: handle_size / 2.0,
        }
    }

    /// Centre of a handle sitting at `radians` on the ring.
    pub fn handle_at(&self, radians: f64) -> Point {
        self.center.on_circle(self.radius, radians)
    }

    pub fn handle_size(&self) -> f32 {
        self.half_handle * 2.0
    }

    /// The value bar drawn across the middle of the ring.
    pub fn value_bar(&self) -> ValueBar {
        let inset = self.half_handle + 2.0 * self.border;
        let left = self.handle_at(LEFT_IDLE_RAD);
        let right = self.handle_at(RIGHT_IDLE_RAD);
        ValueBar {
            left:   left.x + inset,
            top:    left.y - self.half_handle,
            right:  right.x - inset,
            bottom: right.y + self.half_handle,
        }
    }
}

impl HandleLayout for WheelLayout {
    fn wheel_center(&self) -> Point { self.center }
    fn left_handle_center(&self) -> Option<Point> { Some(self.handle_at(LEFT_IDLE_RAD)) }
    fn right_handle_center(&self) -> Option<Point> { Some(self.handle_at(RIGHT_IDLE_RAD)) }
    fn half_handle_size(&self) -> f32 { self.half_handle }
}

// ════════════════════════════════════════════════════════════════════════════
// ValueBar
// ════════════════════════════════════════════════════════════════════════════

/// Horizontal bar showing `[minimum, maximum]` against the outer range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBar {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
}

impl ValueBar {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// x coordinate of `value` on the bar.
    pub fn x_for(&self, model: &RangeModel, value: f64) -> f32 {
        self.left + self.width() * model.fraction_of(value) as f32
    }

    /// Left and right x of the filled `[minimum, maximum]` part.
    pub fn fill(&self, model: &RangeModel) -> (f32, f32) {
        (self.x_for(model, model.minimum()), self.x_for(model, model.maximum()))
    }

    /// x of the drive marker, nudged one border width: left when the drive
    /// level is at least half the range's span, right otherwise.  The
    /// threshold is half of `maximum − minimum`, not the range's midpoint.
    pub fn drive_x(&self, model: &RangeModel, border: f32) -> f32 {
        let x = self.x_for(model, model.drive_level());
        if model.drive_level() >= model.span() / 2.0 { x - border } else { x + border }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
