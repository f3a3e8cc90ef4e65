//! The five bounded quantities of a calibration wheel and the clamp cascade
//! that keeps them consistent.
//!
//! Resolution order when quantities conflict:
//!
//! 1. the outer edges `[left_edge, right_edge]` win over everything,
//! 2. `min_range` wins over a requested minimum or maximum,
//! 3. the inner range `[minimum, maximum]` wins over the drive level.
//!
//! Every public setter leaves the model satisfying
//!
//! ```text
//! 0 ≤ left_edge ≤ right_edge ≤ max_range
//! left_edge ≤ minimum ≤ maximum ≤ right_edge
//! maximum − minimum ≥ min(min_range, right_edge − left_edge)
//! minimum ≤ drive_level ≤ maximum
//! ```

// ════════════════════════════════════════════════════════════════════════════
// Defaults
// ════════════════════════════════════════════════════════════════════════════

/// Outer range of a freshly created wheel.
pub const DEFAULT_MAX_RANGE: f64 = 1000.0;

/// Default minimum width, as a fraction of the outer range.
pub const DEFAULT_MIN_RANGE_FRACTION: f64 = 0.1;

/// Full drag rotations needed to sweep the whole outer range.
pub const DEFAULT_TURNS: f64 = 5.0;

/// Floor applied to a zero, negative or non-finite turn count.
pub const MIN_TURNS: f64 = 0.01;

// ════════════════════════════════════════════════════════════════════════════
// RangeModel
// ════════════════════════════════════════════════════════════════════════════

/// Owner of the calibrated range, its outer edges and the drive marker.
///
/// Mutation happens only through the setters below.  The `*_silent` variants
/// apply the same clamps as their notifying twins but do not request a
/// redraw; the gesture tracker uses them for intermediate drag steps.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeModel {
    max_range:     f64,
    min_range:     f64,
    turns:         f64,
    left_edge:     f64,
    right_edge:    f64,
    minimum:       f64,
    maximum:       f64,
    drive_level:   f64,
    drive_visible: bool,
    needs_redraw:  bool,
}

impl Default for RangeModel {
    fn default() -> Self {
        RangeModel::new(DEFAULT_MAX_RANGE)
    }
}

impl RangeModel {
    /// A model spanning `[0, max_range]` with the inner range fully open and
    /// `min_range` at 10 % of the outer range.
    pub fn new(max_range: f64) -> Self {
        let max_range = if max_range.is_finite() { max_range.max(0.0) } else { DEFAULT_MAX_RANGE };
        RangeModel {
            max_range,
            min_range:     max_range * DEFAULT_MIN_RANGE_FRACTION,
            turns:         DEFAULT_TURNS,
            left_edge:     0.0,
            right_edge:    max_range,
            minimum:       0.0,
            maximum:       max_range,
            drive_level:   0.0,
            drive_visible: false,
            needs_redraw:  true,
        }
    }

    // ── getters ───────────────────────────────────────────────────────────

    pub fn max_range(&self)     -> f64  { self.max_range }
    pub fn min_range(&self)     -> f64  { self.min_range }
    pub fn turns(&self)         -> f64  { self.turns }
    pub fn left_edge(&self)     -> f64  { self.left_edge }
    pub fn right_edge(&self)    -> f64  { self.right_edge }
    pub fn minimum(&self)       -> f64  { self.minimum }
    pub fn maximum(&self)       -> f64  { self.maximum }
    pub fn drive_level(&self)   -> f64  { self.drive_level }
    pub fn is_drive_visible(&self) -> bool { self.drive_visible }

    /// Width of the calibrated range.
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// `value` as a fraction of the outer range; 0 for an empty outer range.
    pub fn fraction_of(&self, value: f64) -> f64 {
        if self.max_range > 0.0 { value / self.max_range } else { 0.0 }
    }

    // ── redraw bookkeeping ────────────────────────────────────────────────

    /// Mark the model as changed since the last frame.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw was requested and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    // ── outer configuration ───────────────────────────────────────────────

    /// Set the outer range.  Never shrinks below either edge.
    pub fn set_max_range(&mut self, value: f64) {
        let Some(mut value) = finite("max_range", value) else { return };
        if self.left_edge > value {
            value = self.left_edge;
        }
        if self.right_edge > value {
            value = self.right_edge;
        }
        self.max_range = value;
        if self.min_range > self.max_range {
            self.min_range = self.max_range;
        }
        self.request_redraw();
    }

    /// Set the minimum width of `[minimum, maximum]`, clamped into
    /// `[0, max_range]`.
    pub fn set_min_range(&mut self, value: f64) {
        let Some(value) = finite("min_range", value) else { return };
        self.min_range = value.max(0.0).min(self.max_range);
        self.reclamp_inner();
        self.request_redraw();
    }

    /// Set how many full rotations sweep the outer range.
    pub fn set_turns(&mut self, value: f64) {
        if value.is_finite() && value > 0.0 {
            self.turns = value;
        } else {
            log::warn!("turns = {value} is not positive, using {MIN_TURNS}");
            self.turns = MIN_TURNS;
        }
        self.request_redraw();
    }

    /// Move the left outer edge and pull the inner range along with it.
    pub fn set_left_edge(&mut self, value: f64) {
        let Some(mut value) = finite("left_edge", value) else { return };
        if value < 0.0 {
            value = 0.0;
        }
        if value > self.right_edge {
            value = self.right_edge;
        }
        if value > self.max_range {
            value = self.max_range;
        }
        self.left_edge = value;
        self.reclamp_inner();
    }

    /// Move the right outer edge and pull the inner range along with it.
    pub fn set_right_edge(&mut self, value: f64) {
        let Some(mut value) = finite("right_edge", value) else { return };
        if value < 0.0 {
            value = 0.0;
        }
        if value < self.left_edge {
            value = self.left_edge;
        }
        if value > self.max_range {
            value = self.max_range;
        }
        self.right_edge = value;
        self.reclamp_inner();
    }

    // Minimum, maximum, then minimum again: a right edge lowered below the
    // current minimum pulls the maximum down first, and the second minimum
    // pass then restores the width against the new maximum.
    fn reclamp_inner(&mut self) {
        self.set_minimum(self.minimum);
        self.set_maximum(self.maximum);
        self.set_minimum(self.minimum);
    }

    // ── calibrated range ──────────────────────────────────────────────────

    /// Set the lower bound and request a redraw.
    pub fn set_minimum(&mut self, value: f64) {
        self.set_minimum_silent(value);
        self.request_redraw();
    }

    /// Set the lower bound without requesting a redraw.
    pub fn set_minimum_silent(&mut self, value: f64) {
        let Some(mut value) = finite("minimum", value) else { return };
        if value + self.min_range > self.maximum {
            value = self.maximum - self.min_range;
        }
        if value < self.left_edge {
            value = self.left_edge;
        }
        if value > self.drive_level {
            self.drive_level = value;
        }
        self.minimum = value;
    }

    /// Set the upper bound and request a redraw.
    pub fn set_maximum(&mut self, value: f64) {
        self.set_maximum_silent(value);
        self.request_redraw();
    }

    /// Set the upper bound without requesting a redraw.
    pub fn set_maximum_silent(&mut self, value: f64) {
        let Some(mut value) = finite("maximum", value) else { return };
        if self.minimum + self.min_range > value {
            value = self.minimum + self.min_range;
        }
        if value > self.right_edge {
            value = self.right_edge;
        }
        if value < self.drive_level {
            self.drive_level = value;
        }
        self.maximum = value;
    }

    // ── drive marker ──────────────────────────────────────────────────────

    /// Move the drive marker, clamped into `[minimum, maximum]`.
    pub fn set_drive_level(&mut self, value: f64) {
        let Some(mut value) = finite("drive_level", value) else { return };
        if value < self.minimum {
            value = self.minimum;
        }
        if value > self.maximum {
            value = self.maximum;
        }
        self.drive_level = value;
        if self.drive_visible {
            self.request_redraw();
        }
    }

    /// Show or hide the drive marker.  While visible, the right handle moves
    /// the drive level instead of the maximum and the left handle is hidden.
    pub fn set_drive_visible(&mut self, visible: bool) {
        self.drive_visible = visible;
        self.request_redraw();
    }
}

fn finite(name: &str, value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        log::warn!("ignoring non-finite {name} = {value}");
        None
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(m: &RangeModel) {
        assert!(0.0 <= m.left_edge());
        assert!(m.left_edge() <= m.right_edge());
        assert!(m.right_edge() <= m.max_range());
        assert!(m.left_edge() <= m.minimum());
        assert!(m.minimum() <= m.maximum());
        assert!(m.maximum() <= m.right_edge());
        let width = m.min_range().min(m.right_edge() - m.left_edge());
        assert!(m.span() >= width - 1e-9, "span {} < {}", m.span(), width);
        assert!(m.minimum() <= m.drive_level() && m.drive_level() <= m.maximum());
    }

    // ── defaults ──────────────────────────────────────────────────────────
    #[test]
    fn defaults_match_fresh_control() {
        let m = RangeModel::default();
        assert_eq!(m.max_range(), 1000.0);
        assert_eq!(m.min_range(), 100.0);
        assert_eq!(m.turns(), 5.0);
        assert_eq!(m.minimum(), m.left_edge());
        assert_eq!(m.maximum(), m.max_range());
        assert_eq!(m.drive_level(), 0.0);
        assert!(!m.is_drive_visible());
        assert_consistent(&m);
    }

    // ── minimum ───────────────────────────────────────────────────────────
    #[test]
    fn min_range_wins_over_requested_minimum() {
        let mut m = RangeModel::default();
        m.set_maximum(500.0);
        m.set_minimum(450.0);
        assert_eq!(m.minimum(), 400.0);
    }

    #[test]
    fn minimum_never_below_left_edge() {
        let mut m = RangeModel::default();
        m.set_left_edge(200.0);
        m.set_minimum(50.0);
        assert_eq!(m.minimum(), 200.0);
    }

    #[test]
    fn set_minimum_is_idempotent() {
        let mut once = RangeModel::default();
        once.set_minimum(720.0);
        let mut twice = once.clone();
        twice.set_minimum(720.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn raising_minimum_raises_drive() {
        let mut m = RangeModel::default();
        m.set_minimum(100.0);
        m.set_drive_level(100.0);
        m.set_minimum(150.0);
        assert_eq!(m.drive_level(), 150.0);
    }

    // ── maximum ───────────────────────────────────────────────────────────
    #[test]
    fn min_range_wins_over_requested_maximum() {
        let mut m = RangeModel::default();
        m.set_minimum(300.0);
        m.set_maximum(320.0);
        assert_eq!(m.maximum(), 400.0);
    }

    #[test]
    fn lowering_maximum_lowers_drive() {
        let mut m = RangeModel::default();
        m.set_drive_level(900.0);
        m.set_maximum(600.0);
        assert_eq!(m.drive_level(), 600.0);
    }

    // ── edges ─────────────────────────────────────────────────────────────
    #[test]
    fn right_edge_pulls_maximum_down() {
        let mut m = RangeModel::default();
        m.set_maximum(800.0);
        m.set_right_edge(500.0);
        assert_eq!(m.maximum(), 500.0);
        assert_consistent(&m);
    }

    #[test]
    fn right_edge_below_minimum_pulls_both_bounds() {
        let mut m = RangeModel::default();
        m.set_minimum(700.0);
        m.set_maximum(800.0);
        m.set_drive_level(750.0);
        m.set_right_edge(500.0);
        assert_eq!(m.maximum(), 500.0);
        assert_eq!(m.minimum(), 400.0);
        assert_eq!(m.drive_level(), 500.0);
        assert_consistent(&m);
    }

    #[test]
    fn left_edge_above_maximum_pushes_both_bounds() {
        let mut m = RangeModel::default();
        m.set_maximum(200.0);
        m.set_left_edge(600.0);
        assert_eq!(m.minimum(), 600.0);
        assert_eq!(m.maximum(), 700.0);
        assert_consistent(&m);
    }

    #[test]
    fn narrow_edges_cap_the_width() {
        let mut m = RangeModel::default();
        m.set_left_edge(600.0);
        m.set_right_edge(650.0);
        assert_eq!(m.minimum(), 600.0);
        assert_eq!(m.maximum(), 650.0);
        assert_consistent(&m);
    }

    #[test]
    fn left_edge_clamped_to_right_edge() {
        let mut m = RangeModel::default();
        m.set_right_edge(300.0);
        m.set_left_edge(900.0);
        assert_eq!(m.left_edge(), 300.0);
        m.set_left_edge(-5.0);
        assert_eq!(m.left_edge(), 0.0);
    }

    #[test]
    fn right_edge_lower_bound_is_left_edge() {
        let mut m = RangeModel::default();
        m.set_left_edge(400.0);
        m.set_right_edge(100.0);
        assert_eq!(m.right_edge(), 400.0);
        m.set_right_edge(5000.0);
        assert_eq!(m.right_edge(), 1000.0);
    }

    // ── outer configuration ───────────────────────────────────────────────
    #[test]
    fn max_range_never_shrinks_below_edges() {
        let mut m = RangeModel::default();
        m.set_max_range(10.0);
        assert_eq!(m.max_range(), 1000.0);
        m.set_right_edge(400.0);
        m.set_max_range(10.0);
        assert_eq!(m.max_range(), 400.0);
    }

    #[test]
    fn min_range_clamped_and_applied() {
        let mut m = RangeModel::default();
        m.set_min_range(-3.0);
        assert_eq!(m.min_range(), 0.0);
        m.set_min_range(5000.0);
        assert_eq!(m.min_range(), 1000.0);

        let mut m = RangeModel::default();
        m.set_minimum(400.0);
        m.set_maximum(500.0);
        m.set_min_range(300.0);
        assert!(m.span() >= 300.0);
        assert_consistent(&m);
    }

    #[test]
    fn non_positive_turns_are_floored() {
        let mut m = RangeModel::default();
        m.set_turns(0.0);
        assert_eq!(m.turns(), MIN_TURNS);
        m.set_turns(-2.0);
        assert_eq!(m.turns(), MIN_TURNS);
        m.set_turns(3.0);
        assert_eq!(m.turns(), 3.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut m = RangeModel::default();
        m.set_minimum(120.0);
        m.set_minimum(f64::NAN);
        m.set_maximum(f64::INFINITY);
        m.set_left_edge(f64::NEG_INFINITY);
        assert_eq!(m.minimum(), 120.0);
        assert_eq!(m.maximum(), 1000.0);
        assert_eq!(m.left_edge(), 0.0);
    }

    // ── drive ─────────────────────────────────────────────────────────────
    #[test]
    fn drive_clamped_into_inner_range() {
        let mut m = RangeModel::default();
        m.set_minimum(200.0);
        m.set_maximum(600.0);
        m.set_drive_level(10.0);
        assert_eq!(m.drive_level(), 200.0);
        m.set_drive_level(990.0);
        assert_eq!(m.drive_level(), 600.0);
    }

    #[test]
    fn hidden_drive_does_not_request_redraw() {
        let mut m = RangeModel::default();
        m.take_redraw();
        m.set_drive_level(300.0);
        assert!(!m.take_redraw());
        m.set_drive_visible(true);
        assert!(m.take_redraw());
        m.set_drive_level(310.0);
        assert!(m.take_redraw());
    }

    #[test]
    fn silent_setters_do_not_request_redraw() {
        let mut m = RangeModel::default();
        m.take_redraw();
        m.set_minimum_silent(50.0);
        m.set_maximum_silent(900.0);
        assert!(!m.take_redraw());
        m.set_minimum(60.0);
        assert!(m.take_redraw());
        assert!(!m.take_redraw());
    }

    #[test]
    fn fraction_of_empty_range_is_zero() {
        let m = RangeModel::new(0.0);
        assert_eq!(m.fraction_of(5.0), 0.0);
        assert_eq!(RangeModel::default().fraction_of(250.0), 0.25);
    }
}
