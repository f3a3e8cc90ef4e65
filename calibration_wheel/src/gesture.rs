//! Pointer gestures → value changes.
//!
//! [`GestureTracker`] follows one drag at a time.  A pointer-down on a handle
//! grabs it; every pointer-move turns the rotation around the wheel centre
//! into a value delta on the grabbed quantity; pointer-up or pointer-cancel
//! releases it.
//!
//! The tracker never stores handle positions itself.  They come from a
//! [`HandleLayout`] supplied by whoever draws the wheel, queried fresh on every
//! event.

use crate::geometry::{self, Point};
use crate::model::RangeModel;

// ════════════════════════════════════════════════════════════════════════════
// Pointer input
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event in the host's pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub action:   PointerAction,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32)   -> Self { Self::at(PointerAction::Down, x, y) }
    pub fn moved(x: f32, y: f32)  -> Self { Self::at(PointerAction::Move, x, y) }
    pub fn up(x: f32, y: f32)     -> Self { Self::at(PointerAction::Up, x, y) }
    pub fn cancel(x: f32, y: f32) -> Self { Self::at(PointerAction::Cancel, x, y) }

    fn at(action: PointerAction, x: f32, y: f32) -> Self {
        PointerEvent { action, position: Point::new(x, y) }
    }
}

/// Whether the tracker used an event or left it to the host's default
/// handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

// ════════════════════════════════════════════════════════════════════════════
// Handles and notifications
// ════════════════════════════════════════════════════════════════════════════

/// Which handle currently owns the drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveHandle {
    #[default]
    None,
    /// Drives the minimum.
    Left,
    /// Drives the maximum, or the drive level while the drive marker is shown.
    Right,
}

/// The bound a range notification refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Minimum,
    Maximum,
}

/// A change notification, as recorded by the `Vec` listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelChange {
    Range(Bound),
    Drive,
}

/// Receives change notifications synchronously.
///
/// Listeners only see the model by shared reference and cannot reach the
/// tracker, so a notification can never re-enter the gesture in progress.
pub trait WheelListener {
    fn on_range_changed(&mut self, _model: &RangeModel, _bound: Bound) {}
    fn on_drive_changed(&mut self, _model: &RangeModel) {}
}

impl WheelListener for () {}

impl WheelListener for Vec<WheelChange> {
    fn on_range_changed(&mut self, _model: &RangeModel, bound: Bound) {
        self.push(WheelChange::Range(bound));
    }
    fn on_drive_changed(&mut self, _model: &RangeModel) {
        self.push(WheelChange::Drive);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandleLayout — supplied by the renderer
// ════════════════════════════════════════════════════════════════════════════

/// Where the renderer currently has the wheel and its handles.
///
/// A handle centre is `None` until the renderer has laid it out; such a
/// handle can never be hit.
pub trait HandleLayout {
    fn wheel_center(&self) -> Point;
    fn left_handle_center(&self) -> Option<Point>;
    fn right_handle_center(&self) -> Option<Point>;
    fn half_handle_size(&self) -> f32;
}

/// A plain copy of a renderer's handle positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandleSnapshot {
    pub center:      Point,
    pub left:        Option<Point>,
    pub right:       Option<Point>,
    pub half_size:   f32,
}

impl HandleLayout for HandleSnapshot {
    fn wheel_center(&self) -> Point { self.center }
    fn left_handle_center(&self) -> Option<Point> { self.left }
    fn right_handle_center(&self) -> Option<Point> { self.right }
    fn half_handle_size(&self) -> f32 { self.half_size }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureTracker
// ════════════════════════════════════════════════════════════════════════════

/// Transient drag state for one wheel.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    active:     ActiveHandle,
    last_angle: f64,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_handle(&self) -> ActiveHandle {
        self.active
    }

    /// Angle (degrees) of the last pointer position around the wheel centre;
    /// 0 when no drag is in progress.
    pub fn last_angle_degrees(&self) -> f64 {
        self.last_angle
    }

    /// Feed one pointer event.  Events must arrive in order
    /// (down → move* → up/cancel).
    pub fn on_pointer<L, W>(
        &mut self,
        event:    PointerEvent,
        model:    &mut RangeModel,
        layout:   &L,
        listener: &mut W,
    ) -> EventResult
    where
        L: HandleLayout + ?Sized,
        W: WheelListener + ?Sized,
    {
        match event.action {
            PointerAction::Down => self.pointer_down(event.position, model, layout, listener),
            PointerAction::Move => self.pointer_move(event.position, model, layout, listener),
            PointerAction::Up | PointerAction::Cancel => {
                if self.active != ActiveHandle::None {
                    log::debug!("released {:?} handle", self.active);
                }
                self.active = ActiveHandle::None;
                self.last_angle = 0.0;
                model.request_redraw();
                EventResult::Ignored
            }
        }
    }

    fn pointer_down<L, W>(
        &mut self,
        p:        Point,
        model:    &mut RangeModel,
        layout:   &L,
        listener: &mut W,
    ) -> EventResult
    where
        L: HandleLayout + ?Sized,
        W: WheelListener + ?Sized,
    {
        if self.active != ActiveHandle::None {
            return EventResult::Ignored;
        }

        let half = layout.half_handle_size();
        let hits = |center: Option<Point>| {
            center.is_some_and(|c| geometry::handle_hit(c, half, p))
        };

        self.active = if !model.is_drive_visible() && hits(layout.left_handle_center()) {
            ActiveHandle::Left
        } else if hits(layout.right_handle_center()) {
            ActiveHandle::Right
        } else {
            ActiveHandle::None
        };

        match self.active {
            ActiveHandle::None => return EventResult::Ignored,
            ActiveHandle::Left => listener.on_range_changed(model, Bound::Minimum),
            ActiveHandle::Right if model.is_drive_visible() => listener.on_drive_changed(model),
            ActiveHandle::Right => listener.on_range_changed(model, Bound::Maximum),
        }

        self.last_angle = geometry::angle_degrees(layout.wheel_center(), p);
        log::debug!("grabbed {:?} handle at {:.1}°", self.active, self.last_angle);
        model.request_redraw();
        EventResult::Consumed
    }

    fn pointer_move<L, W>(
        &mut self,
        p:        Point,
        model:    &mut RangeModel,
        layout:   &L,
        listener: &mut W,
    ) -> EventResult
    where
        L: HandleLayout + ?Sized,
        W: WheelListener + ?Sized,
    {
        if self.active == ActiveHandle::None {
            return EventResult::Ignored;
        }

        let angle = geometry::angle_degrees(layout.wheel_center(), p);
        match geometry::drag_step(self.last_angle, angle) {
            Some(diff) => {
                let delta = diff * model.max_range() / (360.0 * model.turns());
                log::trace!("{:?} step {diff:.2}° → {delta:.3}", self.active);
                match self.active {
                    ActiveHandle::None => {}
                    ActiveHandle::Left => {
                        model.set_minimum_silent(model.minimum() - delta);
                        listener.on_range_changed(model, Bound::Minimum);
                    }
                    ActiveHandle::Right if model.is_drive_visible() => {
                        model.set_drive_level(model.drive_level() + delta);
                        listener.on_drive_changed(model);
                    }
                    ActiveHandle::Right => {
                        model.set_maximum_silent(model.maximum() + delta);
                        listener.on_range_changed(model, Bound::Maximum);
                    }
                }
            }
            None => log::trace!("rejected jump {:.1}° → {angle:.1}°", self.last_angle),
        }

        self.last_angle = angle;
        model.request_redraw();
        EventResult::Consumed
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
