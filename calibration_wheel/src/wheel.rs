//! One calibration wheel control: model, drag state and listener together.

use crate::config::WheelConfig;
use crate::gesture::{EventResult, GestureTracker, HandleLayout, PointerEvent, WheelListener};
use crate::model::RangeModel;

/// The value a host embeds for each wheel it shows.
///
/// Configuration goes through [`model_mut`](Self::model_mut) (or
/// [`apply_config`](Self::apply_config)); pointer input goes through
/// [`on_pointer`](Self::on_pointer), which reports changes to the listener.
#[derive(Debug, Default)]
pub struct CalibrationWheel<L: WheelListener = ()> {
    model:    RangeModel,
    tracker:  GestureTracker,
    listener: L,
}

impl CalibrationWheel<()> {
    /// A wheel with default ranges and no listener.
    pub fn new() -> Self {
        CalibrationWheel::with_listener(RangeModel::default(), ())
    }
}

impl<L: WheelListener> CalibrationWheel<L> {
    pub fn with_listener(model: RangeModel, listener: L) -> Self {
        CalibrationWheel { model, tracker: GestureTracker::new(), listener }
    }

    pub fn model(&self)             -> &RangeModel     { &self.model }
    pub fn model_mut(&mut self)     -> &mut RangeModel { &mut self.model }
    pub fn tracker(&self)           -> &GestureTracker { &self.tracker }
    pub fn listener(&self)          -> &L              { &self.listener }
    pub fn listener_mut(&mut self)  -> &mut L          { &mut self.listener }

    /// Replace the listener, returning the previous one.
    pub fn set_listener(&mut self, listener: L) -> L {
        std::mem::replace(&mut self.listener, listener)
    }

    /// Re-apply every configuration value to the model.
    pub fn apply_config(&mut self, config: &WheelConfig) {
        config.apply_to(&mut self.model);
    }

    /// Feed one pointer event; `layout` must describe the wheel as it is
    /// currently drawn.
    pub fn on_pointer<G: HandleLayout + ?Sized>(&mut self, event: PointerEvent, layout: &G) -> EventResult {
        self.tracker.on_pointer(event, &mut self.model, layout, &mut self.listener)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
