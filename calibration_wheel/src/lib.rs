//! # calibration_wheel
//!
//! A ring-shaped range calibration control, minus the drawing.
//!
//! The wheel tracks five quantities:
//!
//! | Quantity | Meaning |
//! |---|---|
//! | `left_edge`, `right_edge` | outer interval the range may never leave |
//! | `minimum`, `maximum` | the calibrated range, at least `min_range` wide |
//! | `drive_level` | a marker inside `[minimum, maximum]` |
//!
//! Two handles sit on the ring.  Dragging the left handle around the ring
//! moves the minimum; dragging the right handle moves the maximum, or the
//! drive level while the drive marker is shown.  One full turn of the drag
//! is worth `max_range / turns` units.
//!
//! ## Quick start
//!
//! ```rust
//! use calibration_wheel::{CalibrationWheel, HandleSnapshot, Point, PointerEvent, RangeModel};
//!
//! let mut wheel = CalibrationWheel::with_listener(RangeModel::default(), Vec::new());
//!
//! // Handle positions come from whoever draws the wheel.
//! let layout = HandleSnapshot {
//!     center:    Point::new(200.0, 200.0),
//!     left:      Some(Point::new(100.0, 200.0)),
//!     right:     Some(Point::new(300.0, 200.0)),
//!     half_size: 12.0,
//! };
//!
//! wheel.on_pointer(PointerEvent::down(300.0, 200.0), &layout);
//! wheel.on_pointer(PointerEvent::moved(300.0, 190.0), &layout);
//! wheel.on_pointer(PointerEvent::up(300.0, 190.0), &layout);
//!
//! assert!(wheel.model().maximum() <= 1000.0);
//! assert_eq!(wheel.listener().len(), 2);
//! ```

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod model;
pub mod wheel;

pub use config::{ConfigError, WheelConfig};
pub use geometry::Point;
pub use gesture::{
    ActiveHandle, Bound, EventResult, GestureTracker, HandleLayout, HandleSnapshot,
    PointerAction, PointerEvent, WheelChange, WheelListener,
};
pub use model::RangeModel;
pub use wheel::CalibrationWheel;
