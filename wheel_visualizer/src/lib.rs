//! # wheel_visualizer
//!
//! A windowed host for one range calibration wheel.  The wheel is drawn with
//! a software frame buffer; mouse drags on the two handles go through the
//! gesture tracker exactly as touch input would.
//!
//! ## Pointer → Action mapping
//!
//! | Input | Handle | Action |
//! |---|---|---|
//! | Press + drag clockwise | Left | Lower the minimum |
//! | Press + drag anticlockwise | Left | Raise the minimum |
//! | Press + drag clockwise | Right | Raise the maximum (drive level in drive mode) |
//! | Press + drag anticlockwise | Right | Lower the maximum (drive level in drive mode) |
//! | Drag out of the window | Either | Cancel the drag |
//!
//! One full turn is worth `max_range / turns`.  A single jump of more than
//! 20° between frames is dropped.
//!
//! ### Keyboard shortcuts
//!
//! | Key | Action |
//! |---|---|
//! | `V` | Show / hide the drive marker |
//! | `Q` / `Escape` | Quit |

pub mod layout;
pub mod input;
pub mod visualizer;
pub mod app;
