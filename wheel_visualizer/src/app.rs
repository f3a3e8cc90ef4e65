//! Top-level application state.
//!
//! `AppState` owns one `CalibrationWheel`, the window-independent layout and
//! the pointer translator.  It processes mouse samples and key commands and
//! tells the run loop when a frame needs redrawing.

use calibration_wheel::{
    ActiveHandle, Bound, CalibrationWheel, EventResult, PointerEvent, RangeModel, WheelConfig,
    WheelListener,
};

use crate::input::{Command, MouseSample, PointerTranslator};
use crate::layout::WheelLayout;
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub wheel:  WheelConfig,
    pub width:  usize,
    pub height: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            wheel:  WheelConfig::default(),
            width:  480,
            height: 480,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// StatusLine — the listener
// ════════════════════════════════════════════════════════════════════════════

/// Keeps a one-line description of the latest change for the status bar.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    pub text:    String,
    pub changes: usize,
}

impl WheelListener for StatusLine {
    fn on_range_changed(&mut self, model: &RangeModel, bound: Bound) {
        self.changes += 1;
        self.text = match bound {
            Bound::Minimum => format!("minimum {:.1}", model.minimum()),
            Bound::Maximum => format!("maximum {:.1}", model.maximum()),
        };
        log::debug!("{}", self.text);
    }

    fn on_drive_changed(&mut self, model: &RangeModel) {
        self.changes += 1;
        self.text = format!("drive {:.1}", model.drive_level());
        log::debug!("{}", self.text);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    wheel:      CalibrationWheel<StatusLine>,
    layout:     WheelLayout,
    translator: PointerTranslator,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        let status = StatusLine { text: "ready".to_string(), changes: 0 };
        AppState {
            wheel:      CalibrationWheel::with_listener(cfg.wheel.build_model(), status),
            layout:     WheelLayout::for_view(cfg.width, cfg.height),
            translator: PointerTranslator::new(),
        }
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Feed this frame's mouse state.
    pub fn handle_mouse(&mut self, sample: MouseSample) -> Option<EventResult> {
        let event = self.translator.translate(sample)?;
        Some(self.handle_pointer(event))
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        self.wheel.on_pointer(event, &self.layout)
    }

    /// Returns false when the app should quit.
    pub fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => false,
            Command::ToggleDrive => {
                let model = self.wheel.model_mut();
                let visible = !model.is_drive_visible();
                model.set_drive_visible(visible);
                self.wheel.listener_mut().text =
                    if visible { "drive shown".to_string() } else { "drive hidden".to_string() };
                log::info!("drive marker {}", if visible { "shown" } else { "hidden" });
                true
            }
        }
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Whether the model changed since the last frame; clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        self.wheel.model_mut().take_redraw()
    }

    /// The handle being dragged and the angle (radians) to draw it at.
    pub fn dragged_handle(&self) -> Option<(ActiveHandle, f64)> {
        let tracker = self.wheel.tracker();
        match tracker.active_handle() {
            ActiveHandle::None => None,
            handle => Some((handle, tracker.last_angle_degrees().to_radians())),
        }
    }

    // ── accessors for the render loop ─────────────────────────────────────

    pub fn model(&self)   -> &RangeModel  { self.wheel.model() }
    pub fn layout(&self)  -> &WheelLayout { &self.layout }
    pub fn status(&self)  -> &str         { &self.wheel.listener().text }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Open the window and drive the input/render loop at ~60 fps.
///
/// The frame buffer is only redrawn when the model asked for it; idle frames
/// just pump window events.
pub fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let mut vis = Visualizer::new(cfg.width, cfg.height)?;
    let mut app = AppState::new(&cfg);

    while vis.is_open() {
        for cmd in vis.poll_commands() {
            if !app.handle_command(cmd) {
                return Ok(());
            }
        }

        app.handle_mouse(vis.mouse());

        if app.take_redraw() {
            vis.render(&app)?;
        } else {
            vis.idle();
        }
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
