//! Software-rendered wheel using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  min / max / drive readout               │
//! │               .-~~~~~-.                  │
//! │             /           \                │
//! │         [■]  [====|===]  [■]             │
//! │             \           /                │
//! │               '-_____-'                  │
//! │  status line                             │
//! │  key legend                              │
//! └──────────────────────────────────────────┘
//! ```

use anyhow::anyhow;
use minifb::{KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use calibration_wheel::{ActiveHandle, Point, RangeModel};

use crate::app::AppState;
use crate::input::{command_for_key, Command, MouseSample};
use crate::layout::{WheelLayout, LEFT_IDLE_RAD, RIGHT_IDLE_RAD};

// ════════════════════════════════════════════════════════════════════════════
// Colours
// ════════════════════════════════════════════════════════════════════════════

const BG_COLOR:      u32 = 0xFF1A1A2E;
const WHEEL_COLOR:   u32 = 0xFFC6D6EF;
const BORDER_COLOR:  u32 = 0xFF4585E8;
const HANDLE_COLOR:  u32 = 0xFF4585E8;
const GRIP_COLOR:    u32 = 0xFFFFFFFF;
const VALUE_COLOR:   u32 = 0xFFFEE618;
const DRIVE_COLOR:   u32 = 0xFFFF0000;
const TEXT_COLOR:    u32 = 0xFFEEEEEE;
const LEGEND_COLOR:  u32 = 0xFF888888;

const FONT_SCALE: usize = 2;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf:    Vec<u32>,
    width:  usize,
    height: usize,
}

impl Visualizer {
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        let mut window = Window::new(
            "Range Calibration Wheel",
            width, height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| anyhow!("failed to open {width}×{height} window: {e}"))?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; width * height],
            width,
            height,
        })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Keys pressed since the last frame, as commands.
    pub fn poll_commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(command_for_key)
            .collect()
    }

    pub fn mouse(&self) -> MouseSample {
        MouseSample {
            position: self.window
                .get_mouse_pos(MouseMode::Discard)
                .map(|(x, y)| Point::new(x, y)),
            down: self.window.get_mouse_down(MouseButton::Left),
        }
    }

    /// Pump window events without touching the frame buffer.
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Redraw the whole frame.
    pub fn render(&mut self, app: &AppState) -> anyhow::Result<()> {
        let model = app.model();
        let layout = *app.layout();

        self.buf.fill(BG_COLOR);

        self.draw_ring(&layout);

        // ── Handles ───────────────────────────────────────────────────────
        match app.dragged_handle() {
            None => {
                self.draw_handle(&layout, RIGHT_IDLE_RAD);
                if !model.is_drive_visible() {
                    self.draw_handle(&layout, LEFT_IDLE_RAD);
                }
            }
            Some((ActiveHandle::Left, _)) if model.is_drive_visible() => {}
            Some((_, rad)) => self.draw_handle(&layout, rad),
        }

        self.draw_value(&layout, model);

        // ── Text ──────────────────────────────────────────────────────────
        let readout = format!(
            "min {:.1}  max {:.1}  drive {:.1}",
            model.minimum(), model.maximum(), model.drive_level(),
        );
        self.draw_label(&readout, 10, 10, TEXT_COLOR);
        self.draw_label(app.status(), 10, self.height.saturating_sub(36), TEXT_COLOR);
        self.draw_label("drag handles  V=drive  Q=quit", 10, self.height.saturating_sub(18), LEGEND_COLOR);

        self.window
            .update_with_buffer(&self.buf, self.width, self.height)
            .map_err(|e| anyhow!("failed to present frame: {e}"))
    }

    // ── Ring ──────────────────────────────────────────────────────────────

    fn draw_ring(&mut self, l: &WheelLayout) {
        let outer = l.wheel_width / 2.0;
        let inner = outer - l.border;
        let reach = l.radius + outer + 1.0;

        for y in span(l.center.y - reach, l.center.y + reach, self.height) {
            for x in span(l.center.x - reach, l.center.x + reach, self.width) {
                let off = (Point::new(x as f32, y as f32).distance_to(l.center) - l.radius).abs();
                if off <= inner {
                    self.set_pixel(x, y, WHEEL_COLOR);
                } else if off <= outer {
                    self.set_pixel(x, y, BORDER_COLOR);
                }
            }
        }
    }

    // ── Handle ────────────────────────────────────────────────────────────

    /// A square handle rotated to `rad`, with three grip lines across it.
    fn draw_handle(&mut self, l: &WheelLayout, rad: f64) {
        let c = l.center.on_circle(l.radius - l.border, rad);
        let h = l.half_handle;
        let size = l.handle_size();
        let (sin, cos) = (rad.sin() as f32, rad.cos() as f32);

        // grip lines in handle-local coordinates
        let grip_x = h - size * 0.2;
        let grip_top = -h + size * 0.35;
        let grip_step = (h - size * 0.35 - grip_top) / 2.0;
        let grip_half = (l.border / 2.0).max(0.5);

        let reach = h * std::f32::consts::SQRT_2 + 1.0;
        for y in span(c.y - reach, c.y + reach, self.height) {
            for x in span(c.x - reach, c.x + reach, self.width) {
                let (dx, dy) = (x as f32 - c.x, y as f32 - c.y);
                let lx = dx * cos + dy * sin;
                let ly = -dx * sin + dy * cos;
                if lx.abs() > h || ly.abs() > h {
                    continue;
                }
                let on_grip = lx.abs() <= grip_x
                    && (0..3).any(|a| (ly - (grip_top + grip_step * a as f32)).abs() <= grip_half);
                self.set_pixel(x, y, if on_grip { GRIP_COLOR } else { HANDLE_COLOR });
            }
        }
    }

    // ── Value bar ─────────────────────────────────────────────────────────

    fn draw_value(&mut self, l: &WheelLayout, model: &RangeModel) {
        let bar = l.value_bar();
        let (lo, hi) = bar.fill(model);
        self.fill_rect(lo, bar.top, hi, bar.bottom, VALUE_COLOR);
        self.draw_border(bar.left, bar.top, bar.right, bar.bottom, BORDER_COLOR);

        if model.is_drive_visible() {
            let x = bar.drive_x(model, l.border);
            self.fill_rect(x - 1.0, bar.top - l.border, x + 1.0, bar.bottom + l.border, DRIVE_COLOR);
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
        for y in span(y0, y1, self.height) {
            for x in span(x0, x1, self.width) {
                self.buf[y * self.width + x] = color;
            }
        }
    }

    fn draw_border(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
        self.fill_rect(x0, y0, x1, y0 + 1.0, color);
        self.fill_rect(x0, y1 - 1.0, x1, y1, color);
        self.fill_rect(x0, y0, x0 + 1.0, y1, color);
        self.fill_rect(x1 - 1.0, y0, x1, y1, color);
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x] = color;
        }
    }

    /// Minimal bitmap font: 3×5 glyphs, scaled up by `FONT_SCALE`.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        for sy in 0..FONT_SCALE {
                            for sx in 0..FONT_SCALE {
                                self.set_pixel(
                                    cx + col * FONT_SCALE + sx,
                                    y + row * FONT_SCALE + sy,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
            cx += 4 * FONT_SCALE; // 3 wide + 1 gap
            if cx + 4 * FONT_SCALE > self.width { break; }
        }
    }
}

/// Pixel indices covering `[from, to)`, clipped to `[0, limit)`.
fn span(from: f32, to: f32, limit: usize) -> std::ops::Range<usize> {
    let clip = |v: f32| (v.round().max(0.0) as usize).min(limit);
    let (a, b) = (clip(from), clip(to));
    a..b.max(a)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_clips_to_the_buffer() {
        assert_eq!(span(-5.0, 3.0, 10), 0..3);
        assert_eq!(span(8.0, 20.0, 10), 8..10);
        assert_eq!(span(4.0, 2.0, 10), 4..4);
        assert_eq!(span(-9.0, -1.0, 10), 0..0);
    }

    #[test]
    fn glyphs_fit_three_columns() {
        for c in "0123456789abcdefghijklmnopqrstuvwxyz-.= ?".chars() {
            assert!(char_glyph(c).iter().all(|row| *row <= 0b111), "{c}");
        }
    }

    #[test]
    fn unknown_glyph_falls_back_to_dot() {
        assert_eq!(char_glyph('%'), [0, 0, 0b010, 0, 0]);
    }
}
