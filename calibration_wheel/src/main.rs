//! Interactive menu for poking at a calibration wheel from the terminal.
//! Every configuration value can be set, and drags are simulated as a
//! sequence of pointer events around a virtual ring.

use calibration_wheel::{
    Bound, CalibrationWheel, HandleSnapshot, Point, PointerEvent, RangeModel, WheelChange,
    WheelConfig,
};
use std::io::{self, Write};

const RING_RADIUS: f32 = 100.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            Range Calibration Wheel — Menu            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let mut wheel = CalibrationWheel::with_listener(RangeModel::default(), Vec::new());

    loop {
        print_state(wheel.model());
        print_menu();
        let choice = read_line("Choice (or q to quit): ");
        let choice = choice.trim();

        if choice.eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let model = wheel.model_mut();
        match choice {
            "1" => if let Some(v) = read_number("  max range: ")   { model.set_max_range(v) },
            "2" => if let Some(v) = read_number("  min range: ")   { model.set_min_range(v) },
            "3" => if let Some(v) = read_number("  turns: ")       { model.set_turns(v) },
            "4" => if let Some(v) = read_number("  left edge: ")   { model.set_left_edge(v) },
            "5" => if let Some(v) = read_number("  right edge: ")  { model.set_right_edge(v) },
            "6" => if let Some(v) = read_number("  minimum: ")     { model.set_minimum(v) },
            "7" => if let Some(v) = read_number("  maximum: ")     { model.set_maximum(v) },
            "8" => if let Some(v) = read_number("  drive level: ") { model.set_drive_level(v) },
            "9" => {
                let visible = !model.is_drive_visible();
                model.set_drive_visible(visible);
            }
            "l" | "L" => rotate(&mut wheel, 180.0),
            "r" | "R" => rotate(&mut wheel, 0.0),
            "c" | "C" => match WheelConfig::from_model(wheel.model()).to_toml_string() {
                Ok(text) => println!("\n{text}"),
                Err(e)   => eprintln!("  ⚠  {e}"),
            },
            _ => println!("  ⚠  Unknown choice.\n"),
        }

        let changes: Vec<WheelChange> = std::mem::take(wheel.listener_mut());
        if !changes.is_empty() {
            println!("  notifications: {}", describe(&changes));
        }
        println!();
    }
}

fn print_state(m: &RangeModel) {
    println!("  ┌─ wheel ─");
    println!("  │  outer      : [0, {:.2}]  min width {:.2}  turns {:.2}", m.max_range(), m.min_range(), m.turns());
    println!("  │  edges      : [{:.2}, {:.2}]", m.left_edge(), m.right_edge());
    println!("  │  range      : [{:.2}, {:.2}]", m.minimum(), m.maximum());
    println!("  │  drive      : {:.2} ({})", m.drive_level(), if m.is_drive_visible() { "visible" } else { "hidden" });
    println!("  └─");
}

fn print_menu() {
    println!("  1.max range  2.min range  3.turns  4.left edge  5.right edge");
    println!("  6.minimum    7.maximum    8.drive  9.toggle drive");
    println!("  l.drag left handle  r.drag right handle  c.show config");
}

/// Simulate a drag of the handle resting at `rest_deg`.
fn rotate(wheel: &mut CalibrationWheel<Vec<WheelChange>>, rest_deg: f64) {
    let Some(total) = read_number("  rotate by degrees (+ = clockwise): ") else { return };
    let steps: usize = read_line("  in how many steps? (default 10): ")
        .trim().parse().unwrap_or(10);
    let steps = steps.clamp(1, 10_000);

    let center = Point::new(0.0, 0.0);
    let layout = HandleSnapshot {
        center,
        left:      Some(center.on_circle(RING_RADIUS, 180f64.to_radians())),
        right:     Some(center.on_circle(RING_RADIUS, 0f64.to_radians())),
        half_size: 10.0,
    };

    let at = |deg: f64| center.on_circle(RING_RADIUS, deg.to_radians());
    let start = at(rest_deg);
    wheel.on_pointer(PointerEvent::down(start.x, start.y), &layout);

    let mut last = start;
    for i in 1..=steps {
        let p = at(rest_deg + total * i as f64 / steps as f64);
        wheel.on_pointer(PointerEvent::moved(p.x, p.y), &layout);
        last = p;
    }
    wheel.on_pointer(PointerEvent::up(last.x, last.y), &layout);

    if (total / steps as f64).abs() > 20.0 {
        println!("  ⚠  steps over 20° are treated as jumps and ignored.");
    }
}

fn describe(changes: &[WheelChange]) -> String {
    let (mut min, mut max, mut drive) = (0, 0, 0);
    for c in changes {
        match c {
            WheelChange::Range(Bound::Minimum) => min += 1,
            WheelChange::Range(Bound::Maximum) => max += 1,
            WheelChange::Drive                 => drive += 1,
        }
    }
    format!("minimum ×{min}  maximum ×{max}  drive ×{drive}")
}

fn read_number(prompt: &str) -> Option<f64> {
    match read_line(prompt).trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("  ⚠  Not a number.");
            None
        }
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
