//! Fill values: solid colors and the two gradient shapes.
//!
//! Stylesheets express a track fill either as a plain color or through one
//! of two gradient functions, `qlineargradient(...)` and
//! `qradialgradient(...)`. Only those two shapes are recognized, and only
//! their endpoint stops are kept: interior `stop:` declarations between
//! `stop:0` and `stop:1` are skipped, so multi-stop gradients collapse to
//! two-stop ones.
//!
//! [`parse_fill`] is total. Anything that is neither a color nor one of
//! the gradient grammars degrades to [`FALLBACK_FILL`], a solid dark gray.
//!
//! # Example
//!
//! ```rust
//! use trackspan_style::{parse_fill, Fill, Rgba, FALLBACK_FILL};
//!
//! assert_eq!(parse_fill("#ff0000"), Fill::Solid(Rgba::rgb(255, 0, 0)));
//! assert_eq!(parse_fill("what even is this"), FALLBACK_FILL);
//!
//! let grad = parse_fill("qlineargradient(x1:0, y1:0, x2:1, y2:1, stop:0 #fff, stop:1 #000)");
//! assert!(matches!(grad, Fill::Linear(_)));
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::color::Rgba;

const FALLBACK_GRAY: Rgba = Rgba::rgb(0x33, 0x33, 0x33);

/// Solid dark gray, the terminal fallback for unparseable fill values.
pub const FALLBACK_FILL: Fill = Fill::Solid(FALLBACK_GRAY);

/// A linear gradient spanning (x1, y1)-(x2, y2) in track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Color at stop 0.
    pub start: Rgba,
    /// Color at stop 1.
    pub end: Rgba,
}

/// A radial gradient around (cx, cy) with a focal point at (fx, fy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fx: f32,
    pub fy: f32,
    /// Color at stop 0.
    pub start: Rgba,
    /// Color at stop 1.
    pub end: Rgba,
}

/// A drawable fill value for the slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Fill {
    /// Applies a tick-bar alpha fraction to solid fills.
    ///
    /// Gradients pass through unchanged; per-stop opacity is not modeled.
    pub fn with_tick_alpha(self, alpha: f32) -> Fill {
        match self {
            Fill::Solid(c) => Fill::Solid(c.with_alpha_f(alpha)),
            other => other,
        }
    }
}

static LINEAR_GRADIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        qlineargradient\(
            \s*x1:\s*(?P<x1>\d*\.?\d+),\s*
            y1:\s*(?P<y1>\d*\.?\d+),\s*
            x2:\s*(?P<x2>\d*\.?\d+),\s*
            y2:\s*(?P<y2>\d*\.?\d+),\s*
            stop:0\s*(?P<stop0>\S+),.*
            stop:1\s*(?P<stop1>\S+)
        \)",
    )
    .expect("linear gradient pattern compiles")
});

static RADIAL_GRADIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        qradialgradient\(
            \s*cx:\s*(?P<cx>\d*\.?\d+),\s*
            cy:\s*(?P<cy>\d*\.?\d+),\s*
            radius:\s*(?P<radius>\d*\.?\d+),\s*
            fx:\s*(?P<fx>\d*\.?\d+),\s*
            fy:\s*(?P<fy>\d*\.?\d+),\s*
            stop:0\s*(?P<stop0>\S+),.*
            stop:1\s*(?P<stop1>\S+)
        \)",
    )
    .expect("radial gradient pattern compiles")
});

/// Parses a stylesheet fill value.
///
/// Resolution order: direct color, linear gradient, radial gradient, then
/// [`FALLBACK_FILL`]. Never fails; unrecognized input degrades to the
/// fallback gray.
pub fn parse_fill(value: &str) -> Fill {
    let value = value.trim();

    if let Ok(color) = Rgba::parse(value) {
        return Fill::Solid(color);
    }

    if let Some(caps) = LINEAR_GRADIENT.captures(value) {
        return Fill::Linear(LinearGradient {
            x1: coord(&caps, "x1"),
            y1: coord(&caps, "y1"),
            x2: coord(&caps, "x2"),
            y2: coord(&caps, "y2"),
            start: stop_color(&caps, "stop0"),
            end: stop_color(&caps, "stop1"),
        });
    }

    if let Some(caps) = RADIAL_GRADIENT.captures(value) {
        return Fill::Radial(RadialGradient {
            cx: coord(&caps, "cx"),
            cy: coord(&caps, "cy"),
            radius: coord(&caps, "radius"),
            fx: coord(&caps, "fx"),
            fy: coord(&caps, "fy"),
            start: stop_color(&caps, "stop0"),
            end: stop_color(&caps, "stop1"),
        });
    }

    tracing::debug!(value, "unrecognized fill value, using fallback gray");
    FALLBACK_FILL
}

fn coord(caps: &Captures<'_>, name: &str) -> f32 {
    // The capture only admits `\d*\.?\d+`, which always parses.
    caps[name].parse().unwrap_or(0.0)
}

fn stop_color(caps: &Captures<'_>, name: &str) -> Rgba {
    Rgba::parse(&caps[name]).unwrap_or_else(|_| {
        tracing::debug!(stop = &caps[name], "unparseable gradient stop color");
        FALLBACK_GRAY
    })
}
