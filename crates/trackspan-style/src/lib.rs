//! # Trackspan Style - range slider style resolution
//!
//! `trackspan-style` computes the visual parameters the trackspan
//! dual-handle range slider paints with: track fill (solid color or
//! gradient), outline, groove thickness, and pixel offsets. Values
//! resolve through three layers, per paint call:
//!
//! 1. the widget's own [`SliderStyle`] record, whose fields are set by
//!    stylesheet extraction and otherwise left unset,
//! 2. the platform default record ([`system_defaults`]), one
//!    fully-populated preset per platform family,
//! 3. hardcoded literals (fallback gray fill, no outline, zero offset),
//!    so every accessor is total.
//!
//! Painting, layout, and event handling belong to the widget crate; this
//! crate is pure computation over text and records, and a [`SliderStyle`]
//! is owned by exactly one widget.
//!
//! ## Quick Start
//!
//! ```rust
//! use trackspan_style::{
//!     update_from_stylesheet, ColorGroup, Fill, Orientation, PaintOptions, Rgba,
//!     SliderStyle, TickPosition,
//! };
//!
//! // Each widget starts with an all-unset record.
//! let mut style = SliderStyle::unset();
//!
//! // The host hands over its accumulated stylesheet text.
//! let qss = "RangeSlider::sub-page:horizontal { background-color: #ff0000; }\n\
//!            RangeSlider::groove:horizontal { height: 10; }";
//! let update = update_from_stylesheet(&mut style, "RangeSlider", qss);
//! assert!(update.fill_applied);
//!
//! // At paint time the widget asks for concrete draw values.
//! let opt = PaintOptions {
//!     color_group: ColorGroup::Active,
//!     orientation: Orientation::Horizontal,
//!     tick_position: TickPosition::NoTicks,
//! };
//! assert_eq!(style.fill(&opt), Fill::Solid(Rgba::rgb(255, 0, 0)));
//! assert_eq!(style.thickness(&opt), 10.0);
//! ```
//!
//! ## Stylesheet subset
//!
//! Only two selector families are recognized, each with a fixed grammar:
//! `*::sub-page` (optionally `:horizontal`/`:vertical`) for the track
//! fill, and `*::groove:horizontal`/`*::groove:vertical` for the track
//! thickness. Fill values may be plain colors or `qlineargradient(...)` /
//! `qradialgradient(...)` expressions; see [`parse_fill`]. This is not a
//! CSS engine and is not meant to grow into one: unmatched input is
//! simply "no override".
//!
//! ## Platform presets
//!
//! With no stylesheet in play, values come from one of four preset
//! records (generic, two macOS generations, Linux) selected by probing
//! the host OS once at startup. See [`PlatformVariant`] and
//! [`set_platform_probe`].

pub mod color;
pub mod fill;
pub mod platform;
pub mod style;
pub mod stylesheet;

pub use color::{ColorError, Rgba};
pub use fill::{parse_fill, Fill, LinearGradient, RadialGradient, FALLBACK_FILL};
pub use platform::{detect_platform, set_platform_probe, system_defaults, PlatformVariant};
pub use style::{ColorGroup, Orientation, Outline, PaintOptions, SliderStyle, TickPosition};
pub use stylesheet::{cascade, update_from_stylesheet, StylesheetUpdate};
