//! The per-widget style record and its paint-time accessors.
//!
//! Every slider owns one [`SliderStyle`]. A freshly constructed widget
//! holds [`SliderStyle::unset`] (all fields `None`) and inherits
//! everything from the platform default record. Stylesheet extraction
//! (see [`crate::stylesheet`]) fills fields in place; the widget never
//! copies or shares the record.
//!
//! The accessors are total. Each one walks instance field, then the
//! default record, then a hardcoded literal, so the painting collaborator
//! always receives a concrete value:
//!
//! | Accessor      | Base-case literal        |
//! |---------------|--------------------------|
//! | [`fill`]      | solid `#333333` gray     |
//! | [`outline`]   | [`Outline::None`]        |
//! | [`offset`]    | `0.0`                    |
//! | [`thickness`] | `4.0`                    |
//!
//! The short-form accessors consult [`system_defaults`]; each has a
//! `*_with` twin taking an explicit defaults record, which is what the
//! short forms call and what tests pin a platform with.
//!
//! [`fill`]: SliderStyle::fill
//! [`outline`]: SliderStyle::outline
//! [`offset`]: SliderStyle::offset
//! [`thickness`]: SliderStyle::thickness

use crate::color::Rgba;
use crate::fill::{Fill, FALLBACK_FILL};
use crate::platform::system_defaults;

/// Thickness used only if a defaults record is itself unset.
///
/// Unreachable through the shipped preset table, which populates every
/// field, but the accessor contract never surfaces "no value".
const DEFAULT_THICKNESS: f32 = 4.0;

/// The visual state of the widget element being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGroup {
    /// Enabled and focused.
    Active,
    /// Enabled but unfocused.
    Inactive,
    /// Disabled.
    Disabled,
}

/// Track orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Where tick marks render relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPosition {
    NoTicks,
    Above,
    Below,
    BothSides,
}

impl TickPosition {
    /// True when any ticks render.
    pub fn has_ticks(self) -> bool {
        !matches!(self, TickPosition::NoTicks)
    }

    /// True when ticks render above (or left of) the track.
    ///
    /// Both-sides counts as above: the above adjustment wins when ticks
    /// render on both sides.
    pub fn ticks_above(self) -> bool {
        matches!(self, TickPosition::Above | TickPosition::BothSides)
    }

    /// True when ticks render only below (or right of) the track.
    pub fn ticks_below(self) -> bool {
        matches!(self, TickPosition::Below)
    }
}

/// Ambient paint state the collaborator widget hands to every accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    pub color_group: ColorGroup,
    pub orientation: Orientation,
    pub tick_position: TickPosition,
}

impl Default for PaintOptions {
    fn default() -> Self {
        PaintOptions {
            color_group: ColorGroup::Active,
            orientation: Orientation::Horizontal,
            tick_position: TickPosition::NoTicks,
        }
    }
}

/// An outline value for the track edge.
///
/// `None` is the "draw no outline" sentinel, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    None,
    Solid(Rgba),
}

/// Style attributes for one range slider instance.
///
/// Unset fields defer to the platform default record at accessor time.
/// `has_stylesheet` flips to true once stylesheet extraction populates any
/// field; it disables the built-in axis and tick offset logic, since
/// stylesheet-driven layout is assumed to position the track itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    pub fill_active: Option<Fill>,
    pub fill_inactive: Option<Fill>,
    pub fill_disabled: Option<Fill>,
    pub outline_active: Option<Rgba>,
    pub outline_inactive: Option<Rgba>,
    pub outline_disabled: Option<Rgba>,
    pub horizontal_thickness: Option<f32>,
    pub vertical_thickness: Option<f32>,
    /// Pixels the track shifts to clear tick marks.
    pub tick_offset: Option<f32>,
    /// Opacity fraction applied to solid fills while ticks render.
    pub tick_bar_alpha: Option<f32>,
    pub h_offset: Option<f32>,
    pub v_offset: Option<f32>,
    pub has_stylesheet: bool,
}

impl SliderStyle {
    /// The all-unset record a widget starts with.
    pub const fn unset() -> Self {
        SliderStyle {
            fill_active: None,
            fill_inactive: None,
            fill_disabled: None,
            outline_active: None,
            outline_inactive: None,
            outline_disabled: None,
            horizontal_thickness: None,
            vertical_thickness: None,
            tick_offset: None,
            tick_bar_alpha: None,
            h_offset: None,
            v_offset: None,
            has_stylesheet: false,
        }
    }

    fn fill_field(&self, group: ColorGroup) -> Option<Fill> {
        match group {
            ColorGroup::Active => self.fill_active,
            ColorGroup::Inactive => self.fill_inactive,
            ColorGroup::Disabled => self.fill_disabled,
        }
    }

    fn outline_field(&self, group: ColorGroup) -> Option<Rgba> {
        match group {
            ColorGroup::Active => self.outline_active,
            ColorGroup::Inactive => self.outline_inactive,
            ColorGroup::Disabled => self.outline_disabled,
        }
    }

    fn tick_alpha(&self, defaults: &SliderStyle) -> f32 {
        self.tick_bar_alpha.or(defaults.tick_bar_alpha).unwrap_or(1.0)
    }

    /// The track fill for the current paint state.
    ///
    /// Falls back to the platform default record, then to solid dark gray.
    /// While ticks render, the tick-bar alpha is applied to solid fills;
    /// gradients are returned unmodified (gradient opacity is not modeled).
    pub fn fill(&self, opt: &PaintOptions) -> Fill {
        self.fill_with(opt, system_defaults())
    }

    /// [`fill`](Self::fill) against an explicit defaults record.
    pub fn fill_with(&self, opt: &PaintOptions, defaults: &SliderStyle) -> Fill {
        let fill = self
            .fill_field(opt.color_group)
            .or_else(|| defaults.fill_field(opt.color_group))
            .unwrap_or(FALLBACK_FILL);
        if opt.tick_position.has_ticks() {
            return fill.with_tick_alpha(self.tick_alpha(defaults));
        }
        fill
    }

    /// The track outline for the current paint state.
    ///
    /// Unset at both levels resolves to [`Outline::None`]. Tick-bar alpha
    /// applies exactly as in [`fill`](Self::fill).
    pub fn outline(&self, opt: &PaintOptions) -> Outline {
        self.outline_with(opt, system_defaults())
    }

    /// [`outline`](Self::outline) against an explicit defaults record.
    pub fn outline_with(&self, opt: &PaintOptions, defaults: &SliderStyle) -> Outline {
        let Some(color) = self
            .outline_field(opt.color_group)
            .or_else(|| defaults.outline_field(opt.color_group))
        else {
            return Outline::None;
        };
        if opt.tick_position.has_ticks() {
            return Outline::Solid(color.with_alpha_f(self.tick_alpha(defaults)));
        }
        Outline::Solid(color)
    }

    /// Pixel offset of the track along the cross axis.
    ///
    /// Always `0.0` once a stylesheet override is in effect: stylesheet
    /// layout owns positioning. Otherwise the per-orientation axis offset,
    /// shifted by the tick offset: added with ticks above, subtracted
    /// with ticks below, untouched without ticks.
    pub fn offset(&self, opt: &PaintOptions) -> f32 {
        self.offset_with(opt, system_defaults())
    }

    /// [`offset`](Self::offset) against an explicit defaults record.
    pub fn offset_with(&self, opt: &PaintOptions, defaults: &SliderStyle) -> f32 {
        if self.has_stylesheet {
            return 0.0;
        }
        let mut off = match opt.orientation {
            Orientation::Horizontal => self.h_offset.or(defaults.h_offset),
            Orientation::Vertical => self.v_offset.or(defaults.v_offset),
        }
        .unwrap_or(0.0);
        let tick = self.tick_offset.or(defaults.tick_offset).unwrap_or(0.0);
        if opt.tick_position.ticks_above() {
            off += tick;
        } else if opt.tick_position.ticks_below() {
            off -= tick;
        }
        off
    }

    /// Track thickness in pixels for the current orientation.
    pub fn thickness(&self, opt: &PaintOptions) -> f32 {
        self.thickness_with(opt, system_defaults())
    }

    /// [`thickness`](Self::thickness) against an explicit defaults record.
    pub fn thickness_with(&self, opt: &PaintOptions, defaults: &SliderStyle) -> f32 {
        match opt.orientation {
            Orientation::Horizontal => self
                .horizontal_thickness
                .or(defaults.horizontal_thickness),
            Orientation::Vertical => self.vertical_thickness.or(defaults.vertical_thickness),
        }
        .unwrap_or(DEFAULT_THICKNESS)
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        SliderStyle::unset()
    }
}
