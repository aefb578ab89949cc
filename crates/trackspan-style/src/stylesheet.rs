//! Stylesheet extraction for slider style records.
//!
//! Hosts restyle the slider through Qt-flavored stylesheet text. This is
//! deliberately not a CSS engine: two selector families are recognized,
//! with a fixed grammar each, and anything that does not match is treated
//! as "no override" rather than an error.
//!
//! | Selector | Declarations read | Record fields |
//! |----------|-------------------|---------------|
//! | `*::sub-page` (optional `:horizontal` / `:vertical`) | `background`, `background-color` | all three fills |
//! | `*::groove:horizontal` | `height` | horizontal thickness |
//! | `*::groove:vertical` | `width` | vertical thickness |
//!
//! Within a block, declarations are scanned line by line in reverse, so
//! the last one written wins; that is the cascade rule hosts expect
//! inside a single block. Only the active-state fill is parsed; the
//! extracted value feeds the inactive and disabled fields as well.
//!
//! ## The suppression rule
//!
//! Once a sub-page fill is extracted, this crate paints the track, and
//! the host toolkit must not paint the same selector again. The update
//! result carries a synthetic rule (`Widget::sub-page:horizontal
//! {background: none}`) for the owning widget to append to its live
//! stylesheet. Appending changes the stylesheet, which typically makes
//! the host signal a change and reparse: the rule is therefore only
//! emitted while absent from the input text, so a reparse of the mutated
//! text reaches a fixed point instead of appending forever.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fill::parse_fill;
use crate::style::{Orientation, SliderStyle};

/// Outcome of one stylesheet pass over a widget's style record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetUpdate {
    /// A track fill was extracted and applied.
    pub fill_applied: bool,
    /// At least one groove thickness was extracted and applied.
    pub thickness_applied: bool,
    /// Rule the owning widget must append to its live stylesheet, if any.
    ///
    /// Emitted at most once per rule text: reparsing text that already
    /// carries the rule yields `None` here.
    pub suppression: Option<String>,
}

static SUB_PAGE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"::sub-page:?([^{\s]*)\s*\{\s*([^}]+)\}").expect("sub-page pattern compiles")
});

static BACKGROUND_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"background(-color)?:\s*([^;]+)").expect("background pattern compiles")
});

static GROOVE_HORIZONTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"::groove:horizontal\s*\{\s*([^}]+)\}").expect("groove pattern compiles")
});

static GROOVE_VERTICAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"::groove:vertical\s*\{\s*([^}]+)\}").expect("groove pattern compiles")
});

static HEIGHT_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"height\s*:\s*(\d+)").expect("height pattern compiles"));

static WIDTH_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"width\s*:\s*(\d+)").expect("width pattern compiles"));

/// Assembles the stylesheet chain that applies to one widget.
///
/// `ancestors` walks inner to outer, the order a widget tree is climbed;
/// the application-global text lands first and the widget's own text
/// last. The collaborator owns this call because only it can walk the
/// containment hierarchy.
pub fn cascade<'a, I>(app: &str, ancestors: I, own: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut qss = own.to_string();
    for parent in ancestors {
        qss = format!("{parent}{qss}");
    }
    format!("{app}{qss}")
}

/// Populates `style` from accumulated stylesheet text.
///
/// Resets `has_stylesheet`, then raises it with each extracted value.
/// `class_name` is the widget's type name, used to address the
/// suppression rule. Absent or malformed blocks leave the corresponding
/// fields untouched; the routine never fails, for any input text.
pub fn update_from_stylesheet(
    style: &mut SliderStyle,
    class_name: &str,
    qss: &str,
) -> StylesheetUpdate {
    let mut update = StylesheetUpdate::default();
    style.has_stylesheet = false;

    if let Some(caps) = SUB_PAGE_BLOCK.captures(qss) {
        let orientation = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());
        for line in body.lines().rev() {
            let Some(decl) = BACKGROUND_DECL.captures(line) else {
                continue;
            };
            let value = decl.get(2).map_or("", |m| m.as_str());
            let fill = parse_fill(value.trim());
            style.fill_active = Some(fill);
            style.fill_inactive = Some(fill);
            style.fill_disabled = Some(fill);
            style.has_stylesheet = true;
            update.fill_applied = true;
            tracing::debug!(orientation, value, "applied stylesheet track fill");

            let rule = format!("\n{class_name}::sub-page:{orientation}{{background: none}}");
            if !qss.contains(rule.as_str()) {
                update.suppression = Some(rule);
            }
            break;
        }
    }

    let grooves: [(Orientation, &Lazy<Regex>, &Lazy<Regex>); 2] = [
        (Orientation::Horizontal, &GROOVE_HORIZONTAL, &HEIGHT_DECL),
        (Orientation::Vertical, &GROOVE_VERTICAL, &WIDTH_DECL),
    ];
    for (orientation, block, decl) in grooves {
        let Some(caps) = block.captures(qss) else {
            continue;
        };
        let body = caps.get(1).map_or("", |m| m.as_str());
        for line in body.lines().rev() {
            let Some(px) = decl.captures(line).and_then(|m| m[1].parse::<f32>().ok()) else {
                continue;
            };
            match orientation {
                Orientation::Horizontal => style.horizontal_thickness = Some(px),
                Orientation::Vertical => style.vertical_thickness = Some(px),
            }
            style.has_stylesheet = true;
            update.thickness_applied = true;
            tracing::debug!(orientation = ?orientation, px, "applied stylesheet track thickness");
            break;
        }
    }

    update
}
