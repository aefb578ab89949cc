//! Per-platform default style records.
//!
//! One fully-populated [`SliderStyle`] per platform family, kept as
//! immutable constants. Widget-local records leave fields unset and fall
//! back to the record selected for the running process, so the presets
//! are the floor every accessor bottoms out on (short of the hardcoded
//! literals).
//!
//! Selection is total: any OS identifier this crate has no preset for
//! lands on [`PlatformVariant::Base`]. On macOS the product version's
//! leading component splits the pre- and post-redesign looks at major 11.
//!
//! The probe behind [`detect_platform`] can be overridden, which is how
//! tests pin a platform and how embedding hosts with their own platform
//! story short-circuit detection:
//!
//! ```rust
//! use trackspan_style::{set_platform_probe, PlatformVariant};
//!
//! set_platform_probe(|| PlatformVariant::Linux);
//! assert_eq!(trackspan_style::detect_platform(), PlatformVariant::Linux);
//! # set_platform_probe(|| PlatformVariant::Base);
//! ```

use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::color::Rgba;
use crate::fill::Fill;
use crate::style::SliderStyle;

/// Platform family a preset record targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformVariant {
    /// Generic fallback; also what Windows resolves to.
    Base,
    /// macOS 10.x.
    MacCatalina,
    /// macOS 11 and later.
    MacBigSur,
    /// Linux desktops.
    Linux,
}

const BASE_DEFAULTS: SliderStyle = SliderStyle {
    fill_active: Some(Fill::Solid(Rgba::rgb(0x3B, 0x88, 0xFD))),
    fill_inactive: Some(Fill::Solid(Rgba::rgb(0x8F, 0x8F, 0x8F))),
    fill_disabled: Some(Fill::Solid(Rgba::rgb(0xBB, 0xBB, 0xBB))),
    outline_active: Some(Rgba::TRANSPARENT),
    outline_inactive: Some(Rgba::TRANSPARENT),
    outline_disabled: Some(Rgba::TRANSPARENT),
    horizontal_thickness: Some(4.0),
    vertical_thickness: Some(4.0),
    tick_offset: Some(0.0),
    tick_bar_alpha: Some(0.3),
    h_offset: Some(0.0),
    v_offset: Some(0.0),
    has_stylesheet: false,
};

const MAC_CATALINA_DEFAULTS: SliderStyle = SliderStyle {
    fill_disabled: Some(Fill::Solid(Rgba::rgb(0xD2, 0xD2, 0xD2))),
    horizontal_thickness: Some(3.0),
    vertical_thickness: Some(3.0),
    tick_offset: Some(4.0),
    ..BASE_DEFAULTS
};

const MAC_BIG_SUR_DEFAULTS: SliderStyle = SliderStyle {
    fill_active: Some(Fill::Solid(Rgba::rgb(0x0A, 0x81, 0xFE))),
    fill_inactive: Some(Fill::Solid(Rgba::rgb(0xD5, 0xD5, 0xD5))),
    fill_disabled: Some(Fill::Solid(Rgba::rgb(0xE6, 0xE6, 0xE6))),
    horizontal_thickness: Some(4.0),
    vertical_thickness: Some(4.0),
    tick_offset: Some(0.0),
    tick_bar_alpha: Some(0.2),
    h_offset: Some(-2.0),
    ..MAC_CATALINA_DEFAULTS
};

const LINUX_DEFAULTS: SliderStyle = SliderStyle {
    fill_active: Some(Fill::Solid(Rgba::rgb(0x44, 0xA0, 0xD9))),
    fill_inactive: Some(Fill::Solid(Rgba::rgb(0x44, 0xA0, 0xD9))),
    fill_disabled: Some(Fill::Solid(Rgba::rgb(0x44, 0xA0, 0xD9))),
    outline_active: Some(Rgba::rgb(0x28, 0x63, 0x84)),
    outline_inactive: Some(Rgba::rgb(0x28, 0x63, 0x84)),
    outline_disabled: Some(Rgba::rgb(0x28, 0x63, 0x84)),
    ..BASE_DEFAULTS
};

impl PlatformVariant {
    /// The fully-populated default record for this variant.
    pub fn defaults(self) -> &'static SliderStyle {
        match self {
            PlatformVariant::Base => &BASE_DEFAULTS,
            PlatformVariant::MacCatalina => &MAC_CATALINA_DEFAULTS,
            PlatformVariant::MacBigSur => &MAC_BIG_SUR_DEFAULTS,
            PlatformVariant::Linux => &LINUX_DEFAULTS,
        }
    }

    /// Maps an OS identifier (as spelled by `std::env::consts::OS`) and,
    /// for macOS, the dotted product version, to a variant.
    ///
    /// Total over all inputs. A macOS version whose leading component
    /// does not parse counts as modern (major 11+).
    pub fn from_os(os: &str, mac_version: Option<&str>) -> Self {
        match os {
            "macos" => match mac_version.and_then(leading_component) {
                Some(major) if major < 11 => PlatformVariant::MacCatalina,
                _ => PlatformVariant::MacBigSur,
            },
            "linux" => PlatformVariant::Linux,
            // "windows" and anything unrecognized
            _ => PlatformVariant::Base,
        }
    }
}

/// Leading integer component of a dotted version string.
fn leading_component(version: &str) -> Option<u32> {
    version.trim().split('.').next()?.parse().ok()
}

type PlatformProbe = fn() -> PlatformVariant;

static PLATFORM_PROBE: Lazy<Mutex<PlatformProbe>> = Lazy::new(|| Mutex::new(os_platform_probe));

/// Overrides the probe used to pick the platform default record.
///
/// Hosts call this once at startup if they already know their platform;
/// tests use it to pin a variant.
pub fn set_platform_probe(probe: PlatformProbe) {
    let mut guard = PLATFORM_PROBE.lock().unwrap();
    *guard = probe;
}

/// The platform variant the running process resolves to.
pub fn detect_platform() -> PlatformVariant {
    let probe = PLATFORM_PROBE.lock().unwrap();
    (*probe)()
}

/// The platform default record for the running process.
///
/// This is what the short-form accessors on [`SliderStyle`] fall back to.
pub fn system_defaults() -> &'static SliderStyle {
    detect_platform().defaults()
}

fn os_platform_probe() -> PlatformVariant {
    PlatformVariant::from_os(std::env::consts::OS, macos_product_version().as_deref())
}

/// Best-effort macOS product version, e.g. `"14.2.1"`.
#[cfg(target_os = "macos")]
fn macos_product_version() -> Option<String> {
    // The key is followed by <string>MAJOR.MINOR.PATCH</string>.
    let plist =
        std::fs::read_to_string("/System/Library/CoreServices/SystemVersion.plist").ok()?;
    let key = plist.find("<key>ProductVersion</key>")?;
    let rest = &plist[key..];
    let start = rest.find("<string>")? + "<string>".len();
    let len = rest[start..].find("</string>")?;
    Some(rest[start..start + len].trim().to_string())
}

#[cfg(not(target_os = "macos"))]
fn macos_product_version() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Variant selection
    // =========================================================================

    #[test]
    fn test_from_os_macos_version_split() {
        assert_eq!(
            PlatformVariant::from_os("macos", Some("10.15.7")),
            PlatformVariant::MacCatalina
        );
        assert_eq!(
            PlatformVariant::from_os("macos", Some("11.0")),
            PlatformVariant::MacBigSur
        );
        assert_eq!(
            PlatformVariant::from_os("macos", Some("14.2.1")),
            PlatformVariant::MacBigSur
        );
    }

    #[test]
    fn test_from_os_macos_unparseable_version_counts_as_modern() {
        assert_eq!(
            PlatformVariant::from_os("macos", Some("rolling")),
            PlatformVariant::MacBigSur
        );
        assert_eq!(
            PlatformVariant::from_os("macos", None),
            PlatformVariant::MacBigSur
        );
    }

    #[test]
    fn test_from_os_linux() {
        assert_eq!(
            PlatformVariant::from_os("linux", None),
            PlatformVariant::Linux
        );
    }

    #[test]
    fn test_from_os_total_over_unknowns() {
        for os in ["windows", "freebsd", "wasi", "", "beos"] {
            assert_eq!(PlatformVariant::from_os(os, None), PlatformVariant::Base);
        }
    }

    #[test]
    fn test_leading_component() {
        assert_eq!(leading_component("10.15.7"), Some(10));
        assert_eq!(leading_component("11"), Some(11));
        assert_eq!(leading_component(" 12.1 "), Some(12));
        assert_eq!(leading_component("x.y"), None);
        assert_eq!(leading_component(""), None);
    }

    // =========================================================================
    // Preset table
    // =========================================================================

    #[test]
    fn test_presets_fully_populated() {
        for variant in [
            PlatformVariant::Base,
            PlatformVariant::MacCatalina,
            PlatformVariant::MacBigSur,
            PlatformVariant::Linux,
        ] {
            let d = variant.defaults();
            assert!(d.fill_active.is_some(), "{:?}", variant);
            assert!(d.fill_inactive.is_some(), "{:?}", variant);
            assert!(d.fill_disabled.is_some(), "{:?}", variant);
            assert!(d.outline_active.is_some(), "{:?}", variant);
            assert!(d.outline_inactive.is_some(), "{:?}", variant);
            assert!(d.outline_disabled.is_some(), "{:?}", variant);
            assert!(d.horizontal_thickness.is_some(), "{:?}", variant);
            assert!(d.vertical_thickness.is_some(), "{:?}", variant);
            assert!(d.tick_offset.is_some(), "{:?}", variant);
            assert!(d.tick_bar_alpha.is_some(), "{:?}", variant);
            assert!(d.h_offset.is_some(), "{:?}", variant);
            assert!(d.v_offset.is_some(), "{:?}", variant);
            assert!(!d.has_stylesheet, "{:?}", variant);
        }
    }

    #[test]
    fn test_big_sur_inherits_catalina_then_overrides() {
        let big_sur = PlatformVariant::MacBigSur.defaults();
        assert_eq!(big_sur.h_offset, Some(-2.0));
        assert_eq!(big_sur.tick_bar_alpha, Some(0.2));
        // tick_offset reverts to 0 from Catalina's 4
        assert_eq!(big_sur.tick_offset, Some(0.0));
    }

    #[test]
    fn test_linux_outlines_set() {
        let linux = PlatformVariant::Linux.defaults();
        assert_eq!(linux.outline_active, Some(Rgba::rgb(0x28, 0x63, 0x84)));
        assert_ne!(linux.outline_active, Some(Rgba::TRANSPARENT));
    }
}
