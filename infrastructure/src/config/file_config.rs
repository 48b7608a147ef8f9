//! Raw TOML configuration data types
//!
//! These structs mirror the config file exactly; every field is optional and
//! falls back to the resolved defaults in `folio-application`.

use folio_application::{CellMetrics, PageConfig, SplashTiming};
use folio_domain::{ContactInfo, LayoutTuning};
use serde::{Deserialize, Serialize};

/// Raw `[contact]` section — overrides the catalog's contact info
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    pub telegram: Option<String>,
    pub email: Option<String>,
}

impl FileContactConfig {
    /// Apply overrides on top of a base contact value
    pub fn apply(&self, base: &ContactInfo) -> ContactInfo {
        ContactInfo::new(
            self.telegram.clone().unwrap_or_else(|| base.telegram.clone()),
            self.email.clone().unwrap_or_else(|| base.email.clone()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.telegram.is_none() && self.email.is_none()
    }
}

/// Raw `[layout]` section — modal tuning constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayoutConfig {
    pub phone_breakpoint: Option<f32>,
    pub sheet_floor: Option<f32>,
    pub sheet_max_frac: Option<f32>,
    pub sheet_margin: Option<f32>,
    pub desktop_max_width: Option<f32>,
    pub desktop_margin: Option<f32>,
}

impl FileLayoutConfig {
    pub fn resolve(&self) -> LayoutTuning {
        let d = LayoutTuning::default();
        LayoutTuning {
            phone_breakpoint: self.phone_breakpoint.unwrap_or(d.phone_breakpoint),
            sheet_floor: self.sheet_floor.unwrap_or(d.sheet_floor),
            sheet_max_frac: self.sheet_max_frac.unwrap_or(d.sheet_max_frac),
            sheet_margin: self.sheet_margin.unwrap_or(d.sheet_margin),
            desktop_max_width: self.desktop_max_width.unwrap_or(d.desktop_max_width),
            desktop_margin: self.desktop_margin.unwrap_or(d.desktop_margin),
        }
    }
}

/// Raw `[splash]` section — preloader timings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSplashConfig {
    pub min_visible_ms: Option<u64>,
    pub max_wait_ms: Option<u64>,
    pub fade_ms: Option<u64>,
}

impl FileSplashConfig {
    pub fn resolve(&self) -> SplashTiming {
        let d = SplashTiming::default();
        SplashTiming {
            min_visible_ms: self.min_visible_ms.unwrap_or(d.min_visible_ms),
            max_wait_ms: self.max_wait_ms.unwrap_or(d.max_wait_ms),
            fade_ms: self.fade_ms.unwrap_or(d.fade_ms),
        }
    }
}

/// Raw `[cell]` section — cell-to-logical-unit conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCellConfig {
    pub width_px: Option<f32>,
    pub height_px: Option<f32>,
}

impl FileCellConfig {
    pub fn resolve(&self) -> CellMetrics {
        let d = CellMetrics::default();
        CellMetrics {
            width_px: self.width_px.unwrap_or(d.width_px),
            height_px: self.height_px.unwrap_or(d.height_px),
        }
    }
}

/// Complete raw config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to a TOML catalog file replacing the built-in data
    pub catalog_path: Option<String>,
    pub contact: FileContactConfig,
    pub layout: FileLayoutConfig,
    pub splash: FileSplashConfig,
    pub cell: FileCellConfig,
}

impl FileConfig {
    /// Resolve into the page configuration the app runs with
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            layout: self.layout.resolve(),
            splash: self.splash.resolve(),
            cell: self.cell.resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let config = FileConfig::default();
        let page = config.page_config();
        assert_eq!(page.layout, LayoutTuning::default());
        assert_eq!(page.splash, SplashTiming::default());
    }

    #[test]
    fn test_partial_layout_override() {
        let config: FileConfig = toml::from_str(
            r#"
[layout]
phone_breakpoint = 600.0
"#,
        )
        .unwrap();
        let layout = config.page_config().layout;
        assert!((layout.phone_breakpoint - 600.0).abs() < f32::EPSILON);
        // Untouched fields keep defaults
        assert!((layout.sheet_floor - 420.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_contact_override_applies_partially() {
        let base = ContactInfo::new("@base", "base@example.com");
        let over = FileContactConfig {
            telegram: Some("@other".into()),
            email: None,
        };
        let merged = over.apply(&base);
        assert_eq!(merged.telegram, "@other");
        assert_eq!(merged.email, "base@example.com");
    }
}
