use crate::errors::{AppError, AppResult};
use crate::filters::DashboardFilters;
use crate::learn_more::{ReferenceLinks, FALLBACK_REFERENCE_URL};
use crate::models::Size;
use crate::pages::PageId;
use crate::tooltip::position::{PlacementConfig, DEFAULT_GAP, DEFAULT_MARGIN};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub tooltip_margin: f64,
    pub tooltip_gap: f64,
    pub tooltip_width: f64,
    /// Height used before the webview has measured the tooltip.
    pub tooltip_fallback_height: f64,
    pub default_page: PageId,
    pub default_filters: DashboardFilters,
    pub learn_more_fallback_url: String,
    pub learn_more_overrides: BTreeMap<String, String>,
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tooltip_margin: DEFAULT_MARGIN,
            tooltip_gap: DEFAULT_GAP,
            tooltip_width: 380.0,
            tooltip_fallback_height: 450.0,
            default_page: PageId::Cockpit,
            default_filters: DashboardFilters::default(),
            learn_more_fallback_url: FALLBACK_REFERENCE_URL.to_string(),
            learn_more_overrides: BTreeMap::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            margin: self.tooltip_margin,
            gap: self.tooltip_gap,
        }
    }

    /// Measured height wins; zero or missing measurements fall back to the configured height.
    pub fn tooltip_size(&self, measured_height: Option<f64>) -> Size {
        let height = measured_height
            .filter(|height| *height > 0.0)
            .unwrap_or(self.tooltip_fallback_height);
        Size::new(self.tooltip_width, height)
    }

    pub fn reference_links(&self) -> AppResult<ReferenceLinks> {
        ReferenceLinks::new(
            self.learn_more_overrides.clone(),
            self.learn_more_fallback_url.clone(),
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.tooltip_margin < 0.0 || self.tooltip_gap < 0.0 {
            return Err(AppError::Invalid("tooltip margin and gap must not be negative".to_string()));
        }
        if self.tooltip_width <= 0.0 || self.tooltip_fallback_height <= 0.0 {
            return Err(AppError::Invalid("tooltip size must be positive".to_string()));
        }
        self.reference_links()?;
        Ok(())
    }
}

/// `settings.json` in the app data directory.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SettingsStore {
    pub fn new(app_data_dir: &Path) -> Self {
        Self {
            path: app_data_dir.join(SETTINGS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<AppSettings> {
        if !self.path.exists() {
            return Ok(AppSettings::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<AppSettings>(&raw) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                tracing::warn!(path = %self.path.to_string_lossy(), error = %error, "malformed settings file, using defaults");
                Ok(AppSettings::default())
            }
        }
    }

    pub fn update(&self, update: serde_json::Value) -> AppResult<AppSettings> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Internal("settings mutex poisoned".to_string()))?;

        let current = self.load()?;
        let mut merged = serde_json::to_value(current)?;
        merge_json(&mut merged, update);
        let settings: AppSettings = serde_json::from_value(merged)?;
        settings.validate()?;

        self.write(&settings)?;
        Ok(settings)
    }

    fn write(&self, settings: &AppSettings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating settings directory {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("writing settings file {}", self.path.display()))?;
        Ok(())
    }
}

fn merge_json(target: &mut serde_json::Value, update: serde_json::Value) {
    match (target, update) {
        (serde_json::Value::Object(target_map), serde_json::Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_json(target_map.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (target, update) => {
            *target = update;
        }
    }
}
