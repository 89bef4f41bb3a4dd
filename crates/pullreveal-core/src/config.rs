use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::reveal::TriggerPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Which event name a coordinator reports when a region is fully revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    /// Paging semantics: `onLoad(direction)`
    #[default]
    Load,
    /// Refresh semantics: `onRefresh(direction)`
    Refresh,
}

/// Interpolation curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the target on the last tick
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    /// Slow start and end, fast middle
    #[default]
    AccelerateDecelerate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Duration in milliseconds for traversing a region's full extent
    #[serde(default = "default_base_duration")]
    pub base_duration_ms: u64,
    /// Minimum offset from rest that commits a reveal
    #[serde(default = "default_touch_slop")]
    pub touch_slop: i32,
    /// Easing curve for transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Event name reported to listeners
    #[serde(default)]
    pub kind: RevealKind,
    /// Settle the drag when the pointer is released
    #[serde(default)]
    pub release_trigger: bool,
    /// Settle the drag when the inner list reports it went idle
    #[serde(default = "default_true")]
    pub idle_trigger: bool,
    /// Reveal when a fling comes to rest against the list edge
    #[serde(default = "default_true")]
    pub fling_trigger: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: default_base_duration(),
            touch_slop: default_touch_slop(),
            easing: EasingType::default(),
            kind: RevealKind::default(),
            release_trigger: false,
            idle_trigger: default_true(),
            fling_trigger: default_true(),
        }
    }
}

impl RevealConfig {
    /// Time to traverse one full region extent
    pub fn base_duration(&self) -> Duration {
        Duration::from_millis(self.base_duration_ms)
    }

    /// Trigger paths for settling a drag
    ///
    /// A drag always has a way to settle: with both the release and the idle
    /// trigger switched off, the idle trigger is used.
    pub fn trigger_policy(&self) -> TriggerPolicy {
        let on_idle = self.idle_trigger || !self.release_trigger;
        if on_idle != self.idle_trigger {
            tracing::warn!("release_trigger and idle_trigger both off, settling on idle");
        }
        TriggerPolicy {
            on_release: self.release_trigger,
            on_idle,
            on_fling_settle: self.fling_trigger,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing animates
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition or fling is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows occupied by the top region when fully revealed
    #[serde(default = "default_region_extent")]
    pub top_extent: i32,
    /// Rows occupied by the bottom region when fully revealed
    #[serde(default = "default_region_extent")]
    pub bottom_extent: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            top_extent: default_region_extent(),
            bottom_extent: default_region_extent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// First id of the initial window
    #[serde(default = "default_initial_from")]
    pub initial_from: i64,
    /// Last id of the initial window
    #[serde(default = "default_initial_to")]
    pub initial_to: i64,
    /// Items added per load
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Oldest id that exists (unbounded when absent)
    #[serde(default)]
    pub min_id: Option<i64>,
    /// Newest id that exists (unbounded when absent)
    #[serde(default)]
    pub max_id: Option<i64>,
    /// Simulated latency for loading older items
    #[serde(default = "default_older_delay")]
    pub older_delay_ms: u64,
    /// Simulated latency for loading newer items
    #[serde(default = "default_newer_delay")]
    pub newer_delay_ms: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            initial_from: default_initial_from(),
            initial_to: default_initial_to(),
            page_size: default_page_size(),
            min_id: None,
            max_id: None,
            older_delay_ms: default_older_delay(),
            newer_delay_ms: default_newer_delay(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pullreveal")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_duration() -> u64 {
    300
}

fn default_touch_slop() -> i32 {
    8
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_region_extent() -> i32 {
    3
}

fn default_initial_from() -> i64 {
    100
}

fn default_initial_to() -> i64 {
    139
}

fn default_page_size() -> i64 {
    20
}

fn default_older_delay() -> u64 {
    300
}

fn default_newer_delay() -> u64 {
    5000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pullreveal/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pullreveal")
            .join("config.toml")
    }

    /// Get the log file path used by the interactive demo
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pullreveal.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
