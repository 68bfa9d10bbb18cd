use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Intervals (hours) offered for automatic scanning
pub const SCAN_INTERVALS: [u8; 5] = [1, 3, 6, 12, 24];

/// Step applied by a single threshold adjustment
pub const THRESHOLD_STEP: i16 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "Rajesh".to_string(),
            last_name: "Kumar".to_string(),
            email: "rajesh.kumar@gov.in".to_string(),
            phone: "+91 98765 43210".to_string(),
            department: "Consumer Affairs".to_string(),
        }
    }
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub web_push: bool,
    pub weekly_reports: bool,
    pub critical_only: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            web_push: true,
            weekly_reports: true,
            critical_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanSettings {
    pub auto_scan: bool,
    /// Hours between scans, one of `SCAN_INTERVALS`
    pub interval_hours: u8,
    pub deep_scan: bool,
    /// Minimum confidence (0-100) for a detection to be flagged
    pub confidence_threshold: u8,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            auto_scan: true,
            interval_hours: 6,
            deep_scan: false,
            confidence_threshold: 80,
        }
    }
}

impl ScanSettings {
    pub fn cycle_interval(&mut self) {
        self.interval_hours = match SCAN_INTERVALS.iter().position(|&h| h == self.interval_hours) {
            Some(i) => SCAN_INTERVALS[(i + 1) % SCAN_INTERVALS.len()],
            None => SCAN_INTERVALS[0],
        };
    }

    pub fn adjust_threshold(&mut self, delta: i16) {
        let value = (self.confidence_threshold as i16 + delta).clamp(0, 100);
        self.confidence_threshold = value as u8;
    }
}

/// Marketplace integration as shown on the settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformIntegration {
    pub name: String,
    pub enabled: bool,
    pub last_sync: String,
    pub status: String,
}

impl Default for PlatformIntegration {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: false,
            last_sync: "never".to_string(),
            status: "inactive".to_string(),
        }
    }
}

fn integration(name: &str, enabled: bool, last_sync: &str) -> PlatformIntegration {
    PlatformIntegration {
        name: name.to_string(),
        enabled,
        last_sync: last_sync.to_string(),
        status: if enabled { "active" } else { "inactive" }.to_string(),
    }
}

fn default_platforms() -> Vec<PlatformIntegration> {
    vec![
        integration("Amazon India", true, "2 hours ago"),
        integration("Flipkart", true, "1 hour ago"),
        integration("Myntra", false, "3 days ago"),
        integration("Nykaa", true, "30 minutes ago"),
        integration("Snapdeal", false, "1 week ago"),
    ]
}

/// One editable row on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    EmailAlerts,
    SmsAlerts,
    WebPush,
    WeeklyReports,
    CriticalOnly,
    AutoScan,
    ScanInterval,
    DeepScan,
    ConfidenceThreshold,
    Platform(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub profile: Profile,
    pub notifications: NotificationSettings,
    pub scanning: ScanSettings,
    pub platforms: Vec<PlatformIntegration>,
    /// Directory for generated reports; `None` means `<config dir>/reports`
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            notifications: NotificationSettings::default(),
            scanning: ScanSettings::default(),
            platforms: default_platforms(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> DashboardResult<PathBuf> {
        let home = env::var("HOME").map_err(|_| DashboardError::NoHomeDir)?;
        Ok(PathBuf::from(home).join(".compliance-tui"))
    }

    pub fn default_path() -> DashboardResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> DashboardResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        let mut config: Config =
            serde_json::from_str(&contents).map_err(|source| DashboardError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.scanning.adjust_threshold(0);
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it cannot be read
    pub fn load_or_default(path: &Path) -> Config {
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Config::default()
            }
        }
    }

    /// Save the config, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> DashboardResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| DashboardError::io(parent, e))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| DashboardError::io(path, e))?;
        Ok(())
    }

    pub fn export_dir(&self) -> DashboardResult<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("reports")),
        }
    }

    /// Rows of the settings form, in display order
    pub fn setting_items(&self) -> Vec<SettingItem> {
        let mut items = vec![
            SettingItem::EmailAlerts,
            SettingItem::SmsAlerts,
            SettingItem::WebPush,
            SettingItem::WeeklyReports,
            SettingItem::CriticalOnly,
            SettingItem::AutoScan,
            SettingItem::ScanInterval,
            SettingItem::DeepScan,
            SettingItem::ConfidenceThreshold,
        ];
        items.extend((0..self.platforms.len()).map(SettingItem::Platform));
        items
    }

    /// Flip a boolean setting or advance the scan interval
    pub fn toggle(&mut self, item: SettingItem) {
        let n = &mut self.notifications;
        match item {
            SettingItem::EmailAlerts => n.email = !n.email,
            SettingItem::SmsAlerts => n.sms = !n.sms,
            SettingItem::WebPush => n.web_push = !n.web_push,
            SettingItem::WeeklyReports => n.weekly_reports = !n.weekly_reports,
            SettingItem::CriticalOnly => n.critical_only = !n.critical_only,
            SettingItem::AutoScan => self.scanning.auto_scan = !self.scanning.auto_scan,
            SettingItem::ScanInterval => self.scanning.cycle_interval(),
            SettingItem::DeepScan => self.scanning.deep_scan = !self.scanning.deep_scan,
            SettingItem::ConfidenceThreshold => {}
            SettingItem::Platform(i) => {
                if let Some(p) = self.platforms.get_mut(i) {
                    p.enabled = !p.enabled;
                    p.status = if p.enabled { "active" } else { "inactive" }.to_string();
                }
            }
        }
    }

    pub fn label(&self, item: SettingItem) -> String {
        match item {
            SettingItem::EmailAlerts => "Email Alerts".to_string(),
            SettingItem::SmsAlerts => "SMS Alerts".to_string(),
            SettingItem::WebPush => "Web Push".to_string(),
            SettingItem::WeeklyReports => "Weekly Reports".to_string(),
            SettingItem::CriticalOnly => "Critical Only".to_string(),
            SettingItem::AutoScan => "Automatic Scanning".to_string(),
            SettingItem::ScanInterval => "Scan Interval".to_string(),
            SettingItem::DeepScan => "Deep Scan Mode".to_string(),
            SettingItem::ConfidenceThreshold => "Confidence Threshold".to_string(),
            SettingItem::Platform(i) => self
                .platforms
                .get(i)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
        }
    }

    pub fn value_label(&self, item: SettingItem) -> String {
        let on_off = |b: bool| if b { "[x]" } else { "[ ]" }.to_string();
        let n = &self.notifications;
        match item {
            SettingItem::EmailAlerts => on_off(n.email),
            SettingItem::SmsAlerts => on_off(n.sms),
            SettingItem::WebPush => on_off(n.web_push),
            SettingItem::WeeklyReports => on_off(n.weekly_reports),
            SettingItem::CriticalOnly => on_off(n.critical_only),
            SettingItem::AutoScan => on_off(self.scanning.auto_scan),
            SettingItem::ScanInterval => format!("{}h", self.scanning.interval_hours),
            SettingItem::DeepScan => on_off(self.scanning.deep_scan),
            SettingItem::ConfidenceThreshold => format!("{}%", self.scanning.confidence_threshold),
            SettingItem::Platform(i) => self
                .platforms
                .get(i)
                .map(|p| on_off(p.enabled))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.notifications.sms = true;
        config.scanning.interval_hours = 12;
        config.export_dir = Some(PathBuf::from("/tmp/reports"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"scanning": {"deepScan": true}, "unknown": 1}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.scanning.deep_scan);
        assert_eq!(loaded.scanning.interval_hours, 6);
        assert_eq!(loaded.profile.first_name, "Rajesh");
        assert_eq!(loaded.platforms.len(), 5);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_loaded_threshold_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"scanning": {"confidenceThreshold": 250}}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scanning.confidence_threshold, 100);
    }

    #[test]
    fn test_threshold_clamps() {
        let mut scanning = ScanSettings::default();
        for _ in 0..10 {
            scanning.adjust_threshold(THRESHOLD_STEP);
        }
        assert_eq!(scanning.confidence_threshold, 100);
        for _ in 0..30 {
            scanning.adjust_threshold(-THRESHOLD_STEP);
        }
        assert_eq!(scanning.confidence_threshold, 0);
    }

    #[test]
    fn test_interval_cycles_through_options() {
        let mut scanning = ScanSettings::default();
        let mut seen = vec![];
        for _ in 0..5 {
            scanning.cycle_interval();
            seen.push(scanning.interval_hours);
        }
        assert_eq!(seen, vec![12, 24, 1, 3, 6]);

        scanning.interval_hours = 7;
        scanning.cycle_interval();
        assert_eq!(scanning.interval_hours, 1);
    }

    #[test]
    fn test_toggle_platform_updates_status() {
        let mut config = Config::default();
        config.toggle(SettingItem::Platform(2));
        assert!(config.platforms[2].enabled);
        assert_eq!(config.platforms[2].status, "active");
        assert_eq!(config.value_label(SettingItem::Platform(2)), "[x]");
    }

    #[test]
    fn test_setting_items_include_every_platform() {
        let config = Config::default();
        let items = config.setting_items();
        assert_eq!(items.len(), 9 + config.platforms.len());
        assert_eq!(items.last(), Some(&SettingItem::Platform(4)));
    }
}
