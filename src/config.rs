//! Application settings and the session audit log.
//!
//! Settings live in a JSON file under the platform data directory and carry
//! the defaults the dashboard starts with. The audit log keeps a capped
//! trail of session events (dataset loads, saved settings, query failures).

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<String>, details: impl Into<String>) {
        self.entries.push(AuditEntry {
            timestamp: Utc::now(),
            action: action.into(),
            details: details.into(),
        });

        // Keep only last 1000 entries
        if self.entries.len() > 1000 {
            self.entries.drain(0..self.entries.len() - 1000);
        }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppSettings {
    /// Row limit the dashboard starts with.
    pub default_limit: u32,
    /// Dataset file used on the previous run, if any.
    pub last_dataset: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            last_dataset: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub settings: AppSettings,
    pub audit_log: AuditLog,
}

impl AppConfig {
    pub fn log_event(&mut self, action: impl Into<String>, details: impl Into<String>) {
        self.audit_log.push(action, details);
    }
}

pub fn get_config_path() -> PathBuf {
    let base_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base_dir.join("collostruct").join("config.json")
}

pub fn load_app_config() -> AppConfig {
    let path = get_config_path();
    if path.exists()
        && let Ok(content) = std::fs::read_to_string(path)
        && let Ok(config) = serde_json::from_str::<AppConfig>(&content)
    {
        return config;
    }

    AppConfig::default()
}

pub fn save_app_config(config: &AppConfig) -> Result<()> {
    let path = get_config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let mut config = AppConfig::default();
        config.settings.default_limit = 25;
        config.settings.last_dataset = Some(PathBuf::from("data/cnstr_shiny_sense_pred.csv"));
        config.log_event("Dataset Loaded", "data/cnstr_shiny_sense_pred.csv");

        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.settings.default_limit, 25);
        assert_eq!(restored.settings.last_dataset, config.settings.last_dataset);
        assert_eq!(restored.audit_log.len(), 1);
    }

    #[test]
    fn test_audit_log_is_capped() {
        let mut log = AuditLog::new();
        for i in 0..1100 {
            log.push("Query", format!("run {i}"));
        }
        assert_eq!(log.len(), 1000);
        assert_eq!(log.entries().first().unwrap().details, "run 100");
    }
}
