//! Configuration for the probe.
//!
//! All values are read from the environment exactly once at startup via
//! [`Config::from_env`] and handed down by reference; no component performs
//! ambient environment lookups of its own.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

/// Default broker host, matching the common compose-network alias.
pub const DEFAULT_BROKER: &str = "broker";
pub const DEFAULT_PORT: u16 = 1883;
pub const DEFAULT_TOPIC: &str = "rasp39/system";
pub const DEFAULT_CLIENT_ID: &str = "sysprobe";
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";
pub const DEFAULT_DISK_PATH: &str = "/";
pub const DEFAULT_THERMAL_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// MQTT connection settings.
#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub broker: String,
    pub port: u16,
    pub topic: String,
    /// Username for broker authentication; `None` disables auth.
    pub username: Option<String>,
    /// Password for broker authentication; `None` disables auth.
    pub password: Option<String>,
    pub client_id: String,
}

impl MqttConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("MQTT_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("MQTT_PORT must be a port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            broker: env::var("MQTT_BROKER").unwrap_or_else(|_| DEFAULT_BROKER.to_string()),
            port,
            topic: env::var("MQTT_TOPIC").unwrap_or_else(|_| DEFAULT_TOPIC.to_string()),
            username: optional_env("MQTT_USER"),
            password: optional_env("MQTT_PASSWORD"),
            client_id: env::var("MQTT_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string()),
        })
    }

    /// Username/password pair, present only when both are configured.
    /// An empty or missing value on either side means anonymous access.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

/// Main probe configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mqtt: MqttConfig,
    /// Reference time zone used to render the boot timestamp.
    pub timezone: Tz,
    /// Path whose containing filesystem is measured.
    pub disk_path: PathBuf,
    /// Sysfs path of the CPU thermal zone, millidegrees Celsius.
    pub thermal_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let tz_name =
            env::var("PROBE_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = tz_name
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("PROBE_TIMEZONE '{tz_name}' is not a known zone: {e}"))?;

        Ok(Self {
            mqtt: MqttConfig::from_env()?,
            timezone,
            disk_path: env::var("PROBE_DISK_PATH")
                .unwrap_or_else(|_| DEFAULT_DISK_PATH.to_string())
                .into(),
            thermal_path: env::var("PROBE_THERMAL_PATH")
                .unwrap_or_else(|_| DEFAULT_THERMAL_PATH.to_string())
                .into(),
        })
    }
}

/// Reads an environment variable, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
