use anyhow::Result;
use config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_COMPATIBILITY_TIP_BYTES, DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE, DEFAULT_UID_DOMAIN,
    DEFAULT_WARN_THRESHOLD_BYTES, QR_DEFAULT_SIZE,
};
use crate::types::ErrorCorrectionLevel;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub payload: PayloadConfig,
    pub qr: QrConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Payload size budget. Both numbers are advisory; neither blocks generation.
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadConfig {
    pub warn_threshold_bytes: usize,
    pub compatibility_tip_bytes: usize,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            warn_threshold_bytes: DEFAULT_WARN_THRESHOLD_BYTES,
            compatibility_tip_bytes: DEFAULT_COMPATIBILITY_TIP_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    pub default_size: u32,
    pub default_error_correction: ErrorCorrectionLevel,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            default_size: QR_DEFAULT_SIZE,
            default_error_correction: ErrorCorrectionLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub default_timezone: String,
    pub product_id: String,
    pub uid_domain: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "info")?
            .set_default(
                "payload.warn_threshold_bytes",
                u64::try_from(DEFAULT_WARN_THRESHOLD_BYTES)?,
            )?
            .set_default(
                "payload.compatibility_tip_bytes",
                u64::try_from(DEFAULT_COMPATIBILITY_TIP_BYTES)?,
            )?
            .set_default("qr.default_size", QR_DEFAULT_SIZE)?
            .set_default(
                "qr.default_error_correction",
                ErrorCorrectionLevel::default().as_str(),
            )?
            .set_default("calendar.default_timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.product_id", DEFAULT_PRODUCT_ID)?
            .set_default("calendar.uid_domain", DEFAULT_UID_DOMAIN)?)
    }

    /// ## Summary
    /// Settings built from defaults alone, ignoring the environment.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::defaults()?.build()?.try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// The `QRCARD_` environment source: `__` separates section from key, so
    /// `QRCARD_CALENDAR__DEFAULT_TIMEZONE` maps to `calendar.default_timezone`.
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix("QRCARD")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `QRCARD_` prefix and `__` between
    /// sections, e.g. `QRCARD_PAYLOAD__WARN_THRESHOLD_BYTES=3000`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(Self::environment())
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        warn_threshold_bytes = settings.payload.warn_threshold_bytes,
        compatibility_tip_bytes = settings.payload.compatibility_tip_bytes,
        "Payload budget configured"
    );
    Ok(settings)
}
