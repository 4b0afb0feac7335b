use crate::camera::CvmsCam;
use crate::commands::Connection;
use crate::constants::{DEFAULT_SCAN_INTERVAL, DEFAULT_TIMEOUT, HTTP_PORT};
use crate::error::{CvmsError, Result};
use crate::hub::CvmsHub;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Connection settings for one camera, usually read from a JSON file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub host: String,
    pub username: String,
    pub password: String,

    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,
}

impl std::fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("port", &self.port)
            .field("timeout_secs", &self.timeout_secs)
            .field("scan_interval_secs", &self.scan_interval_secs)
            .finish_non_exhaustive()
    }
}

fn default_port() -> u16 {
    HTTP_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_scan_interval_secs() -> u64 {
    DEFAULT_SCAN_INTERVAL.as_secs()
}

impl DeviceConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            scan_interval_secs: default_scan_interval_secs(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(CvmsError::ConfigError("host must not be empty".to_string()));
        }
        if self.username.is_empty() {
            return Err(CvmsError::ConfigError("username must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(CvmsError::ConfigError("timeout_secs must be positive".to_string()));
        }
        if self.scan_interval_secs == 0 {
            return Err(CvmsError::ConfigError(
                "scan_interval_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    pub fn build_camera(&self) -> CvmsCam {
        CvmsCam::new(&self.host, &self.username, &self.password)
            .with_port(self.port)
            .with_timeout(self.timeout())
    }

    pub fn build_hub(&self) -> CvmsHub {
        CvmsHub::new(self.build_camera())
    }

    /// Builds a hub only if the camera answers with these credentials.
    pub async fn connect_checked(&self) -> Result<CvmsHub> {
        self.validate()?;
        let cam = self.build_camera();
        if !cam.test_connection().await {
            return Err(CvmsError::ConnectionError("cannot_connect".to_string()));
        }
        Ok(CvmsHub::new(cam))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_optional_fields() {
        let config = DeviceConfig::from_json_str(
            r#"{"host": "192.168.1.20", "username": "admin", "password": "pw"}"#,
        )
        .unwrap();
        assert_eq!(config, DeviceConfig::new("192.168.1.20", "admin", "pw"));
        assert_eq!(config.port, 80);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.scan_interval(), Duration::from_secs(30));
    }

    #[test]
    fn explicit_values() {
        let config = DeviceConfig::from_json_str(
            r#"{"host": "cam.local", "username": "u", "password": "",
                "port": 8080, "timeout_secs": 2, "scan_interval_secs": 10}"#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.scan_interval(), Duration::from_secs(10));

        let cam = config.build_camera();
        assert_eq!(cam.host(), "cam.local");
        assert_eq!(cam.port(), 8080);
        assert_eq!(cam.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn missing_host_is_rejected() {
        let result = DeviceConfig::from_json_str(r#"{"username": "admin", "password": "pw"}"#);
        assert!(matches!(result, Err(CvmsError::SerializationError(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for json in [
            r#"{"host": " ", "username": "admin", "password": "pw"}"#,
            r#"{"host": "h", "username": "", "password": "pw"}"#,
            r#"{"host": "h", "username": "admin", "password": "pw", "timeout_secs": 0}"#,
            r#"{"host": "h", "username": "admin", "password": "pw", "scan_interval_secs": 0}"#,
        ] {
            assert!(
                matches!(DeviceConfig::from_json_str(json), Err(CvmsError::ConfigError(_))),
                "{}",
                json
            );
        }
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"host": "10.1.1.1", "username": "admin", "password": "pw"}}"#
        )
        .unwrap();

        let config = DeviceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "10.1.1.1");
    }

    #[test]
    fn debug_hides_password() {
        let printed = format!("{:?}", DeviceConfig::new("10.1.1.1", "admin", "hunter2"));
        assert!(printed.contains("10.1.1.1"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            DeviceConfig::from_file("/nonexistent/cvms.json"),
            Err(CvmsError::IoError(_))
        ));
    }
}
