use crate::constants::{DEFAULT_TIMEOUT, ENDPOINTS, HTTP_PORT};
use crate::error::{CvmsError, Result};
use crate::logging::{LogCallback, LogEvent};
use crate::protocol::{Method, Target, build_request, encode_form, send_request};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::Level;

/// Client for one camera. Every operation opens its own connection.
pub struct CvmsCam {
    pub(crate) target: Target,
    pub(crate) timeout: Duration,

    // Last `rnd` query value handed out
    pub(crate) last_rnd: AtomicU64,

    pub(crate) log_callback: Option<LogCallback>,
}

impl CvmsCam {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            target: Target {
                host: host.into(),
                port: HTTP_PORT,
                username: username.into(),
                password: password.into(),
            },
            timeout: DEFAULT_TIMEOUT,
            last_rnd: AtomicU64::new(0),
            log_callback: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.target.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Routes failure reports to `callback` in addition to `tracing`.
    pub fn with_log_callback(mut self, callback: LogCallback) -> Self {
        self.log_callback = Some(callback);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Millisecond timestamp for the `rnd` cache buster, strictly increasing per client.
    pub fn next_cache_buster(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let previous = self
            .last_rnd
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }

    pub(crate) fn endpoint(name: &str) -> Result<&'static str> {
        ENDPOINTS
            .get(name)
            .copied()
            .ok_or_else(|| CvmsError::ProtocolError(format!("Unknown endpoint {}", name)))
    }

    /// GET `endpoint` with a fresh `rnd` parameter appended.
    pub(crate) async fn get_command(&self, endpoint: &str) -> Result<String> {
        let base = Self::endpoint(endpoint)?;
        let separator = if base.contains('?') { '&' } else { '?' };
        let path = format!("{}{}rnd={}", base, separator, self.next_cache_buster());

        tracing::debug!(host = %self.target.host, %path, "sending request");
        let request = build_request(&self.target, Method::Get, &path, None);
        send_request(&self.target, &request, self.timeout).await
    }

    pub(crate) async fn set_command(&self, endpoint: &str, fields: &[(&str, &str)]) -> Result<String> {
        let path = Self::endpoint(endpoint)?;
        let body = encode_form(fields);

        tracing::debug!(host = %self.target.host, %path, %body, "sending form");
        let request = build_request(&self.target, Method::Post, path, Some(&body));
        send_request(&self.target, &request, self.timeout).await
    }

    pub(crate) fn report_error(&self, operation: &'static str, error: &CvmsError) {
        tracing::error!(host = %self.target.host, operation, "{}", error);

        if let Some(callback) = &self.log_callback {
            callback(&LogEvent {
                level: Level::ERROR,
                host: self.target.host.clone(),
                operation,
                message: error.to_string(),
            });
        }
    }
}
