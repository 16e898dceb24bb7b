#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use secrecy::SecretString;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|e| AppError::InvalidConfigValueError {
                field: "server.bind".to_string(),
                value: self.bind.clone(),
                reason: format!("Invalid IP address: {}", e),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Settings for the outbound chat-completion call.
///
/// `api_key` stays optional: a missing key is reported per request as a
/// configuration failure and the survey falls back to local advice.
#[derive(Debug)]
pub struct AdviceSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<SecretString>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub client_timeout: Duration,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            client_timeout: DEFAULT_CLIENT_TIMEOUT,
        }
    }
}

impl AdviceSettings {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = resolve_secret(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The smaller of the per-request and client-level ceilings.
    pub fn effective_timeout(&self) -> Duration {
        self.request_timeout.min(self.client_timeout)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub advice: AdviceSettings,
}

impl AppConfig {
    /// 將 TOML 檔案中的設定覆蓋到目前的設定上
    pub fn apply_file(&mut self, file: TomlConfig) {
        if let Some(server) = file.server {
            if let Some(bind) = server.bind {
                self.server.bind = bind;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }

        if let Some(advice) = file.advice {
            if let Some(endpoint) = advice.endpoint {
                self.advice.endpoint = endpoint;
            }
            if let Some(model) = advice.model {
                self.advice.model = model;
            }
            if let Some(api_key) = advice.api_key {
                self.advice.api_key = resolve_secret(api_key);
            }
            if let Some(max_tokens) = advice.max_tokens {
                self.advice.max_tokens = max_tokens;
            }
            if let Some(temperature) = advice.temperature {
                self.advice.temperature = temperature;
            }
            if let Some(ms) = advice.request_timeout_ms {
                self.advice.request_timeout = Duration::from_millis(ms);
            }
            if let Some(ms) = advice.client_timeout_ms {
                self.advice.client_timeout = Duration::from_millis(ms);
            }
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;

        validate_url("advice.endpoint", &self.advice.endpoint)?;
        validate_non_empty_string("advice.model", &self.advice.model)?;
        validate_positive_number("advice.max_tokens", self.advice.max_tokens, 1)?;
        if !self.advice.temperature.is_finite() {
            return Err(AppError::InvalidConfigValueError {
                field: "advice.temperature".to_string(),
                value: self.advice.temperature.to_string(),
                reason: "Must be a finite number".to_string(),
            });
        }
        validate_range("advice.temperature", self.advice.temperature, 0.0, 2.0)?;
        validate_positive_number(
            "advice.request_timeout_ms",
            self.advice.request_timeout.as_millis(),
            1,
        )?;
        validate_positive_number(
            "advice.client_timeout_ms",
            self.advice.client_timeout.as_millis(),
            1,
        )?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

/// 空字串或未被替換的 `${VAR}` 視為未設定
fn resolve_secret(raw: String) -> Option<SecretString> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || (trimmed.starts_with("${") && trimmed.ends_with('}')) {
        return None;
    }
    Some(SecretString::from(trimmed.to_string()))
}
