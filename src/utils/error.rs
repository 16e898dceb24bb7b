use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AppError::HttpClientError(_) => ErrorCategory::Network,
            AppError::IoError(_) | AppError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::IoError(_) => {
                "檢查監聽位址與埠號是否已被佔用，或是否有足夠權限".to_string()
            }
            AppError::HttpClientError(_) => "檢查 TLS 與系統網路設定".to_string(),
            AppError::InvalidConfigValueError { field, .. }
            | AppError::ConfigValidationError { field, .. } => {
                format!("請修正 {} 的設定值", field)
            }
            AppError::ConfigError { .. } => "檢查設定檔路徑與格式".to_string(),
            AppError::ServerError { .. } => "查看日誌以取得更多細節".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("設定錯誤: {}", self),
            ErrorCategory::Network => format!("網路錯誤: {}", self),
            ErrorCategory::System => format!("系統錯誤: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single advice fetch. Every variant degrades to local advice;
/// [`AdviceError::kind`] keeps them apart in the logs.
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("{field} is not set")]
    MissingCredential { field: String },

    #[error("failed to build advice request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    #[error("advice request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("advice request timed out after {0:?}")]
    Timeout(Duration),

    #[error("advice api status {status}")]
    Status { status: u16 },

    #[error("advice response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no choices returned")]
    EmptyChoices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceErrorKind {
    Configuration,
    Transport,
    Protocol,
    EmptyResult,
}

impl AdviceError {
    pub fn kind(&self) -> AdviceErrorKind {
        match self {
            AdviceError::MissingCredential { .. } => AdviceErrorKind::Configuration,
            AdviceError::RequestBuild(_) | AdviceError::Transport(_) | AdviceError::Timeout(_) => {
                AdviceErrorKind::Transport
            }
            AdviceError::Status { .. } | AdviceError::Decode(_) => AdviceErrorKind::Protocol,
            AdviceError::EmptyChoices => AdviceErrorKind::EmptyResult,
        }
    }
}

impl std::fmt::Display for AdviceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AdviceErrorKind::Configuration => "configuration",
            AdviceErrorKind::Transport => "transport",
            AdviceErrorKind::Protocol => "protocol",
            AdviceErrorKind::EmptyResult => "empty_result",
        };
        f.write_str(name)
    }
}
