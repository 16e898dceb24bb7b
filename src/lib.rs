pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{AdviceSettings, AppConfig, TomlConfig};
pub use crate::core::{
    advice::ChatAdviceClient, classifier::classify, survey::SurveyService, AdviceOutcome,
    AdviceProvider, Profile, SurveyInput,
};
pub use crate::utils::error::{AdviceError, AdviceErrorKind, AppError, Result};
