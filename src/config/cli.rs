use crate::config::{AppConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mindset-survey")]
#[command(about = "AI mindset survey with LLM-generated advice")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "ADVICE_ENDPOINT")]
    pub advice_endpoint: Option<String>,

    #[arg(long, env = "ADVICE_MODEL")]
    pub advice_model: Option<String>,

    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 預設值 < TOML 檔案 < 命令列參數與環境變數
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration file: {}", path.display());
            config.apply_file(TomlConfig::from_file(path)?);
        }

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(endpoint) = &self.advice_endpoint {
            config.advice.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.advice_model {
            config.advice.model = model.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.advice = config.advice.with_api_key(api_key.clone());
        }

        Ok(config)
    }
}
