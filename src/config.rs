use crate::errors::{DashResult, DashboardError};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// Directory the chart frontend is served from
    pub static_dir: String,
    /// Upload body cap; the dashboard targets small client-side files
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> DashResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| DashboardError::Config(format!("SERVER_PORT: {e}")))?;

        let max_upload_bytes = env_var_or("MAX_UPLOAD_BYTES", "2097152")
            .parse::<usize>()
            .map_err(|e| DashboardError::Config(format!("MAX_UPLOAD_BYTES: {e}")))?;

        Ok(Self {
            server_port,
            static_dir: env_var_or("STATIC_DIR", "dashboard/dist"),
            max_upload_bytes,
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
