/// Domain-specific error types for the dashboard service.
/// The analytics core never errors: missing fields coerce to defaults
/// and empty inputs yield empty outputs. Failures exist only at the
/// config and ingest boundaries.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("config error: {0}")]
    Config(String),

    #[error("ingest error: {0}")]
    Ingest(String),
}

pub type DashResult<T> = Result<T, DashboardError>;
