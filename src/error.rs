use thiserror::Error;

/// Fatal failures of the windowing host. The clock cannot run headless.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("display host unavailable: {0}")]
    Unavailable(String),
}
