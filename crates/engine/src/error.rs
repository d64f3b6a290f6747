use std::io;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to spawn gravity thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("gravity thread panicked")]
    GravityThreadPanicked,
    #[error("no session is running")]
    NoSession,
}
