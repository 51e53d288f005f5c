use thiserror::Error;

/// Boxed error type produced by caller-supplied resolver callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can be produced during CORS evaluation.
///
/// Both variants wrap a failure from a caller-supplied resolver; the engine
/// never retries and never substitutes a fallback value.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("origin resolver failed: {0}")]
    OriginResolver(#[source] BoxError),
    #[error("method resolver failed: {0}")]
    MethodResolver(#[source] BoxError),
}
