use crate::allow_methods::AllowMethods;
use crate::origin::Origin;
use crate::util::is_http_token;
use thiserror::Error;

/// Policy configuration handed to [`Cors::new`](crate::Cors::new).
///
/// The default origin policy is the wildcard, which allows every caller.
/// Deployments that care about which origins may reach them must set an
/// explicit `origin` policy rather than rely on the default.
#[derive(Clone)]
pub struct CorsOptions {
    pub origin: Origin,
    pub allow_methods: AllowMethods,
    /// Headers to allow on preflight. Empty mirrors the request's
    /// `Access-Control-Request-Headers` back instead.
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Preflight cache duration in seconds.
    pub max_age: Option<u64>,
    pub credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            allow_methods: AllowMethods::default(),
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            max_age: None,
            credentials: false,
        }
    }
}

/// Errors reported when a configuration is rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origin must not be empty")]
    EmptyOrigin,
    #[error("`{value}` is not a valid HTTP method token")]
    InvalidMethodToken { value: String },
    #[error("`{value}` in `{field}` is not a valid header name")]
    InvalidHeaderToken { field: &'static str, value: String },
}

impl CorsOptions {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match &self.origin {
            Origin::Exact(value) if value.is_empty() => return Err(ValidationError::EmptyOrigin),
            Origin::List(values) if values.iter().any(|value| value.is_empty()) => {
                return Err(ValidationError::EmptyOrigin);
            }
            _ => {}
        }

        if let AllowMethods::List(methods) = &self.allow_methods
            && let Some(invalid) = methods.iter().find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidMethodToken {
                value: invalid.clone(),
            });
        }

        Self::validate_header_tokens("allow_headers", &self.allow_headers)?;
        Self::validate_header_tokens("expose_headers", &self.expose_headers)?;

        Ok(())
    }

    fn validate_header_tokens(
        field: &'static str,
        values: &[String],
    ) -> Result<(), ValidationError> {
        match values.iter().find(|value| !is_http_token(value)) {
            Some(invalid) => Err(ValidationError::InvalidHeaderToken {
                field,
                value: invalid.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
