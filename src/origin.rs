use crate::result::BoxError;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

/// Caller-supplied origin resolver. Receives the request's `Origin` header
/// value (empty string when absent) and yields the value to emit as
/// `Access-Control-Allow-Origin`, or `None` to emit nothing.
pub type OriginResolver =
    dyn Fn(&str) -> BoxFuture<'static, Result<Option<String>, BoxError>> + Send + Sync;

/// Origin policy: which `Access-Control-Allow-Origin` value a request earns.
#[derive(Clone, Default)]
pub enum Origin {
    /// Wildcard: every request gets `*`.
    #[default]
    Any,
    /// A single fixed origin, matched byte-for-byte.
    Exact(String),
    /// Membership set; a matching request origin is echoed back unchanged.
    List(HashSet<String>),
    /// Caller-supplied async resolver.
    Resolver(Arc<OriginResolver>),
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn resolver<F, Fut>(resolver: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<String>, BoxError>> + Send + 'static,
    {
        Self::Resolver(Arc::new(
            move |origin: &str| -> BoxFuture<'static, Result<Option<String>, BoxError>> {
                Box::pin(resolver(origin.to_owned()))
            },
        ))
    }

    /// Resolve the allow-origin value for a request origin. Built-in policies
    /// answer synchronously; `Resolver` suspends until the callback settles.
    pub async fn resolve(&self, request_origin: &str) -> Result<Option<String>, BoxError> {
        match self {
            Origin::Any => Ok(Some("*".to_owned())),
            Origin::Exact(value) => {
                if value == request_origin {
                    Ok(Some(value.clone()))
                } else {
                    Ok(None)
                }
            }
            Origin::List(allowed) => {
                if allowed.contains(request_origin) {
                    Ok(Some(request_origin.to_owned()))
                } else {
                    Ok(None)
                }
            }
            Origin::Resolver(resolver) => resolver(request_origin).await,
        }
    }

    /// Any non-wildcard policy makes the response content depend on the
    /// request origin, so caches must key on it.
    pub fn varies_by_origin(&self) -> bool {
        !matches!(self, Origin::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
