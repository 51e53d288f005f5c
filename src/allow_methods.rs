use crate::constants::method;
use crate::result::BoxError;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// Caller-supplied method resolver. Receives the request's `Origin` header
/// value and yields the methods to emit as `Access-Control-Allow-Methods`.
pub type MethodsResolver =
    dyn Fn(&str) -> BoxFuture<'static, Result<Vec<String>, BoxError>> + Send + Sync;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone)]
pub enum AllowMethods {
    /// Fixed list, emitted in configured order. Empty emits nothing.
    List(Vec<String>),
    /// Caller-supplied async resolver.
    Resolver(Arc<MethodsResolver>),
}

impl AllowMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Never emit the header.
    pub fn none() -> Self {
        Self::List(Vec::new())
    }

    pub fn resolver<F, Fut>(resolver: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<String>, BoxError>> + Send + 'static,
    {
        Self::Resolver(Arc::new(
            move |origin: &str| -> BoxFuture<'static, Result<Vec<String>, BoxError>> {
                Box::pin(resolver(origin.to_owned()))
            },
        ))
    }

    pub async fn resolve(&self, request_origin: &str) -> Result<Vec<String>, BoxError> {
        match self {
            AllowMethods::List(values) => Ok(values.clone()),
            AllowMethods::Resolver(resolver) => resolver(request_origin).await,
        }
    }
}

impl Default for AllowMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::POST,
            method::DELETE,
            method::PATCH,
        ])
    }
}

#[cfg(test)]
#[path = "allow_methods_test.rs"]
mod allow_methods_test;
