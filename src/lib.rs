//! A lightweight CORS policy engine for serverless and edge request handlers.
//!
//! [`Cors`] is built once from [`CorsOptions`] and then applied per request:
//! it reads a handful of request headers and writes the CORS response headers
//! through the [`ResponseHeaders`] seam. It never routes, never builds the
//! response, and keeps no state between calls.
//!
//! The default origin policy is the `*` wildcard, which admits every caller.
//! That default exists for zero-config demos; anything security-sensitive
//! should configure an explicit [`Origin`] policy.
//!
//! ```
//! use edge_cors::{Cors, CorsOptions, HeaderMap, Origin, RequestContext};
//!
//! # futures::executor::block_on(async {
//! let cors = Cors::new(CorsOptions {
//!     origin: Origin::exact("https://app.example"),
//!     credentials: true,
//!     ..CorsOptions::default()
//! })?;
//!
//! let request = RequestContext {
//!     method: "GET",
//!     origin: "https://app.example",
//!     vary: "",
//!     access_control_request_headers: "",
//! };
//! let mut response = HeaderMap::new();
//! cors.apply(&request, &mut response).await?;
//!
//! assert_eq!(
//!     response.get("Access-Control-Allow-Origin"),
//!     Some("https://app.example"),
//! );
//! assert_eq!(response.get("Vary"), Some("Origin"));
//! # Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
//! # }).unwrap();
//! ```

pub mod constants;

mod allow_methods;
mod context;
mod cors;
mod headers;
mod options;
mod origin;
mod result;
mod util;

pub use allow_methods::{AllowMethods, MethodsResolver};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::{HeaderMap, ResponseHeaders};
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginResolver};
pub use result::{BoxError, CorsError};
