use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::ResponseHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsError;
use crate::util::split_header_list;

/// Core CORS policy engine that decorates responses using [`CorsOptions`].
///
/// Constructed once, then shared freely: the resolved policy is read-only and
/// every call to [`apply`](Cors::apply) recomputes its decision from the
/// request alone.
pub struct Cors {
    options: CorsOptions,
    vary_on_origin: bool,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let vary_on_origin = options.origin.varies_by_origin();
        Ok(Self {
            options,
            vary_on_origin,
        })
    }

    /// Apply the policy to one request/response pair, mutating `response` in
    /// place. Works for both preflight (`OPTIONS`) and actual requests; the
    /// caller keeps responsibility for status code and body.
    ///
    /// Resolver failures propagate as [`CorsError`]; nothing else errors.
    pub async fn apply<R>(
        &self,
        request: &RequestContext<'_>,
        response: &mut R,
    ) -> Result<(), CorsError>
    where
        R: ResponseHeaders + ?Sized,
    {
        let allow_origin = self
            .options
            .origin
            .resolve(request.origin)
            .await
            .map_err(CorsError::OriginResolver)?;
        if let Some(value) = allow_origin
            && !value.is_empty()
        {
            response.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, &value);
        }

        if self.vary_on_origin {
            // Overwrites, carrying the request's own Vary through when it has
            // one. Preserved compatibility quirk: a Vary value already on the
            // response is clobbered here, not merged.
            let vary = if request.vary.is_empty() {
                header::ORIGIN
            } else {
                request.vary
            };
            response.set(header::VARY, vary);
        }

        if self.options.credentials {
            response.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }

        if !self.options.expose_headers.is_empty() {
            response.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                &self.options.expose_headers.join(","),
            );
        }

        let allow_methods = self
            .options
            .allow_methods
            .resolve(request.origin)
            .await
            .map_err(CorsError::MethodResolver)?;
        if !allow_methods.is_empty() {
            response.set(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                &allow_methods.join(","),
            );
        }

        if request.method == method::OPTIONS {
            self.apply_preflight(request, response);
        }

        Ok(())
    }

    fn apply_preflight<R>(&self, request: &RequestContext<'_>, response: &mut R)
    where
        R: ResponseHeaders + ?Sized,
    {
        if let Some(max_age) = self.options.max_age {
            response.set(header::ACCESS_CONTROL_MAX_AGE, &max_age.to_string());
        }

        let allow_headers = if self.options.allow_headers.is_empty() {
            split_header_list(request.access_control_request_headers)
        } else {
            self.options.allow_headers.clone()
        };

        if !allow_headers.is_empty() {
            response.set(header::ACCESS_CONTROL_ALLOW_HEADERS, &allow_headers.join(","));
            // Additive on purpose: the origin vary set earlier must survive.
            response.append(header::VARY, header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
