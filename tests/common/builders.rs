use edge_cors::constants::method;
use edge_cors::{AllowMethods, Cors, CorsError, CorsOptions, HeaderMap, Origin, RequestContext};
use futures::executor::block_on;

#[derive(Default)]
pub struct CorsBuilder {
    origin: Option<Origin>,
    allow_methods: Option<AllowMethods>,
    allow_headers: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(AllowMethods::list(methods));
        self
    }

    pub fn method_resolver(mut self, methods: AllowMethods) -> Self {
        self.allow_methods = Some(methods);
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, credentials: bool) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::default();
        Cors::new(CorsOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            allow_methods: self.allow_methods.unwrap_or(defaults.allow_methods),
            allow_headers: self.allow_headers.unwrap_or(defaults.allow_headers),
            expose_headers: self.expose_headers.unwrap_or(defaults.expose_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.or(defaults.max_age),
        })
        .expect("valid CORS configuration")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

#[derive(Default)]
pub struct RequestBuilder {
    method: String,
    origin: String,
    vary: String,
    request_headers: String,
}

impl RequestBuilder {
    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn vary<S: Into<String>>(mut self, vary: S) -> Self {
        self.vary = vary.into();
        self
    }

    pub fn request_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.request_headers = headers.into();
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: &self.origin,
            vary: &self.vary,
            access_control_request_headers: &self.request_headers,
        }
    }

    pub fn try_apply(&self, cors: &Cors) -> Result<HeaderMap, CorsError> {
        let mut response = HeaderMap::new();
        block_on(cors.apply(&self.context(), &mut response))?;
        Ok(response)
    }

    pub fn apply(&self, cors: &Cors) -> HeaderMap {
        self.try_apply(cors).expect("apply should succeed")
    }

    pub fn apply_to(&self, cors: &Cors, response: &mut HeaderMap) {
        block_on(cors.apply(&self.context(), response)).expect("apply should succeed");
    }
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder {
        method: method::GET.to_owned(),
        ..RequestBuilder::default()
    }
}

pub fn request_with_method(method: &str) -> RequestBuilder {
    RequestBuilder {
        method: method.to_owned(),
        ..RequestBuilder::default()
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder {
        method: method::OPTIONS.to_owned(),
        ..RequestBuilder::default()
    }
}
