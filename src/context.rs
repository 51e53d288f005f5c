/// Borrowed view of the request data the engine reads.
///
/// Absent headers are represented as the empty string; callers extract the
/// values from whatever request type their runtime provides.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub vary: &'a str,
    pub access_control_request_headers: &'a str,
}
