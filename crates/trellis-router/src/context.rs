//! Per-request handler context.

use std::collections::HashMap;

use serde::Serialize;

use crate::request::{Method, PathParams, Request};
use crate::response::Response;

/// State handed to a route handler.
///
/// Wraps the incoming [`Request`], the path parameters bound by the router
/// and the [`Response`] the handler is building.
///
/// # Example
///
/// ```
/// use trellis_router::{Context, Request};
///
/// let mut ctx = Context::new(Request::get("/hello").query_param("name", "geek"));
/// let reply = format!(
///     "hello {}, you're at {}\n",
///     ctx.query("name").unwrap_or("stranger"),
///     ctx.path()
/// );
/// ctx.string(200, reply);
///
/// let res = ctx.into_response();
/// assert_eq!(res.body_string().as_deref(), Some("hello geek, you're at /hello\n"));
/// ```
#[derive(Debug)]
pub struct Context {
    request: Request,
    params: PathParams,
    form: Option<HashMap<String, String>>,
    response: Response,
}

impl Context {
    /// Creates a context for `request` with an empty 200 response.
    pub fn new(request: Request) -> Self {
        Self {
            request,
            params: PathParams::new(),
            form: None,
            response: Response::ok(),
        }
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.request.method
    }

    /// The request path as received.
    pub fn path(&self) -> &str {
        &self.request.path
    }

    /// The underlying request.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// All bound path parameters.
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// A bound path parameter, e.g. `lang` for a route `/p/:lang/doc`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    pub(crate) fn set_params(&mut self, params: PathParams) {
        self.params = params;
    }

    /// A query string value.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.request.get_query(key)
    }

    /// A value from an urlencoded request body, falling back to the query
    /// string.
    pub fn post_form(&mut self, key: &str) -> Option<&str> {
        let form = self.form.get_or_insert_with(|| self.request.form());
        form.get(key)
            .map(String::as_str)
            .or_else(|| self.request.get_query(key))
    }

    /// Sets the response status code.
    pub fn status(&mut self, code: u16) {
        self.response.status = code;
    }

    /// Sets a response header, replacing one whose name differs only in
    /// case.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.response.set_header(key, value);
    }

    /// Writes a plain text response.
    pub fn string(&mut self, code: u16, text: impl Into<String>) {
        let text: String = text.into();
        self.set_header("Content-Type", "text/plain");
        self.status(code);
        self.response.body = text.into_bytes();
    }

    /// Writes `value` as a JSON response.
    ///
    /// A value that fails to serialize produces a 500 carrying the
    /// serializer's message instead.
    pub fn json<T: Serialize + ?Sized>(&mut self, code: u16, value: &T) {
        match serde_json::to_vec(value) {
            Ok(body) => {
                self.set_header("Content-Type", "application/json");
                self.status(code);
                self.response.body = body;
            }
            Err(err) => {
                tracing::warn!(path = %self.request.path, "failed to encode JSON response: {err}");
                self.string(500, err.to_string());
            }
        }
    }

    /// Writes raw bytes.
    pub fn data(&mut self, code: u16, data: impl Into<Vec<u8>>) {
        self.status(code);
        self.response.body = data.into();
    }

    /// Writes an HTML response.
    pub fn html(&mut self, code: u16, html: impl Into<String>) {
        let html: String = html.into();
        self.set_header("Content-Type", "text/html");
        self.status(code);
        self.response.body = html.into_bytes();
    }

    pub(crate) fn not_found(&mut self) {
        self.response = Response::not_found(&self.request.path);
    }

    /// The response written so far.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Consumes the context, returning the response.
    pub fn into_response(self) -> Response {
        self.response
    }
}
