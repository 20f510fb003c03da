//! Route table: one segment trie per method plus the handler map.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::context::Context;
use crate::error::{Result, RouterError};
use crate::path::parse_pattern;
use crate::request::{Method, PathParams};
use crate::trie::Node;

/// A shared route handler.
pub type Handler = Arc<dyn Fn(&mut Context) + Send + Sync>;

/// The outcome of a successful [`Router::resolve`].
pub struct RouteMatch<'a> {
    /// The registered pattern that matched.
    pub pattern: &'a str,
    /// The handler bound to `pattern`.
    pub handler: &'a Handler,
    /// Parameters bound from the request path.
    pub params: PathParams,
}

/// Maps `(method, pattern)` registrations to handlers and resolves requests
/// against them.
///
/// Routes are registered up front through `&mut self`; resolving and
/// dispatching only need `&self`, so a built router can be shared across
/// threads.
#[derive(Default)]
pub struct Router {
    roots: HashMap<Method, Node>,
    handlers: HashMap<String, Handler>,
}

fn handler_key(method: Method, pattern: &str) -> String {
    format!("{method}-{pattern}")
}

impl Router {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `method` and `pattern`.
    ///
    /// Registering the same method and pattern again replaces the handler.
    pub fn add_route(&mut self, method: Method, pattern: &str, handler: Handler) {
        info!("Route {:>4} - {}", method, pattern);

        let parts = parse_pattern(pattern);
        self.roots
            .entry(method)
            .or_default()
            .insert(pattern, &parts, 0);
        self.handlers.insert(handler_key(method, pattern), handler);
    }

    /// Finds the route matching `method` and `path`, binding its parameters.
    pub fn resolve(&self, method: Method, path: &str) -> Result<RouteMatch<'_>> {
        let not_found = || RouterError::NotFound {
            method: method.to_string(),
            path: path.to_string(),
        };

        let root = self.roots.get(&method).ok_or_else(not_found)?;
        let search_parts = parse_pattern(path);
        let pattern = root
            .search(&search_parts, 0)
            .and_then(Node::pattern)
            .ok_or_else(not_found)?;
        let handler = self
            .handlers
            .get(&handler_key(method, pattern))
            .ok_or_else(not_found)?;

        Ok(RouteMatch {
            pattern,
            handler,
            params: bind_params(pattern, &search_parts),
        })
    }

    /// Dispatches the request held by `ctx`.
    ///
    /// On a match the bound parameters are stored in the context and the
    /// handler runs; otherwise a 404 naming the path is written.
    pub fn handle(&self, ctx: &mut Context) {
        match self.resolve(ctx.method(), ctx.path()) {
            Ok(RouteMatch {
                handler, params, ..
            }) => {
                ctx.set_params(params);
                handler(ctx);
            }
            Err(err) => {
                debug!("{err}");
                ctx.not_found();
            }
        }
    }
}

/// Walks the matched pattern and the request segments side by side,
/// binding `:name` to one segment and `*name` to the joined remainder.
fn bind_params(pattern: &str, search_parts: &[&str]) -> PathParams {
    let mut params = PathParams::new();

    for (idx, part) in parse_pattern(pattern).into_iter().enumerate() {
        if let Some(name) = part.strip_prefix(':') {
            if let Some(value) = search_parts.get(idx) {
                params.insert(name, *value);
            }
        } else if let Some(name) = part.strip_prefix('*') {
            if !name.is_empty() {
                params.insert(name, search_parts.get(idx..).unwrap_or_default().join("/"));
            }
            break;
        }
    }

    params
}
