//! The application entry point owning a [`Router`].

use std::sync::Arc;

use crate::context::Context;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::router::{Handler, Router};

/// An application: a route table plus request dispatch.
///
/// Build it once, register every route, then share it (typically behind an
/// `Arc`) with whatever accepts connections.
#[derive(Default)]
pub struct Engine {
    router: Router,
}

impl Engine {
    /// Creates an engine with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for any method.
    pub fn add_route<F>(&mut self, method: Method, pattern: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        self.router.add_route(method, pattern, handler);
        self
    }

    /// Registers a GET handler.
    pub fn get<F>(&mut self, pattern: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::Get, pattern, handler)
    }

    /// Registers a POST handler.
    pub fn post<F>(&mut self, pattern: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::Post, pattern, handler)
    }

    /// Handles one request and returns the response its handler wrote.
    pub fn handle(&self, request: Request) -> Response {
        let mut ctx = Context::new(request);
        self.router.handle(&mut ctx);
        ctx.into_response()
    }
}
