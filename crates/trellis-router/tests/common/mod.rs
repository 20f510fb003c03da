#![allow(dead_code)]

use trellis_router::{Context, Engine, Method, Request, Response};

/// Handler that echoes the matched pattern and its parameters, sorted.
pub fn echo(pattern: &'static str) -> impl Fn(&mut Context) + Send + Sync + 'static {
    move |ctx: &mut Context| {
        let mut params: Vec<String> = ctx
            .params()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        params.sort();
        ctx.string(200, format!("{pattern} {}", params.join("&")));
    }
}

/// Builds an engine with an echo handler for each `(method, pattern)`.
pub fn engine(routes: &[(Method, &'static str)]) -> Engine {
    let mut engine = Engine::new();
    for &(method, pattern) in routes {
        engine.add_route(method, pattern, echo(pattern));
    }
    engine
}

pub fn send(engine: &Engine, method: Method, path: &str) -> Response {
    engine.handle(Request::new(method, path))
}

pub fn body(engine: &Engine, method: Method, path: &str) -> String {
    send(engine, method, path)
        .body_string()
        .unwrap_or_else(|| panic!("non UTF-8 body for {method} {path}"))
}
