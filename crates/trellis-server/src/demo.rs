//! Routes registered by the `trellis-server` binary.

use serde_json::json;
use trellis_router::{Context, Engine};

/// Builds the demo application.
pub fn demo_engine() -> Engine {
    let mut engine = Engine::new();
    engine
        .get("/", |ctx| ctx.html(200, "<h1>Hello Trellis</h1>"))
        .get("/hello", |ctx| {
            let reply = greeting(ctx, ctx.query("name"));
            ctx.string(200, reply);
        })
        .get("/hello/:name", |ctx| {
            let reply = greeting(ctx, ctx.param("name"));
            ctx.string(200, reply);
        })
        .get("/assets/*filepath", |ctx| {
            let body = json!({ "filepath": ctx.param("filepath") });
            ctx.json(200, &body);
        })
        .post("/login", |ctx| {
            let username = ctx.post_form("username").map(str::to_string);
            let password = ctx.post_form("password").map(str::to_string);
            ctx.json(200, &json!({ "username": username, "password": password }));
        });
    engine
}

fn greeting(ctx: &Context, name: Option<&str>) -> String {
    format!(
        "hello {}, you're at {}\n",
        name.unwrap_or_default(),
        ctx.path()
    )
}
