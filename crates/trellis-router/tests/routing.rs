//! End-to-end routing through `Engine::handle`.

mod common;
use common::*;

use trellis_router::{Method, Request};

#[test]
fn doc_and_static_scenario() {
    let engine = engine(&[
        (Method::Get, "/p/:lang/doc"),
        (Method::Get, "/static/*filepath"),
    ]);

    assert_eq!(body(&engine, Method::Get, "/p/go/doc"), "/p/:lang/doc lang=go");
    assert_eq!(
        body(&engine, Method::Get, "/static/css/app.css"),
        "/static/*filepath filepath=css/app.css"
    );

    let res = send(&engine, Method::Get, "/p/go/other");
    assert_eq!(res.status, 404);
    assert_eq!(
        res.body_string().as_deref(),
        Some("404 NOT FOUND: /p/go/other\n")
    );
}

#[test]
fn no_routes_is_not_found() {
    let engine = engine(&[]);
    let res = send(&engine, Method::Get, "/nomatch");
    assert_eq!(res.status, 404);
    assert_eq!(res.body_string().as_deref(), Some("404 NOT FOUND: /nomatch\n"));
}

#[test]
fn method_is_part_of_the_route() {
    let engine = engine(&[(Method::Get, "/hello")]);
    assert_eq!(send(&engine, Method::Get, "/hello").status, 200);
    assert_eq!(send(&engine, Method::Post, "/hello").status, 404);
}

#[test]
fn same_pattern_under_two_methods() {
    let mut engine = trellis_router::Engine::new();
    engine
        .get("/login", |ctx| ctx.string(200, "form"))
        .post("/login", |ctx| ctx.string(200, "submitted"));

    assert_eq!(body(&engine, Method::Get, "/login"), "form");
    assert_eq!(body(&engine, Method::Post, "/login"), "submitted");
}

#[test]
fn redundant_slashes_are_ignored() {
    let engine = engine(&[(Method::Get, "/p/go")]);
    assert_eq!(body(&engine, Method::Get, "/p//go/"), "/p/go ");
    assert_eq!(body(&engine, Method::Get, "p/go"), "/p/go ");
}

#[test]
fn root_route() {
    let engine = engine(&[(Method::Get, "/"), (Method::Get, "/hello")]);
    assert_eq!(body(&engine, Method::Get, "/"), "/ ");
    assert_eq!(body(&engine, Method::Get, ""), "/ ");
    assert_eq!(body(&engine, Method::Get, "/hello"), "/hello ");
}

#[test]
fn reregistration_keeps_last_handler() {
    let mut engine = trellis_router::Engine::new();
    engine
        .get("/hello", |ctx| ctx.string(200, "old"))
        .get("/hello", |ctx| ctx.string(200, "new"));
    assert_eq!(body(&engine, Method::Get, "/hello"), "new");
}

#[test]
fn registration_order_breaks_ties() {
    let static_first = engine(&[(Method::Get, "/u/me"), (Method::Get, "/u/:id/x")]);
    assert_eq!(body(&static_first, Method::Get, "/u/me"), "/u/me ");
    assert_eq!(body(&static_first, Method::Get, "/u/7/x"), "/u/:id/x id=7");
    assert_eq!(body(&static_first, Method::Get, "/u/me/x"), "/u/:id/x id=me");
}

#[test]
fn static_registered_after_wildcard_shares_its_node() {
    let engine = engine(&[(Method::Get, "/p/:lang"), (Method::Get, "/p/book")]);
    // The second registration terminates on the wildcard node.
    assert_eq!(body(&engine, Method::Get, "/p/book"), "/p/book ");
    assert_eq!(body(&engine, Method::Get, "/p/rust"), "/p/book ");
}

#[test]
fn catch_all_truncates_pattern() {
    let engine = engine(&[(Method::Get, "/assets/*file/ignored/*more")]);
    assert_eq!(
        body(&engine, Method::Get, "/assets/js/app.js"),
        "/assets/*file/ignored/*more file=js/app.js"
    );
}

#[test]
fn query_and_form_reach_the_handler() {
    let mut engine = trellis_router::Engine::new();
    engine
        .get("/hello", |ctx| {
            let reply = format!(
                "hello {}, you're at {}\n",
                ctx.query("name").unwrap_or_default(),
                ctx.path()
            );
            ctx.string(200, reply);
        })
        .post("/login", |ctx| {
            let username = ctx.post_form("username").unwrap_or_default().to_string();
            let password = ctx.post_form("password").unwrap_or_default().to_string();
            ctx.json(200, &serde_json::json!({ "username": username, "password": password }));
        });

    let res = engine.handle(Request::get("/hello").query_param("name", "geektutu"));
    assert_eq!(
        res.body_string().as_deref(),
        Some("hello geektutu, you're at /hello\n")
    );

    let res = engine.handle(
        Request::post("/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("username=geek&password=1234"),
    );
    let json: serde_json::Value = serde_json::from_slice(&res.body).unwrap();
    assert_eq!(json["username"], "geek");
    assert_eq!(json["password"], "1234");
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(engine(&[(Method::Get, "/hello/:name")]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || body(&engine, Method::Get, &format!("/hello/{i}")))
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), format!("/hello/:name name={i}"));
    }
}
