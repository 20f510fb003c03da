//! # trellis-router
//!
//! HTTP request routing over a segment trie.
//!
//! This crate provides:
//! - Path patterns with static segments, named parameters (`:name`) and
//!   catch-alls (`*name`)
//! - One trie per HTTP method
//! - A per-request [`Context`] for reading the request and writing the response
//! - An [`Engine`] owning the route table
//!
//! ## Quick Start
//!
//! ```
//! use trellis_router::{Engine, Request};
//!
//! let mut engine = Engine::new();
//! engine
//!     .get("/p/:lang/doc", |ctx| {
//!         let lang = ctx.param("lang").unwrap_or_default().to_string();
//!         ctx.string(200, format!("docs for {lang}"));
//!     })
//!     .get("/static/*filepath", |ctx| {
//!         let file = ctx.param("filepath").unwrap_or_default().to_string();
//!         ctx.string(200, file);
//!     });
//!
//! let res = engine.handle(Request::get("/p/go/doc"));
//! assert_eq!(res.body_string().as_deref(), Some("docs for go"));
//!
//! let res = engine.handle(Request::get("/static/css/app.css"));
//! assert_eq!(res.body_string().as_deref(), Some("css/app.css"));
//!
//! let res = engine.handle(Request::get("/p/go/other"));
//! assert_eq!(res.status, 404);
//! ```
//!
//! ## Matching
//!
//! Paths are split on `/` with empty segments dropped, so `/p//go/` and
//! `/p/go` are the same path. Siblings are tried in registration order and
//! the first one whose subtree matches wins; a static sibling has no
//! precedence over a wildcard registered before it. Register specific
//! patterns first when two could match the same request.
//!
//! While inserting, a segment with no literal twin at its position descends
//! into an existing wildcard sibling. Registering `/p/:lang` and then
//! `/p/book` therefore leaves a single node, now terminating `/p/book`.

mod context;
mod engine;
mod error;
mod path;
mod request;
mod response;
mod router;
mod trie;

pub use context::Context;
pub use engine::Engine;
pub use error::{Result, RouterError};
pub use path::{parse_pattern, SegmentKind};
pub use request::{Method, PathParams, Request, UnknownMethod};
pub use response::Response;
pub use router::{Handler, RouteMatch, Router};
pub use trie::Node;
