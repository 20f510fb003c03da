//! # trellis-server
//!
//! Serves a [`trellis_router::Engine`] over HTTP/1.1 with hyper.
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let mut engine = trellis_router::Engine::new();
//! engine.get("/", |ctx| ctx.string(200, "hello"));
//! trellis_server::serve(Arc::new(engine), "127.0.0.1:9999".parse()?).await?;
//! ```

mod demo;
mod error;
mod serve;

pub use demo::demo_engine;
pub use error::{Result, ServerError};
pub use serve::{serve, serve_listener};
