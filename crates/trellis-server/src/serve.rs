//! Accept loop and hyper <-> trellis conversion.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use trellis_router::{Engine, Method, Request, Response};

use crate::error::{Result, ServerError};

/// Binds `addr` and serves `engine` until an accept error occurs.
pub async fn serve(engine: Arc<Engine>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_listener(engine, listener).await
}

/// Serves `engine` on an already bound listener.
///
/// Every connection runs on its own task. Errors on a single connection are
/// logged and do not stop the loop.
pub async fn serve_listener(engine: Arc<Engine>, listener: TcpListener) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{addr}");
    }

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let engine = engine.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let engine = engine.clone();
                handle_request(req, engine)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%peer, "error serving connection: {err}");
            }
        });
    }
}

async fn handle_request(
    req: HyperRequest<Incoming>,
    engine: Arc<Engine>,
) -> std::result::Result<HyperResponse<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();
    debug!("--> {} {}", req.method(), path);

    let response = match req.method().as_str().parse::<Method>() {
        Ok(method) => engine.handle(into_request(method, req).await),
        // A method the router has no table for is answered like one with no
        // registered routes.
        Err(_) => Response::not_found(&path),
    };

    debug!("<-- {} {}", response.status, path);
    Ok(into_hyper_response(response))
}

async fn into_request(method: Method, req: HyperRequest<Incoming>) -> Request {
    let uri = req.uri();
    let mut request = Request::new(method, uri.path());

    if let Some(query) = uri.query() {
        request.query = Request::parse_query_string(query);
    }

    for (key, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            request.headers.insert(key.to_string(), v.to_string());
        }
    }

    request.body = match req.collect().await {
        Ok(body) => body.to_bytes().to_vec(),
        Err(err) => {
            warn!("failed to read request body: {err}");
            Vec::new()
        }
    };

    request
}

fn into_hyper_response(response: Response) -> HyperResponse<Full<Bytes>> {
    let mut out = HyperResponse::new(Full::new(Bytes::from(response.body)));
    *out.status_mut() =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    for (key, value) in &response.headers {
        match (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                out.headers_mut().insert(name, value);
            }
            _ => warn!("dropping invalid response header {key:?}"),
        }
    }

    out
}
