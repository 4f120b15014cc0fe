//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the time endpoints and descriptor routes.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api;
use crate::config::AppState;
use crate::descriptor::{self, DescriptorName};
use crate::http;
use crate::logger;

const INDEX_MESSAGE: &str = "Current UTC date & time tool server.\n\
Endpoints: GET /datetime/current, GET /date/current\n\
Discovery: /openapi.yaml, /openapi.json, /.well-known/ai-plugin.json\n";

/// Request context encapsulating what route handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub enable_cors: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    let enable_cors = state.config.http.enable_cors;

    // Non-GET methods are answered before routing. Request bodies and query
    // strings on GET routes are ignored, not validated.
    if let Some(resp) = check_http_method(method, enable_cors) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path,
        is_head,
        enable_cors,
        access_log,
    };

    Ok(route_request(&ctx, &state))
}

/// Check HTTP method and answer non-GET/HEAD methods directly
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response(enable_cors))
        }
    }
}

/// Route request based on path
pub fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let response = match ctx.path {
        "/datetime/current" => api::current_datetime(ctx),
        "/date/current" => api::current_date(ctx),
        "/.well-known/ai-plugin.json" => {
            serve_descriptor(ctx, state, DescriptorName::PluginManifest)
        }
        "/openapi.yaml" => serve_descriptor(ctx, state, DescriptorName::OpenApiYaml),
        "/openapi.json" => serve_openapi_json(ctx, state),
        "/logo.png" => serve_descriptor(ctx, state, DescriptorName::Logo),
        "/" => http::build_text_response(INDEX_MESSAGE, ctx.enable_cors, ctx.is_head),
        _ => http::build_404_response(&format!("no route for {}", ctx.path), ctx.enable_cors),
    };

    if ctx.access_log {
        let bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(response.status().as_u16(), bytes);
    }

    response
}

/// Serve a named descriptor document, 404 when absent
fn serve_descriptor(
    ctx: &RequestContext<'_>,
    state: &AppState,
    name: DescriptorName,
) -> Response<Full<Bytes>> {
    match state.store.get(name) {
        Some(doc) => http::build_bytes_response(
            doc.content.clone(),
            doc.content_type,
            ctx.enable_cors,
            ctx.is_head,
        ),
        None => http::build_404_response(
            &format!("{} has not been provided", name.file_name()),
            ctx.enable_cors,
        ),
    }
}

/// `GET /openapi.json`: the YAML document converted to JSON
///
/// Falls back to a schema generated from the declared routes when no YAML
/// document exists; a YAML document that fails to parse is a 500.
fn serve_openapi_json(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match state.store.get(DescriptorName::OpenApiYaml) {
        Some(doc) => match descriptor::yaml_to_json(&doc.content) {
            Ok(json) => http::build_bytes_response(
                Bytes::from(json),
                "application/json",
                ctx.enable_cors,
                ctx.is_head,
            ),
            Err(e) => {
                logger::log_error(&format!("openapi.yaml exists but failed to parse: {e}"));
                http::build_500_response(&format!("openapi.yaml failed to parse: {e}"), ctx.enable_cors)
            }
        },
        None => {
            let schema = descriptor::generated_schema(&state.base_url);
            http::json_response(StatusCode::OK, &schema, ctx.enable_cors, ctx.is_head)
        }
    }
}
