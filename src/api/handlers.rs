// Time endpoint handlers
// Each handler captures one clock snapshot and serializes a single field

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::types::{CurrentDate, CurrentDatetime};
use crate::clock;
use crate::handler::router::RequestContext;
use crate::http;

/// `GET /datetime/current`
pub fn current_datetime(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let body = CurrentDatetime {
        current_datetime_utc: clock::now_utc().rfc3339_micros(),
    };
    http::json_response(StatusCode::OK, &body, ctx.enable_cors, ctx.is_head)
}

/// `GET /date/current`
pub fn current_date(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let body = CurrentDate {
        current_date_utc: clock::now_utc().calendar_date(),
    };
    http::json_response(StatusCode::OK, &body, ctx.enable_cors, ctx.is_head)
}
