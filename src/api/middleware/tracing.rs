//! Request logging for the clinic ratings API.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Trace layer type returned by [`layer`].
pub type ApiTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Builds the per-request tracing layer.
///
/// Every request gets an `INFO` span carrying method, URI and version.
/// Request start is logged at `DEBUG` so the default `info` filter prints
/// one line per request: the response, with status and latency in ms.
/// 5xx responses are additionally logged at `ERROR`.
///
/// ```text
/// INFO request{method=POST uri=/ratings version=HTTP/1.1}: finished processing request latency=4 ms status=201
/// ERROR request{method=GET uri=/clinicas version=HTTP/1.1}: response failed classification=Status code: 500 latency=2 ms
/// ```
pub fn layer() -> ApiTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
