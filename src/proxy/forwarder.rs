//! Per-request forwarding to the backend.
//!
//! # Responsibilities
//! - Open one outbound request to the backend per inbound request
//! - Relay method, path, headers, and body unmodified in both directions
//! - Hand transport failures to the classifier
//!
//! # Design Decisions
//! - Only the URI scheme and authority are rewritten; everything else
//!   passes through byte-for-byte
//! - Bodies stream; nothing is buffered, so there is no retry
//! - Once response headers are on the wire no classified response can be
//!   written; mid-stream failures are logged and, for the unrecognized
//!   case, escalate to process shutdown

use std::str::FromStr;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::uri::{Authority, Scheme};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use futures_util::TryStreamExt;
use hyper::body::Incoming;

use crate::lifecycle::Shutdown;
use crate::proxy::failure::{self, FailureClass};
use crate::proxy::server::AppState;

/// Main forwarding handler. Every inbound request lands here regardless of
/// method or path.
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (mut parts, body) = request.into_parts();
    let original_uri = parts.uri.clone();

    // Point the request at the backend; path, query, method, headers, and
    // body stay exactly as received.
    let mut uri_parts = parts.uri.into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    if let Ok(authority) = Authority::from_str(&state.target.to_string()) {
        uri_parts.authority = Some(authority);
    }
    parts.uri = Uri::from_parts(uri_parts).unwrap_or(original_uri);

    tracing::debug!(method = %parts.method, uri = %parts.uri, "Forwarding request");

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => relay_response(response, &state.shutdown),
        Err(err) => classified_response(&err, &state).await,
    }
}

/// Relay the backend response to the client unmodified. The body streams
/// through; transport errors surfacing mid-stream are still classified even
/// though no response can be written for them anymore.
fn relay_response(response: axum::http::Response<Incoming>, shutdown: &Shutdown) -> Response {
    let (parts, body) = response.into_parts();

    let shutdown = shutdown.clone();
    let relayed = Body::new(body).into_data_stream().inspect_err(move |err| {
        match FailureClass::from_error(err) {
            FailureClass::ConnectionReset => {
                tracing::info!(error = %err, "Connection reset while relaying response");
            }
            _ => {
                tracing::error!(error = %err, "Unclassified failure while relaying response");
                shutdown.trigger_fatal(err.to_string());
            }
        }
    });

    Response::from_parts(parts, Body::from_stream(relayed))
}

/// Produce the client-facing outcome for a request that never got a
/// backend response.
async fn classified_response(
    err: &hyper_util::client::legacy::Error,
    state: &AppState,
) -> Response {
    match FailureClass::from_error(err) {
        FailureClass::BackendUnreachable => {
            tracing::error!(backend = %state.target, error = %err, "Backend is unavailable");
            (StatusCode::BAD_GATEWAY, failure::BACKEND_UNAVAILABLE_BODY).into_response()
        }
        FailureClass::ConnectionReset => {
            tracing::info!(error = %err, "Connection reset");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                failure::CONNECTION_RESET_BODY,
            )
                .into_response()
        }
        FailureClass::Unclassified => {
            tracing::error!(error = %err, "Unclassified forwarding failure, shutting down");
            state.shutdown.trigger_fatal(err.to_string());
            // The connection is abandoned with nothing written; process
            // teardown closes the socket.
            std::future::pending::<Response>().await
        }
    }
}
