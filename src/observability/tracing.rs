//! Span helpers for handler-scoped work.
//!
//! A handler that wants a traced unit of work opens a span with its named
//! attributes and runs the fallible part through [`in_span`]. The span is
//! closed on every exit path because it is owned by the instrumented future;
//! failures are recorded onto the span as events and propagate unchanged.

use std::error::Error;
use std::future::Future;

use tracing::{Instrument, Span};

/// Run a fallible future inside `span`.
///
/// On `Err`, records the failure as an event in the span (message and error
/// type) and returns the error to the caller. Never suppresses.
pub async fn in_span<F, T, E>(span: Span, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Error,
{
    async move {
        match fut.await {
            Ok(value) => Ok(value),
            Err(error) => {
                record_exception(&error);
                Err(error)
            }
        }
    }
    .instrument(span)
    .await
}

/// Record an error as an exception event on the current span.
///
/// Used directly by call sites that handle the error locally instead of
/// propagating it (the outbound-call route).
pub fn record_exception<E: Error + ?Sized>(error: &E) {
    tracing::error!(
        exception.message = %error,
        exception.kind = std::any::type_name::<E>(),
        "exception recorded on span"
    );
}
