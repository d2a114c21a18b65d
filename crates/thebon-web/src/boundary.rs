//! Error boundary.
//!
//! Handlers signal a failed render either by returning [`PageError`] or by
//! panicking. Both leave a [`FailureInfo`] in the response extensions;
//! [`error_boundary`] picks it up and swaps the body for the error page,
//! with a retry link back to the request that failed.

use std::any::Any;

use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thebon_ui::{ErrorView, FailureInfo, RootShell};
use tracing::error;
use uuid::Uuid;

/// Handler error that renders as the error page.
#[derive(Debug, Clone)]
pub struct PageError(FailureInfo);

impl PageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(FailureInfo::new(message))
    }

    pub fn failure(&self) -> &FailureInfo {
        &self.0
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Panic handler for `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown error".to_string()
    };

    PageError(FailureInfo::new(message).with_digest(new_digest())).into_response()
}

fn new_digest() -> String {
    let mut digest = Uuid::new_v4().simple().to_string();
    digest.truncate(10);
    digest
}

/// Where the retry control points: the original path and query.
fn retry_href(uri: &Uri) -> String {
    match uri.path_and_query() {
        // `//host` would leave the site
        Some(target) if !target.as_str().starts_with("//") => target.as_str().to_string(),
        _ => "/".to_string(),
    }
}

/// Middleware rendering [`ErrorView`] for any response carrying a failure.
pub async fn error_boundary(request: Request, next: Next) -> Response {
    let retry = retry_href(request.uri());
    let response = next.run(request).await;

    let Some(failure) = response.extensions().get::<FailureInfo>().cloned() else {
        return response;
    };

    error!(
        path = %retry,
        digest = failure.digest().unwrap_or("-"),
        "render failed: {}",
        failure.message()
    );

    let page = RootShell::new().render(ErrorView::new(&failure, &retry).render());
    let mut rendered = (response.status(), page).into_response();
    rendered.extensions_mut().insert(failure);
    rendered
}
