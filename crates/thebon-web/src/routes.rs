use axum::{
    Json,
    http::{StatusCode, header},
};
use maud::Markup;
use serde_json::{Value, json};
use thebon_ui::{HomeView, NotFoundView, RootShell};

pub async fn home() -> Markup {
    RootShell::new().render(HomeView.render())
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Fallback for every path without a route.
pub async fn not_found() -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        RootShell::new().render(NotFoundView.render()),
    )
}

/// Method fallback for routed paths. Every route here is GET-only.
pub async fn method_not_allowed() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET,HEAD")])
}
