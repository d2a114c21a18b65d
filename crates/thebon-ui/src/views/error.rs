//! Error boundary page.

use maud::{Markup, html};
use thiserror::Error;

use super::{ACTION, PAGE};
use crate::cn;

/// A failed render, as handed to [`ErrorView`] by the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FailureInfo {
    message: String,
    digest: Option<String>,
}

impl FailureInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: None,
        }
    }

    /// Attach an opaque identifier for correlating the page with server logs.
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

/// Shows a failure message and a retry control.
///
/// `retry_href` is supplied by whoever caught the failure; following it must
/// re-run the render that failed. The view itself only links to it.
pub struct ErrorView<'a> {
    failure: &'a FailureInfo,
    retry_href: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(failure: &'a FailureInfo, retry_href: &'a str) -> Self {
        Self { failure, retry_href }
    }

    pub fn render(&self) -> Markup {
        html! {
            div class=(cn!(PAGE, "gap-4 text-center")) data-digest=[self.failure.digest()] {
                h2 class="font-display text-2xl font-bold text-text-primary" {
                    "문제가 발생했습니다"
                }
                p class="text-text-secondary" { (self.failure.message()) }
                a href=(self.retry_href) role="button" class=(ACTION) { "다시 시도" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shows_message_and_retry() {
        let failure = FailureInfo::new("boom");
        let html = ErrorView::new(&failure, "/reports?page=2").render().into_string();
        assert!(html.contains("문제가 발생했습니다"));
        assert!(html.contains("<p class=\"text-text-secondary\">boom</p>"));
        assert!(html.contains(r#"href="/reports?page=2""#));
        assert!(html.contains(r#"role="button""#));
        assert!(html.contains("다시 시도"));
        assert!(!html.contains("data-digest"));
    }

    #[test]
    fn test_message_is_escaped_not_interpreted() {
        let failure = FailureInfo::new("<script>alert(1)</script>");
        let html = ErrorView::new(&failure, "/").render().into_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_digest_is_attached() {
        let failure = FailureInfo::new("boom").with_digest("3f9a0c21d4");
        assert_eq!(failure.digest(), Some("3f9a0c21d4"));
        assert_eq!(failure.to_string(), "boom");

        let html = ErrorView::new(&failure, "/").render().into_string();
        assert!(html.contains(r#"data-digest="3f9a0c21d4""#));
    }
}
