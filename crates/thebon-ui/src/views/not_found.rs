//! Fallback page for unresolved paths.

use maud::{Markup, html};

use super::{ACTION, PAGE};
use crate::cn;

#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundView;

impl NotFoundView {
    pub const HOME_HREF: &'static str = "/";

    pub fn render(&self) -> Markup {
        html! {
            div class=(cn!(PAGE, "gap-4 text-center")) {
                h2 class="font-display text-4xl font-bold text-text-primary" { "404" }
                p class="text-text-secondary" { "페이지를 찾을 수 없습니다." }
                a href=(Self::HOME_HREF) class=(ACTION) { "홈으로 돌아가기" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_not_found() {
        let html = NotFoundView.render().into_string();
        assert!(html.contains(">404</h2>"));
        assert!(html.contains("페이지를 찾을 수 없습니다."));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("홈으로 돌아가기"));
    }
}
