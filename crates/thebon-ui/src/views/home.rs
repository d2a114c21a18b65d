//! Landing page.

use maud::{Markup, html};

use super::{ACTION, PAGE};
use crate::cn;
use crate::site::SITE_NAME;

/// Static welcome content with a single "get started" link.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeView;

impl HomeView {
    /// Target of the "get started" link. Served elsewhere, not by this site.
    pub const DOCS_HREF: &'static str = "/docs";

    pub fn render(&self) -> Markup {
        html! {
            div class=(PAGE) {
                main class="flex flex-col items-center gap-6 text-center" {
                    h1 class="font-display text-5xl font-bold tracking-tight text-text-primary md:text-6xl" {
                        (SITE_NAME)
                    }
                    p class="max-w-md text-lg leading-relaxed text-text-secondary" {
                        "프로젝트가 성공적으로 초기화되었습니다."
                    }
                    div class="flex gap-4" {
                        a href=(Self::DOCS_HREF) class=(cn!(ACTION, "focus-visible:outline-primary")) {
                            "시작하기"
                        }
                    }
                }
            }
        }
    }
}
