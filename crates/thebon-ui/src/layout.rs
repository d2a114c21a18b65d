//! Root document layout.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::cn;
use crate::fonts::{BODY_FONT, Font, HEADING_FONT};
use crate::site::{Metadata, SITE_LANG};
use crate::theme::{TAILWIND_BROWSER, TAILWIND_THEME};

/// Document shell every page renders inside.
///
/// Owns the page-wide presentation settings: the heading and body fonts,
/// the document language and the head metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootShell {
    heading: Font,
    body: Font,
    lang: &'static str,
    metadata: Metadata,
}

impl Default for RootShell {
    fn default() -> Self {
        Self::new()
    }
}

impl RootShell {
    pub const fn new() -> Self {
        Self {
            heading: HEADING_FONT,
            body: BODY_FONT,
            lang: SITE_LANG,
            metadata: Metadata::site(),
        }
    }

    pub fn heading_font(&self) -> &Font {
        &self.heading
    }

    pub fn body_font(&self) -> &Font {
        &self.body
    }

    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Classes on `<body>`: both font variables plus antialiasing.
    pub fn body_class(&self) -> String {
        cn!(self.heading.variable(), self.body.variable(), "antialiased")
    }

    /// Render a full HTML document around `content`.
    pub fn render(&self, content: Markup) -> Markup {
        let fonts = [&self.heading, &self.body];
        let declarations = fonts
            .iter()
            .map(|font| font.declaration())
            .collect::<Vec<_>>()
            .join("\n");

        html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.metadata.title) }
                    meta name="description" content=(self.metadata.description);
                    link rel="preconnect" href="https://fonts.googleapis.com";
                    link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                    @for font in fonts {
                        link rel="stylesheet" href=(font.stylesheet_href());
                    }
                    style { (PreEscaped(declarations)) }
                    script src=(TAILWIND_BROWSER) {}
                    style type="text/tailwindcss" { (PreEscaped(TAILWIND_THEME)) }
                }
                body class=(self.body_class()) {
                    (content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{SITE_DESCRIPTION, SITE_NAME};

    fn render_probe() -> String {
        RootShell::new()
            .render(html! { p id="probe" { "content" } })
            .into_string()
    }

    #[test]
    fn test_metadata_matches_site_constants() {
        let html = render_probe();
        assert!(html.contains(&format!("<title>{}</title>", SITE_NAME)));
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            SITE_DESCRIPTION
        )));
        assert_eq!(RootShell::new().metadata(), &Metadata::site());
        assert_eq!(SITE_NAME, "TheBon");
    }

    #[test]
    fn test_document_language_and_body_classes() {
        let html = render_probe();
        assert_eq!(RootShell::new().lang(), "ko");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ko">"#));
        assert!(html.contains(
            r#"<body class="font-heading-variable font-body-variable antialiased">"#
        ));
    }

    #[test]
    fn test_content_rendered_exactly_once() {
        let html = render_probe();
        assert_eq!(html.matches(r#"id="probe""#).count(), 1);
    }

    #[test]
    fn test_fonts_are_linked_and_declared() {
        let shell = RootShell::new();
        let html = render_probe();
        for font in [shell.heading_font(), shell.body_font()] {
            let href = font.stylesheet_href().replace('&', "&amp;");
            assert!(html.contains(&href), "missing stylesheet for {}", font.family());
            assert!(html.contains(&font.declaration()));
        }
        assert_eq!(shell.heading_font().css_variable(), "--font-heading");
        assert_eq!(shell.body_font().css_variable(), "--font-body");
    }
}
