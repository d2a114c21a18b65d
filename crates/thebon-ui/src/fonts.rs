//! Web font handles.
//!
//! A [`Font`] is exposed to styles through a CSS custom property. Adding
//! [`Font::variable`] to an element's classes declares that property for the
//! element's subtree, and the Tailwind theme maps `font-display` / `font-sans`
//! onto it.

/// A Google-hosted font family bound to a CSS variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    family: &'static str,
    css_variable: &'static str,
    class: &'static str,
    weights: &'static str,
    subsets: &'static [&'static str],
    fallback: &'static str,
}

/// Display face used by headings (`font-display`).
pub const HEADING_FONT: Font = Font::new("Playfair Display", "--font-heading", "font-heading-variable")
    .weights("400..900")
    .fallback("serif");

/// Body face (`font-sans`).
pub const BODY_FONT: Font =
    Font::new("Source Sans 3", "--font-body", "font-body-variable").weights("200..900");

impl Font {
    /// `font-display` for every family: text shows in the fallback face
    /// until the web font arrives.
    pub const DISPLAY: &'static str = "swap";

    /// Latin subset, sans-serif fallback.
    pub const fn new(family: &'static str, css_variable: &'static str, class: &'static str) -> Self {
        Self {
            family,
            css_variable,
            class,
            weights: "400",
            subsets: &["latin"],
            fallback: "sans-serif",
        }
    }

    /// Weight axis range, e.g. `"400..900"` for a variable font.
    pub const fn weights(mut self, weights: &'static str) -> Self {
        self.weights = weights;
        self
    }

    /// Generic family used until the web font has loaded.
    pub const fn fallback(mut self, fallback: &'static str) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The custom property name, e.g. `--font-heading`.
    pub fn css_variable(&self) -> &'static str {
        self.css_variable
    }

    /// Class name that declares [`Font::css_variable`] on an element.
    pub fn variable(&self) -> &'static str {
        self.class
    }

    /// Google Fonts css2 stylesheet URL for this family.
    pub fn stylesheet_href(&self) -> String {
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@{}&subset={}&display={}",
            self.family.replace(' ', "+"),
            self.weights,
            self.subsets.join(","),
            Self::DISPLAY
        )
    }

    /// CSS rule binding the variable to the family under [`Font::variable`].
    pub fn declaration(&self) -> String {
        format!(
            ".{} {{ {}: '{}', {}; }}",
            self.class, self.css_variable, self.family, self.fallback
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_href() {
        assert_eq!(
            HEADING_FONT.stylesheet_href(),
            "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400..900&subset=latin&display=swap"
        );
        assert!(BODY_FONT.stylesheet_href().contains("family=Source+Sans+3:wght@200..900"));
    }

    #[test]
    fn test_declaration_binds_variable() {
        assert_eq!(
            HEADING_FONT.declaration(),
            ".font-heading-variable { --font-heading: 'Playfair Display', serif; }"
        );
        assert_eq!(
            BODY_FONT.declaration(),
            ".font-body-variable { --font-body: 'Source Sans 3', sans-serif; }"
        );
    }
}
