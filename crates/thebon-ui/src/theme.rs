//! Tailwind setup shared by every page.

/// Tailwind browser build. Compiles utility classes in the page at load time.
pub const TAILWIND_BROWSER: &str = "https://unpkg.com/@tailwindcss/browser@4";

/// Semantic tokens behind the utilities the views use:
/// `bg-surface`, `text-text-primary`, `bg-primary-hover`, `font-display`,
/// `ease-spring`, etc.
pub const TAILWIND_THEME: &str = r#"
@theme {
  --color-surface: #faf7f2;
  --color-primary: #8b5e34;
  --color-primary-hover: #744c28;
  --color-text-primary: #1f1a14;
  --color-text-secondary: #6b6259;

  --font-display: var(--font-heading), serif;
  --font-sans: var(--font-body), sans-serif;

  --ease-spring: cubic-bezier(0.34, 1.56, 0.64, 1);
}
"#;
