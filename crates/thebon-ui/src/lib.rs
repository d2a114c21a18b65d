//! Maud/Tailwind views for the TheBon site.
//!
//! This crate provides:
//! - [`cn`] / [`cn!`] for merging conditional class names
//! - Font handles and the Tailwind theme tokens
//! - [`RootShell`], the document layout every page renders inside
//! - The page views: [`HomeView`], [`NotFoundView`], [`ErrorView`]
//!
//! Everything here is pure: views take their inputs and return [`maud::Markup`],
//! routing and failure interception belong to the server crate.
//!
//! # Quick Start
//!
//! ```rust
//! use thebon_ui::{HomeView, RootShell};
//!
//! let page = RootShell::new().render(HomeView.render()).into_string();
//! assert!(page.contains("<title>TheBon</title>"));
//! ```

mod class_names;
mod fonts;
mod layout;
mod site;
mod theme;
pub mod views;

pub use class_names::{ClassValue, cn};
pub use fonts::{BODY_FONT, Font, HEADING_FONT};
pub use layout::RootShell;
pub use site::{Metadata, SITE_DESCRIPTION, SITE_LANG, SITE_NAME};
pub use theme::{TAILWIND_BROWSER, TAILWIND_THEME};
pub use views::{ErrorView, FailureInfo, HomeView, NotFoundView};
