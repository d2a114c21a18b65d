//! Page views.
//!
//! Each view is a pure function of its inputs producing the page body;
//! [`RootShell`](crate::RootShell) wraps it into a document.

mod error;
mod home;
mod not_found;

pub use error::{ErrorView, FailureInfo};
pub use home::HomeView;
pub use not_found::NotFoundView;

/// Centered full-height page container.
pub(crate) const PAGE: &str = "flex min-h-screen flex-col items-center justify-center bg-surface px-4";

/// Primary call-to-action, with spring easing on the hover/press scale.
pub(crate) const ACTION: &str = "ease-spring rounded-lg bg-primary px-6 py-3 font-medium text-white transition-transform hover:bg-primary-hover hover:scale-[1.02] active:scale-[0.98]";
