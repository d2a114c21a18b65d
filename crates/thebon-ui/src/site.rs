//! Fixed site identity.

pub const SITE_NAME: &str = "TheBon";
pub const SITE_DESCRIPTION: &str = "TheBon 공식 웹사이트";

/// Document language tag.
pub const SITE_LANG: &str = "ko";

/// Page metadata rendered into the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

impl Metadata {
    pub const fn site() -> Self {
        Self {
            title: SITE_NAME,
            description: SITE_DESCRIPTION,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::site()
    }
}
