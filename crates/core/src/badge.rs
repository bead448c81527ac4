//! The "since version X" badge.
//!
//! The badge links to the project's release listing and renders as
//! `(since 1.2.3)`, with the parentheses wrapped in their own spans so the
//! stylesheet can hide them when the badge is shown as a pill.

/// Release listing the badge links to unless configured otherwise.
pub const RELEASES_URL: &str = "https://github.com/janoszen/containerssh/releases";

/// Renders version badges against a release listing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRenderer {
    releases_url: String,
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self { releases_url: RELEASES_URL.to_string() }
    }
}

impl BadgeRenderer {
    pub fn new(releases_url: impl Into<String>) -> Self {
        Self { releases_url: releases_url.into() }
    }

    pub fn releases_url(&self) -> &str {
        &self.releases_url
    }

    /// Render the badge for `version`.
    ///
    /// The version is embedded as-is. No HTML escaping is applied, so the
    /// caller is responsible for not passing untrusted input.
    #[must_use]
    pub fn render(&self, version: &str) -> String {
        format!(
            concat!(
                r#"<a href="{url}" target="_blank">"#,
                r#"<span class="since">"#,
                r#"<span class="since__hide">(</span>"#,
                r#"<span class="since__text">since</span> "#,
                r#"<span class="since__value">{version}</span>"#,
                r#"<span class="since__hide">)</span>"#,
                "</span></a>",
            ),
            url = self.releases_url,
            version = version,
        )
    }
}

/// Render the badge for `version` against [`RELEASES_URL`].
#[must_use]
pub fn render(version: &str) -> String {
    BadgeRenderer::default().render(version)
}
