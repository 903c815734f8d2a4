//! Construction-time settings for `BookmarkClient`.
//!
//! The host application routes plugin traffic under `/plugins/<plugin_id>`.
//! A versioned suffix such as `/api/v1` is recognized but off by default; the
//! server plugin does not route it yet.

use serde::Deserialize;

/// Settings a host passes to `BookmarkClient::new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Origin of the host application, e.g. `http://localhost:8065`.
    /// Empty yields relative paths.
    pub site_url: String,
    pub plugin_id: String,
    #[serde(default)]
    pub api_version_prefix: Option<String>,
    /// Fixed value for `X-Timezone-Offset`. `None` reads the local offset on
    /// every request.
    #[serde(default)]
    pub timezone_offset_minutes: Option<i32>,
}

impl ClientConfig {
    pub fn new(site_url: &str, plugin_id: &str) -> Self {
        Self {
            site_url: site_url.to_string(),
            plugin_id: plugin_id.to_string(),
            api_version_prefix: None,
            timezone_offset_minutes: None,
        }
    }

    pub fn with_api_version_prefix(mut self, prefix: &str) -> Self {
        self.api_version_prefix = Some(prefix.to_string());
        self
    }

    pub fn with_timezone_offset(mut self, minutes: i32) -> Self {
        self.timezone_offset_minutes = Some(minutes);
        self
    }

    /// `<site_url>/plugins/<plugin_id>` followed by the version prefix, if any.
    pub fn base_url(&self) -> String {
        let mut url = format!(
            "{}/plugins/{}",
            self.site_url.trim_end_matches('/'),
            self.plugin_id
        );
        if let Some(prefix) = self.api_version_prefix.as_deref() {
            let prefix = prefix.trim_end_matches('/');
            if !prefix.is_empty() {
                if !prefix.starts_with('/') {
                    url.push('/');
                }
                url.push_str(prefix);
            }
        }
        url
    }
}
