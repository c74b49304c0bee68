//! Render context passed through a render pass.

use std::collections::BTreeMap;

use gfm_config::Config;

/// Values made available to self-rendering nodes during a render pass.
///
/// The built-in serializers never read it; it is handed unchanged to every
/// [`RenderAsHtml`](crate::RenderAsHtml) hook.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over all values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&Config> for RenderContext {
    fn from(config: &Config) -> Self {
        Self {
            values: config.context.clone(),
        }
    }
}
