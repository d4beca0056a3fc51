use chrono::Locale;
use crate::utils::dates::DEFAULT_LOCALE;

/// Settings for a review board instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Local storage key the collection is persisted under.
    pub storage_key: String,
    /// Shown instead of an empty reviewer name.
    pub placeholder_name: String,
    /// Locale for long dates.
    pub locale: Locale,
    pub geolocation: GeolocationConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "reviews".to_string(),
            placeholder_name: "New Customer".to_string(),
            locale: DEFAULT_LOCALE,
            geolocation: GeolocationConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_geolocation_key(mut self, api_key: Option<String>) -> Self {
        self.geolocation.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }
}

/// Country flag lookup. Without an API key no request is made.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.ipgeolocation.io/ipgeo".to_string(),
            api_key: None,
        }
    }
}

impl GeolocationConfig {
    /// Full request URL, or `None` when no key is configured.
    pub fn request_url(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            format!("{}?apiKey={}", self.endpoint, urlencoding::encode(key))
        })
    }
}
