use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub webdriver: WebDriverSettings,
    #[serde(default)]
    pub crawl: CrawlSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebDriverSettings {
    pub url: String,
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        WebDriverSettings {
            url: "http://localhost:4444".to_string(),
        }
    }
}

/// Delay and timeout policy for one crawl. All knobs live here so they can
/// be tuned from configuration.yaml or environment overrides without
/// touching code.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlSettings {
    pub navigation_timeout_secs: u64,
    pub selector_timeout_secs: u64,
    pub scroll_delay_min_secs: f64,
    pub scroll_delay_max_secs: f64,
    pub max_scrolls: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        CrawlSettings {
            navigation_timeout_secs: 90,
            selector_timeout_secs: 45,
            scroll_delay_min_secs: 2.0,
            scroll_delay_max_secs: 5.0,
            max_scrolls: 3,
            viewport_width: 1280,
            viewport_height: 800,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("DRAGNET").separator("__"))
        .build()?;

    settings.try_deserialize::<Settings>()
}
