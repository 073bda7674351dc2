use std::time::{Duration, Instant};

use rand::Rng;
use serde_json::json;
use thirtyfour::extensions::cdp::ChromeDevTools;
use thirtyfour::extensions::query::ElementQueryable;
use thirtyfour::{
    BrowserCapabilitiesHelper, By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver,
};

use crate::configuration::{CrawlSettings, WebDriverSettings};
use crate::services::{LinkFetcher, UserAgentProvider};

/// Result anchors on a standard Google results page.
pub const GOOGLE_RESULT_SELECTOR: &str = "div.tF2Cxc a";
/// Result anchors when harvesting English Wikipedia articles.
pub const WIKIPEDIA_RESULT_SELECTOR: &str = r#"a[href^="https://en.wikipedia.org/wiki/"]"#;

// Injected before navigation so the page never sees the default
// automation fingerprint.
const STEALTH_SCRIPT: &str = r#"
Object.defineProperty(navigator, 'webdriver', { get: () => undefined });
Object.defineProperty(navigator, 'languages', { get: () => ['en-US', 'en'] });
Object.defineProperty(navigator, 'plugins', { get: () => [1, 2, 3, 4, 5] });
window.chrome = { runtime: {} };
"#;

/// One page-load-and-extract unit. Launches a fresh visible browser per
/// fetch and tears it down on every path, so a wedged page never leaks a
/// driver into the next unit of work.
pub struct BrowserSession {
    webdriver: WebDriverSettings,
    crawl: CrawlSettings,
    result_selector: &'static str,
    user_agents: Box<dyn UserAgentProvider + Send + Sync>,
}

impl BrowserSession {
    pub fn new(
        webdriver: WebDriverSettings,
        crawl: CrawlSettings,
        result_selector: &'static str,
        user_agents: Box<dyn UserAgentProvider + Send + Sync>,
    ) -> Self {
        BrowserSession {
            webdriver,
            crawl,
            result_selector,
            user_agents,
        }
    }

    async fn launch(&self) -> anyhow::Result<WebDriver> {
        let user_agent = self.user_agents.next();

        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg(&format!("--user-agent={}", user_agent))?;
        caps.add_arg(&format!(
            "--window-size={},{}",
            self.crawl.viewport_width, self.crawl.viewport_height
        ))?;
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        caps.insert_browser_option("excludeSwitches", json!(["enable-automation"]))?;

        let driver = WebDriver::new(&self.webdriver.url, caps).await?;
        driver
            .set_page_load_timeout(Duration::from_secs(self.crawl.navigation_timeout_secs))
            .await?;

        Ok(driver)
    }

    async fn harvest(&self, driver: &WebDriver, url: &str) -> anyhow::Result<Vec<String>> {
        let dev_tools = ChromeDevTools::new(driver.handle.clone());
        dev_tools.execute_cdp("Network.enable").await?;
        dev_tools
            .execute_cdp_with_params(
                "Network.setExtraHTTPHeaders",
                json!({
                    "headers": {
                        "Referer": "https://www.google.com/",
                        "Accept-Language": "en-US,en;q=0.9",
                        "Accept-Encoding": "gzip, deflate, br",
                    }
                }),
            )
            .await?;
        dev_tools
            .execute_cdp_with_params(
                "Page.addScriptToEvaluateOnNewDocument",
                json!({ "source": STEALTH_SCRIPT }),
            )
            .await?;

        log::info!("Opening URL: {}", url);
        driver.goto(url).await?;
        self.wait_until_settled(driver).await;

        // Lazily-loaded result elements only render once the bottom of the
        // page has been reached, so scroll a few times with a human-looking
        // pause in between.
        for _ in 0..self.crawl.max_scrolls {
            driver
                .execute("window.scrollBy(0, document.body.scrollHeight);", vec![])
                .await?;
            let delay = rand::thread_rng().gen_range(
                self.crawl.scroll_delay_min_secs..=self.crawl.scroll_delay_max_secs,
            );
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }

        driver
            .query(By::Css(self.result_selector))
            .wait(
                Duration::from_secs(self.crawl.selector_timeout_secs),
                Duration::from_millis(500),
            )
            .first()
            .await?;

        let mut links: Vec<String> = vec![];
        for anchor in driver.find_all(By::Css(self.result_selector)).await? {
            if let Some(href) = anchor.attr("href").await? {
                if !href.is_empty() {
                    links.push(href);
                }
            }
        }

        log::info!("Extracted {} links.", links.len());
        Ok(links)
    }

    // Best-effort stand-in for a network-idle wait: poll readyState until
    // the document reports complete or the navigation budget runs out.
    async fn wait_until_settled(&self, driver: &WebDriver) {
        let deadline =
            Instant::now() + Duration::from_secs(self.crawl.navigation_timeout_secs);

        loop {
            match driver.execute("return document.readyState;", vec![]).await {
                Ok(state) => {
                    if state.json().as_str() == Some("complete") {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("readyState probe failed: {:?}", e);
                    break;
                }
            }

            if Instant::now() >= deadline {
                log::warn!("Page did not settle within the navigation timeout");
                break;
            }

            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    }
}

impl LinkFetcher for BrowserSession {
    /// Navigation, timeout, and selector failures all surface as an empty
    /// link list; the driver is quit regardless of how the fetch went.
    async fn fetch_links(&self, url: &str) -> Vec<String> {
        let driver = match self.launch().await {
            Ok(driver) => driver,
            Err(e) => {
                log::error!("Failed to launch browser session: {:?}", e);
                return vec![];
            }
        };

        let links = match self.harvest(&driver, url).await {
            Ok(links) => links,
            Err(e) => {
                log::error!("Error during browser fetch of {}: {:?}", url, e);
                vec![]
            }
        };

        if let Err(e) = driver.quit().await {
            log::error!("Failed to close browser: {:?}", e);
        }

        links
    }
}
