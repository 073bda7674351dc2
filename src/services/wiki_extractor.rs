use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use crate::domain::PageLinks;

/// Canonical matching key for a site: host component (path when the input
/// has no host), minus one leading `www.`, minus trailing slashes.
/// Idempotent, so already-normalized domains pass through unchanged.
pub fn normalize_domain(site_url: &str) -> String {
    let host_or_path = match Url::parse(site_url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => parsed.path().to_string(),
        },
        Err(_) => site_url.to_string(),
    };

    let domain = match host_or_path.strip_prefix("www.") {
        Some(stripped) => stripped,
        None => host_or_path.as_str(),
    };

    domain.trim_end_matches('/').to_string()
}

// Site-relative hrefs are prefixed with the page's origin. This is
// deliberately not full RFC 3986 reference resolution: `../` segments and
// protocol-relative hrefs pass through as-is.
fn resolve_href(page_url: &str, href: &str) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }

    match Url::parse(page_url) {
        Ok(parsed) => format!(
            "{}{}",
            parsed.origin().ascii_serialization().trim_end_matches('/'),
            href
        ),
        Err(_) => format!("{}{}", page_url.trim_end_matches('/'), href),
    }
}

/// Pulls every anchor out of one page and keeps the links pointing back at
/// the target site. Matching is a substring test over normalized domains,
/// so subdomains of the target are accepted. Set semantics within the page.
pub fn collect_site_links(html: &str, page_url: &str, site_domain: &str) -> HashSet<String> {
    let anchor_selector = Selector::parse("a[href]").unwrap();
    let document = Html::parse_document(html);

    let mut matched = HashSet::new();
    for anchor in document.select(&anchor_selector) {
        let href = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        let link = resolve_href(page_url, href);
        if normalize_domain(&link).contains(site_domain) {
            matched.insert(link);
        }
    }

    matched
}

/// Fetches each secondary-source page and gathers the links it carries for
/// the media site. A non-2xx response skips that one page; transport and
/// decode errors propagate so the caller can fail the whole entity.
pub async fn extract_site_references(
    client: &reqwest::Client,
    media_website: &str,
    wikipedia_links: &[String],
) -> anyhow::Result<Vec<PageLinks>> {
    let site_domain = normalize_domain(media_website);
    let mut extracted: Vec<PageLinks> = vec![];

    for wikipedia_link in wikipedia_links {
        log::info!("Fetching Wikipedia URL: {}", wikipedia_link);

        let response = client
            .get(wikipedia_link)
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            log::error!(
                "Failed to fetch {}, status code: {}",
                wikipedia_link,
                response.status().as_u16()
            );
            continue;
        }

        let body = response.text().await?;
        let mut links: Vec<String> =
            collect_site_links(&body, wikipedia_link, &site_domain)
                .into_iter()
                .collect();
        links.sort();

        for link in &links {
            log::info!("Extracted URL: {} from: {}", link, wikipedia_link);
        }

        extracted.push(PageLinks {
            source: wikipedia_link.clone(),
            links,
        });
    }

    Ok(extracted)
}
