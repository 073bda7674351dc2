use serde::Serialize;

const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Extra knobs for one search run. Echoed verbatim into the persisted
/// result so a reader can tell how the links were produced.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    pub directives: String,
    pub search_query_params: String,
    pub sleep_secs: u64,
    pub max_pages: u32,
}

#[derive(Debug, Clone)]
pub struct SearchJob {
    pub query: String,
    pub params: SearchParams,
}

impl SearchJob {
    pub fn new(query: String, params: SearchParams) -> Self {
        SearchJob { query, params }
    }

    /// Search URL without a page offset. Directives like `site:` go in
    /// front of the query, the date-range directive rides as a separate
    /// query parameter.
    pub fn base_url(&self) -> String {
        let mut url = String::from(GOOGLE_SEARCH_URL);

        match self.params.directives.is_empty() {
            true => url.push_str(&self.query),
            false => {
                url.push_str(&self.params.directives);
                url.push('+');
                url.push_str(&self.query);
            }
        }

        if !self.params.search_query_params.is_empty() {
            url.push('&');
            url.push_str(&self.params.search_query_params);
        }

        url
    }

    /// Result pages are addressed by a zero-based offset of ten results.
    pub fn page_url(&self, page_index: u32) -> String {
        format!("{}&start={}", self.base_url(), page_index * 10)
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchJob, SearchParams};

    fn params(directives: &str, query_params: &str) -> SearchParams {
        SearchParams {
            directives: directives.to_string(),
            search_query_params: query_params.to_string(),
            sleep_secs: 0,
            max_pages: 3,
        }
    }

    #[test]
    fn base_url_without_directives() {
        let job = SearchJob::new("municipal budgets".to_string(), params("", ""));

        assert_eq!(
            job.base_url(),
            "https://www.google.com/search?q=municipal budgets"
        );
    }

    #[test]
    fn base_url_with_site_directive_and_date_params() {
        let job = SearchJob::new(
            "example.com".to_string(),
            params("site:wikipedia.org", "tbs=cdr%3A1"),
        );

        assert_eq!(
            job.base_url(),
            "https://www.google.com/search?q=site:wikipedia.org+example.com&tbs=cdr%3A1"
        );
    }

    #[test]
    fn page_urls_step_by_ten_results() {
        let job = SearchJob::new("test".to_string(), params("", ""));

        assert!(job.page_url(0).ends_with("&start=0"));
        assert!(job.page_url(1).ends_with("&start=10"));
        assert!(job.page_url(2).ends_with("&start=20"));
    }
}
