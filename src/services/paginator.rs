use std::time::Duration;

use crate::domain::SearchJob;

/// Capability seam over one page-load-and-extract cycle. The production
/// implementation is a browser session; tests script the returned links.
#[allow(async_fn_in_trait)]
pub trait LinkFetcher {
    async fn fetch_links(&self, url: &str) -> Vec<String>;
}

/// Drives the fetcher across the job's result pages and accumulates links
/// in page-then-DOM order. Links are NOT deduplicated across pages. A page
/// with no results is logged and the remaining pages are still attempted;
/// the politeness delay applies after every page regardless of outcome.
pub async fn fetch_serp_links<F: LinkFetcher>(fetcher: &F, job: &SearchJob) -> Vec<String> {
    let mut harvested: Vec<String> = vec![];

    for page_index in 0..job.params.max_pages {
        let page_url = job.page_url(page_index);
        log::info!("Fetching page {}: {}", page_index + 1, page_url);

        let links = fetcher.fetch_links(&page_url).await;

        match links.is_empty() {
            true => log::warn!("No links found on page {}.", page_index + 1),
            false => {
                log::info!("Found {} links on page {}", links.len(), page_index + 1);
                harvested.extend(links);
            }
        }

        tokio::time::sleep(Duration::from_secs(job.params.sleep_secs)).await;
    }

    harvested
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::domain::{SearchJob, SearchParams};

    use super::{fetch_serp_links, LinkFetcher};

    struct ScriptedFetcher {
        visited: RefCell<Vec<String>>,
        pages: RefCell<VecDeque<Vec<String>>>,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<Vec<String>>) -> Self {
            ScriptedFetcher {
                visited: RefCell::new(vec![]),
                pages: RefCell::new(pages.into()),
            }
        }
    }

    impl LinkFetcher for ScriptedFetcher {
        async fn fetch_links(&self, url: &str) -> Vec<String> {
            self.visited.borrow_mut().push(url.to_string());
            self.pages.borrow_mut().pop_front().unwrap_or_default()
        }
    }

    fn job(max_pages: u32) -> SearchJob {
        SearchJob::new(
            "test".to_string(),
            SearchParams {
                directives: "".to_string(),
                search_query_params: "".to_string(),
                sleep_secs: 0,
                max_pages,
            },
        )
    }

    #[tokio::test]
    async fn three_pages_are_visited_at_offsets_zero_ten_twenty() {
        let fetcher = ScriptedFetcher::new(vec![vec![], vec![], vec![]]);

        fetch_serp_links(&fetcher, &job(3)).await;

        let visited = fetcher.visited.borrow();
        assert_eq!(visited.len(), 3);
        assert!(visited[0].ends_with("&start=0"));
        assert!(visited[1].ends_with("&start=10"));
        assert!(visited[2].ends_with("&start=20"));
    }

    #[tokio::test]
    async fn an_empty_page_does_not_abort_the_remaining_pages() {
        let fetcher = ScriptedFetcher::new(vec![
            vec!["https://a.example/1".to_string()],
            vec![],
            vec!["https://a.example/2".to_string()],
        ]);

        let links = fetch_serp_links(&fetcher, &job(3)).await;

        assert_eq!(fetcher.visited.borrow().len(), 3);
        assert_eq!(links, vec!["https://a.example/1", "https://a.example/2"]);
    }

    #[tokio::test]
    async fn duplicate_links_across_pages_are_preserved() {
        let repeated = "https://a.example/repeated".to_string();
        let fetcher =
            ScriptedFetcher::new(vec![vec![repeated.clone()], vec![repeated.clone()]]);

        let links = fetch_serp_links(&fetcher, &job(2)).await;

        assert_eq!(links, vec![repeated.clone(), repeated]);
    }
}
