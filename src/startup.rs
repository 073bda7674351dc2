use std::fs::File;

use crate::cli::{HarvestArgs, SearchArgs};
use crate::configuration::Settings;
use crate::dal::serp_archive;
use crate::domain::{MediaDirectory, SearchJob, SearchParams, SerpResult};
use crate::services::{
    fetch_serp_links, google_date_range_directive, run_harvest, BrowserSession, HarvestPlan,
    RandomUserAgent, GOOGLE_RESULT_SELECTOR, WIKIPEDIA_RESULT_SELECTOR,
};

/// Mode 1: one query, one compressed JSON document of harvested links.
pub async fn run_search(args: SearchArgs, settings: &Settings) -> anyhow::Result<()> {
    let params = SearchParams {
        directives: match args.site.as_deref() {
            Some(site) => format!("site:{}", site),
            None => String::new(),
        },
        search_query_params: google_date_range_directive(&args.start_date, &args.end_date),
        sleep_secs: args.sleep,
        max_pages: args.pages,
    };
    let job = SearchJob::new(args.query, params);

    let fetcher = BrowserSession::new(
        settings.webdriver.clone(),
        settings.crawl.clone(),
        GOOGLE_RESULT_SELECTOR,
        Box::new(RandomUserAgent),
    );

    let links = fetch_serp_links(&fetcher, &job).await;
    let result = SerpResult::new(&job, links);

    serp_archive::write_search_result(&args.output, &result)?;
    log::info!("Scraped data saved to {}", args.output.display());

    Ok(())
}

/// Mode 2: the nested batch over the media directory document.
pub async fn run_directory_harvest(
    args: HarvestArgs,
    settings: &Settings,
) -> anyhow::Result<()> {
    let directory: MediaDirectory = serde_json::from_reader(File::open(&args.directory)?)?;

    let fetcher = BrowserSession::new(
        settings.webdriver.clone(),
        settings.crawl.clone(),
        WIKIPEDIA_RESULT_SELECTOR,
        Box::new(RandomUserAgent),
    );
    let client = reqwest::Client::new();

    let plan = HarvestPlan {
        start_year: args.start_year,
        end_year: args.end_year,
        max_pages: args.pages,
        sleep_secs: args.sleep,
        output_root: args.output_root,
    };

    run_harvest(&directory, &plan, &fetcher, &client).await;

    Ok(())
}
