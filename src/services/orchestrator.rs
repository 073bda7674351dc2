use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;

use crate::dal::{serp_archive, timing_log};
use crate::domain::{MediaDirectory, MediaEntity, SearchJob, SearchParams, SiteRecord};
use crate::services::{
    extract_site_references, fetch_serp_links, google_date_range_directive, LinkFetcher,
};

const WIKIPEDIA_SITE_DIRECTIVE: &str = "site:wikipedia.org";

pub struct HarvestPlan {
    pub start_year: i32,
    pub end_year: i32,
    pub max_pages: u32,
    pub sleep_secs: u64,
    pub output_root: PathBuf,
}

/// Walks the region -> category -> year -> outlet grid exactly once, in
/// order. Every failure below the year level is contained: an outlet that
/// errors is recorded with an empty result list and the batch moves on.
pub async fn run_harvest<F: LinkFetcher>(
    directory: &MediaDirectory,
    plan: &HarvestPlan,
    fetcher: &F,
    client: &reqwest::Client,
) {
    let overall_start = Instant::now();

    for (region, categories) in directory {
        for (category, media_list) in categories {
            let timing_file = plan
                .output_root
                .join(format!("{}_execution_times.txt", category));
            let category_dir = plan.output_root.join(category).join(region);

            log::info!("Create Directory: {}", category_dir.display());
            if let Err(e) = std::fs::create_dir_all(&category_dir) {
                log::error!(
                    "Error creating directory {}: {:?}",
                    category_dir.display(),
                    e
                );
            }

            let region_start = Instant::now();

            for year in plan.start_year..=plan.end_year {
                let year_start = Instant::now();
                let start_date = format!("{}-01-01", year);
                let end_date = format!("{}-12-31", year);
                let mut batch: Vec<SiteRecord> = vec![];

                for media in media_list {
                    let website = match media.website.as_deref() {
                        Some(website) if !website.is_empty() => website,
                        _ => continue,
                    };

                    log::info!("Processing {} for {} in {}", website, region, year);
                    let record = harvest_media_site(
                        fetcher, client, media, website, &start_date, &end_date, plan,
                    )
                    .await;
                    batch.push(record);
                }

                if !batch.is_empty() {
                    let batch_path = category_dir
                        .join(format!("{}_articles_{}_{}.jsonl.gz", category, region, year));

                    match serp_archive::write_year_batch(&batch_path, &batch) {
                        Ok(()) => log::info!(
                            "Saved SERP data for {} in {} to {}",
                            region,
                            year,
                            batch_path.display()
                        ),
                        Err(e) => log::error!(
                            "Error saving data to {}: {:?}",
                            batch_path.display(),
                            e
                        ),
                    }
                }

                let label = format!("{} {}", region, year);
                if let Err(e) =
                    timing_log::append_timing(&timing_file, &label, year_start.elapsed())
                {
                    log::error!("Error appending timing for {}: {:?}", label, e);
                }
            }

            let label = format!("Region {}", region);
            if let Err(e) =
                timing_log::append_timing(&timing_file, &label, region_start.elapsed())
            {
                log::error!("Error appending timing for {}: {:?}", label, e);
            }
        }
    }

    log::info!(
        "Total execution time: {:.2} seconds.",
        overall_start.elapsed().as_secs_f64()
    );
}

/// Search-and-extract for one outlet. Always yields a record; an error in
/// the extraction step is logged and leaves the result list empty.
async fn harvest_media_site<F: LinkFetcher>(
    fetcher: &F,
    client: &reqwest::Client,
    media: &MediaEntity,
    website: &str,
    start_date: &str,
    end_date: &str,
    plan: &HarvestPlan,
) -> SiteRecord {
    let domain = crate::services::normalize_domain(website);
    let job = SearchJob::new(
        domain,
        SearchParams {
            directives: WIKIPEDIA_SITE_DIRECTIVE.to_string(),
            search_query_params: google_date_range_directive(start_date, end_date),
            sleep_secs: plan.sleep_secs,
            max_pages: plan.max_pages,
        },
    );

    let mut wikipedia_links = fetch_serp_links(fetcher, &job).await;
    wikipedia_links.retain(|link| link.contains("wikipedia.org"));

    let results = match extract_site_references(client, website, &wikipedia_links).await {
        Ok(results) => results,
        Err(e) => {
            log::error!("Error extracting links from {}: {:?}", website, e);
            vec![]
        }
    };

    SiteRecord {
        website: website.to_string(),
        date: Utc::now(),
        results,
        media_metadata: media.clone(),
    }
}
