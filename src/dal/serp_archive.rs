use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::{SerpResult, SiteRecord};

pub fn ensure_parent_directory(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Mode 1 output: one pretty-printed JSON document, gzip-compressed.
pub fn write_search_result(path: &Path, result: &SerpResult) -> anyhow::Result<()> {
    ensure_parent_directory(path)?;

    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    let document = serde_json::to_string_pretty(result)?;
    encoder.write_all(document.as_bytes())?;
    encoder.finish()?;

    Ok(())
}

/// Mode 2 output: newline-delimited JSON records (not an array), one per
/// processed outlet, gzip-compressed.
pub fn write_year_batch(path: &Path, batch: &[SiteRecord]) -> anyhow::Result<()> {
    ensure_parent_directory(path)?;

    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    for record in batch {
        serde_json::to_writer(&mut encoder, record)?;
        encoder.write_all(b"\n")?;
    }
    encoder.finish()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use chrono::Utc;
    use flate2::read::GzDecoder;

    use crate::domain::{
        MediaEntity, PageLinks, SearchJob, SearchParams, SerpResult, SiteRecord,
    };

    use super::{write_search_result, write_year_batch};

    fn read_gzipped(path: &std::path::Path) -> String {
        let mut decoder = GzDecoder::new(std::fs::File::open(path).unwrap());
        let mut contents = String::new();
        decoder.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn search_result_round_trips_through_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scraped_data/links.json.gz");

        let job = SearchJob::new(
            "test".to_string(),
            SearchParams {
                directives: "".to_string(),
                search_query_params: "".to_string(),
                sleep_secs: 2,
                max_pages: 1,
            },
        );
        let result = SerpResult::new(&job, vec!["https://example.com/a".to_string()]);

        write_search_result(&path, &result).unwrap();

        let document: serde_json::Value =
            serde_json::from_str(&read_gzipped(&path)).unwrap();
        assert_eq!(document["query"], "test");
        assert_eq!(document["source"], "Google");
        assert_eq!(document["links"][0], "https://example.com/a");
    }

    #[test]
    fn year_batch_is_line_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news/CA/news_articles_CA_2022.jsonl.gz");

        let entity = MediaEntity {
            website: Some("https://example-news.com".to_string()),
            metadata: serde_json::Map::new(),
        };
        let record = |results: Vec<PageLinks>| SiteRecord {
            website: "https://example-news.com".to_string(),
            date: Utc::now(),
            results,
            media_metadata: entity.clone(),
        };
        let batch = vec![
            record(vec![PageLinks {
                source: "https://en.wikipedia.org/wiki/Example".to_string(),
                links: vec!["https://example-news.com/about".to_string()],
            }]),
            record(vec![]),
        ];

        write_year_batch(&path, &batch).unwrap();

        let contents = read_gzipped(&path);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(
            first["results"][0]["https://en.wikipedia.org/wiki/Example"][0],
            "https://example-news.com/about"
        );

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["results"].as_array().unwrap().is_empty());
    }
}
