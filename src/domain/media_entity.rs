use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// region -> category -> outlets, as loaded from the directory document.
/// BTreeMap keeps traversal order deterministic across runs.
pub type MediaDirectory = BTreeMap<String, BTreeMap<String, Vec<MediaEntity>>>;

/// One media outlet from the directory document. Everything except the
/// website is opaque metadata and is carried through to the output as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Links matched for one secondary-source page. Serializes as a
/// single-entry map, `{"<page url>": ["<link>", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub source: String,
    pub links: Vec<String>,
}

impl Serialize for PageLinks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.source, &self.links)?;
        map.end()
    }
}

/// One processed outlet within a year batch. A record is appended whether
/// or not the extraction found anything.
#[derive(Debug, Serialize)]
pub struct SiteRecord {
    pub website: String,
    pub date: DateTime<Utc>,
    pub results: Vec<PageLinks>,
    pub media_metadata: MediaEntity,
}

#[cfg(test)]
mod tests {
    use super::{MediaDirectory, MediaEntity, PageLinks};

    #[test]
    fn directory_document_round_trips() {
        let raw = r#"
        {
            "CA": {
                "news": [
                    {"website": "https://example-news.com", "name": "Example News"},
                    {"name": "No Website Gazette"}
                ]
            }
        }
        "#;

        let directory: MediaDirectory = serde_json::from_str(raw).unwrap();
        let outlets = &directory["CA"]["news"];

        assert_eq!(outlets.len(), 2);
        assert_eq!(
            outlets[0].website.as_deref(),
            Some("https://example-news.com")
        );
        assert_eq!(outlets[0].metadata["name"], "Example News");
        assert!(outlets[1].website.is_none());
    }

    #[test]
    fn metadata_survives_reserialization() {
        let raw = r#"{"website": "https://example.com", "state": "CA", "rank": 3}"#;

        let entity: MediaEntity = serde_json::from_str(raw).unwrap();
        let value = serde_json::to_value(&entity).unwrap();

        assert_eq!(value["website"], "https://example.com");
        assert_eq!(value["state"], "CA");
        assert_eq!(value["rank"], 3);
    }

    #[test]
    fn page_links_serialize_as_single_entry_map() {
        let page = PageLinks {
            source: "https://en.wikipedia.org/wiki/Example".to_string(),
            links: vec!["https://example.com/about".to_string()],
        };

        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value["https://en.wikipedia.org/wiki/Example"][0],
            "https://example.com/about"
        );
    }
}
