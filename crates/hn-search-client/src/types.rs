//! Search API data transfer objects
//!
//! These types mirror the JSON returned by the Hacker News search API.
//! The API returns `null` for fields that do not apply to a hit (e.g. a
//! story without an external link), those are read as empty/zero values.

use serde::{Deserialize, Deserializer, Serialize};

/// A single story hit
///
/// Identity is `object_id`; two stories with the same id are the same story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier assigned by the search index
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// External link (empty for Ask HN and similar posts)
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

impl Story {
    pub fn new(
        object_id: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        num_comments: u32,
        points: u32,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            url: url.into(),
            title: title.into(),
            author: author.into(),
            num_comments,
            points,
        }
    }
}

/// Body of a `/search` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matching stories for the requested page
    pub hits: Vec<Story>,

    /// Page number as reported by the service
    #[serde(default)]
    pub page: u32,

    /// Total number of pages available for the query
    #[serde(default)]
    pub nb_pages: u32,

    #[serde(default)]
    pub hits_per_page: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_story_deserialize() {
        let json = r#"{
            "objectID": "1",
            "url": "https://reactjs.org/",
            "title": "React",
            "author": "Jordan Walke",
            "num_comments": 3,
            "points": 4,
            "created_at": "2013-05-29T10:00:00.000Z"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(
            story,
            Story::new("1", "https://reactjs.org/", "React", "Jordan Walke", 3, 4)
        );
    }

    #[test]
    fn test_story_null_fields() {
        let json = r#"{
            "objectID": "2",
            "url": null,
            "title": "Ask HN: Anyone?",
            "author": "pg",
            "num_comments": null
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.url, "");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    fn test_story_requires_object_id() {
        let json = r#"{"title": "no id"}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "hits": [
                {"objectID": "1", "title": "React", "author": "a", "url": "u", "num_comments": 1, "points": 2}
            ],
            "page": 2,
            "nbPages": 50,
            "hitsPerPage": 20,
            "query": "react"
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.page, 2);
        assert_eq!(response.nb_pages, 50);
        assert_eq!(response.hits_per_page, 20);
    }
}
