use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Published story (article) as stored in the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub slug: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub region: String,
    #[serde(default, deserialize_with = "loose_list")]
    pub tags: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub category: String,
    #[serde(rename = "heroImage", alias = "hero_image", default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Published journey (itinerary) as stored in the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    pub slug: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_list")]
    pub destinations: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub focus: String,
    #[serde(rename = "heroImage", alias = "hero_image", default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// Story ranked against a journey
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedStory {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "heroImage", skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub score: u32,
}

/// Journey ranked against a story
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedJourney {
    pub slug: String,
    pub title: String,
    #[serde(rename = "heroImage", skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    pub score: u32,
}

/// Points awarded per matching signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub region: u32,
    pub tag_destination: u32,
    pub focus_tag: u32,
    pub focus_category: u32,
    pub category_focus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            region: 10,
            tag_destination: 5,
            focus_tag: 3,
            focus_category: 3,
            category_focus: 5,
        }
    }
}

/// Accept a string, number, bool or null as text; null becomes empty
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Accept a comma-separated string or an array of strings
fn loose_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    })
}
