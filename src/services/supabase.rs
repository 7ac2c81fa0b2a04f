use crate::models::{Journey, Story};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Columns selected for journey candidates
const JOURNEY_COLUMNS: &str = "slug,title,destinations,focus,hero_image,duration,price";

/// Columns selected for story candidates
const STORY_COLUMNS: &str = "slug,title,region,tags,category,hero_image,excerpt";

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names in the content store
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub journeys: String,
    pub stories: String,
}

/// Read-only Supabase client over the PostgREST API
///
/// Only published rows are ever requested.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    pub fn tables(&self) -> &SupabaseTables {
        &self.tables
    }

    /// Fetch every published journey
    pub async fn published_journeys(&self) -> Result<Vec<Journey>, SupabaseError> {
        self.fetch_published(&self.tables.journeys, JOURNEY_COLUMNS).await
    }

    /// Fetch every published story
    pub async fn published_stories(&self) -> Result<Vec<Story>, SupabaseError> {
        self.fetch_published(&self.tables.stories, STORY_COLUMNS).await
    }

    async fn fetch_published<T>(&self, table: &str, columns: &str) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(table)
        );

        tracing::debug!("Fetching published rows from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", columns), ("published", "eq.true")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(SupabaseError::ApiError { status, body });
        }

        let json: Value = response.json().await?;
        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse(format!("Expected an array of rows from {}", table)))?;

        // A single malformed row must not hide the rest of the catalog
        let parsed: Vec<T> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!("Skipping malformed row in {}: {}", table, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} of {} rows from {}", parsed.len(), rows.len(), table);

        Ok(parsed)
    }
}
