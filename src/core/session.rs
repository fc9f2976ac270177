use crate::core::search::{SearchQuery, SearchSummary};
use crate::core::task::{Pacing, UserTask};
use crate::utils::error::{LoadgenError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Service banner returned by the root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub message: Option<String>,
    pub num_products: Option<u64>,
    pub checks_per_search: Option<u64>,
}

/// One simulated user's HTTP session against the search service.
///
/// The load harness manages its own per-user clients; this session backs the
/// probe binary and end-to-end tests, where a single self-contained client
/// is wanted.
pub struct SearchSession {
    client: Client,
    base_url: Url,
}

impl SearchSession {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// GET the service root and decode its banner. A non-success status is
    /// an error here, unlike searches where it is a normal outcome.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        let url = self.base_url.join("/")?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(LoadgenError::ServiceUnavailable {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Run one search action: draw a query from the term lists, issue the
    /// request and render the per-request summary line.
    pub async fn execute_search_task(&self) -> Result<String> {
        let query = SearchQuery::draw(&mut rand::thread_rng());
        self.run_query(&query).await
    }

    /// Issue a specific query and render its outcome. A non-success status
    /// renders the error line; only transport and decode failures are `Err`.
    pub async fn run_query(&self, query: &SearchQuery) -> Result<String> {
        let url = self.base_url.join(&query.request_path())?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        if status != 200 {
            return Ok(query.error_line(status));
        }

        let body = response.text().await?;
        let summary: SearchSummary = serde_json::from_str(&body)?;

        if let Some(search_time) = &summary.search_time {
            tracing::debug!(
                "search '{}' matched {} sample products in {} server-side",
                query.term(),
                summary.products.len(),
                search_time
            );
        }

        Ok(query.summary_line(&summary))
    }
}

#[async_trait]
impl UserTask for SearchSession {
    fn pacing(&self) -> Pacing {
        Pacing::NONE
    }

    async fn tick(&mut self) {
        match self.execute_search_task().await {
            Ok(line) => println!("{}", line),
            Err(err) => tracing::warn!("search request failed: {}", err),
        }
    }
}
