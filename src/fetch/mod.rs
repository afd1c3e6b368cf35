pub mod extractor;

pub use extractor::HtmlContentExtractor;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::model::{FetchOutcome, Handle, TextCorpus};
use crate::domain::ports::{ConfigProvider, ContentExtractor, ContentSource};
use crate::utils::error::Result;

/// Browser-like UA; bare client identifiers tend to get a stripped page.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetches an account's public profile page and runs the extractor over
/// it. One attempt per invocation, bounded by the client timeout, no
/// retries.
pub struct ProfileFetcher<E: ContentExtractor> {
    client: Client,
    base_url: String,
    extractor: E,
}

impl<E: ContentExtractor> ProfileFetcher<E> {
    pub fn from_config<C: ConfigProvider>(config: &C, extractor: E) -> Result<Self> {
        Self::new(
            config.profile_base_url(),
            config.fetch_timeout_secs(),
            extractor,
        )
    }

    pub fn new(base_url: impl Into<String>, timeout_secs: u64, extractor: E) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            extractor,
        })
    }

    fn profile_url(&self, handle: &Handle) -> String {
        format!("{}/{}", self.base_url, handle)
    }
}

#[async_trait]
impl<E: ContentExtractor> ContentSource for ProfileFetcher<E> {
    async fn fetch(&self, handle: &Handle) -> FetchOutcome {
        let url = self.profile_url(handle);
        tracing::debug!("Requesting profile page: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::NetworkFailure(format!("request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::NetworkFailure(format!("profile page returned {}", status));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::NetworkFailure(format!("body read failed: {}", e)),
        };

        let fragments = self.extractor.extract(&body);
        if fragments.is_empty() {
            return FetchOutcome::Empty;
        }

        tracing::debug!("Extracted {} candidate fragments from {}", fragments.len(), url);
        FetchOutcome::Content(TextCorpus::new(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn fetcher_for(base_url: String) -> ProfileFetcher<HtmlContentExtractor> {
        ProfileFetcher::new(base_url, 2, HtmlContentExtractor::new()).unwrap()
    }

    #[tokio::test]
    async fn qualifying_fragments_become_content() {
        let server = MockServer::start();
        let page = concat!(
            "<html><body>",
            "<div class=\"tweet-text\">Loving the gLumi rollout, the dashboard is clean.</div>",
            "<article class=\"status-body\">Big GLUMI milestone shipped to the whole team.</article>",
            "</body></html>"
        );

        let profile_mock = server.mock(|when, then| {
            when.method(GET).path("/testuser");
            then.status(200)
                .header("Content-Type", "text/html")
                .body(page);
        });

        let fetcher = fetcher_for(server.base_url());
        let handle = Handle::parse("testuser").unwrap();

        let outcome = fetcher.fetch(&handle).await;

        profile_mock.assert();
        match outcome {
            FetchOutcome::Content(corpus) => {
                assert_eq!(corpus.fragment_count(), 2);
                assert!(corpus.joined_text().contains("gLumi rollout"));
            }
            other => panic!("expected content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn page_without_content_markup_is_empty() {
        let server = MockServer::start();

        let profile_mock = server.mock(|when, then| {
            when.method(GET).path("/testuser");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html><body><div class=\"nav\">Home About Contact and more</div></body></html>");
        });

        let fetcher = fetcher_for(server.base_url());
        let handle = Handle::parse("testuser").unwrap();

        let outcome = fetcher.fetch(&handle).await;

        profile_mock.assert();
        assert!(matches!(outcome, FetchOutcome::Empty));
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_failure() {
        let server = MockServer::start();

        let profile_mock = server.mock(|when, then| {
            when.method(GET).path("/testuser");
            then.status(503);
        });

        let fetcher = fetcher_for(server.base_url());
        let handle = Handle::parse("testuser").unwrap();

        let outcome = fetcher.fetch(&handle).await;

        profile_mock.assert();
        match outcome {
            FetchOutcome::NetworkFailure(reason) => assert!(reason.contains("503")),
            other => panic!("expected network failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_failure() {
        // Port 9 (discard) is not listening in the test environment.
        let fetcher = fetcher_for("http://127.0.0.1:9".to_string());
        let handle = Handle::parse("testuser").unwrap();

        let outcome = fetcher.fetch(&handle).await;

        assert!(matches!(outcome, FetchOutcome::NetworkFailure(_)));
    }
}
