use serde::Serialize;
use thiserror::Error;
use url::Url;

pub const SEARCH_ENDPOINT: &str = "https://search.naver.com/search.naver";

// Unknown clients get served different markup
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct SearchPage {
    pub url: Url,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read the response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Serialize)]
struct BlogSearchQuery {
    ssc: &'static str, // pins the blog tab
    sm: &'static str,
    query: String,
}

impl BlogSearchQuery {
    fn for_term(term: &str) -> Self {
        Self {
            ssc: "tab.blog.all",
            sm: "tab_jum",
            query: term.to_string(),
        }
    }
}

pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .build()
}

pub async fn fetch_search_page(
    client: &reqwest::Client,
    term: &str,
) -> Result<SearchPage, FetchError> {
    let request = build_search_request(client, term).map_err(|source| FetchError::Request {
        url: SEARCH_ENDPOINT.to_string(),
        source,
    })?;
    let url = request.url().clone();

    log::info!("Requesting blog search results: {}", url);

    let response = client
        .execute(request)
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    Ok(SearchPage {
        url,
        body: body.to_vec(),
    })
}

fn build_search_request(
    client: &reqwest::Client,
    term: &str,
) -> Result<reqwest::Request, reqwest::Error> {
    client
        .get(SEARCH_ENDPOINT)
        .query(&BlogSearchQuery::for_term(term))
        .build()
}
