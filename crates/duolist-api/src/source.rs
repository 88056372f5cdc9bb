use crate::error::FetchError;
use crate::filter::post_filter;
use duolist_state::{Record, RecordKind, SearchParams};
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::HeaderMap;
use reqwest::Url;
use std::time::Duration;

/// Header carrying the total number of matches across all pages.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// One fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Records after the client-side search filter.
    pub records: Vec<Record>,
    /// How many records the server sent, before filtering.
    pub returned: usize,
    /// Total match count, when the server reported one.
    pub total_count: Option<u64>,
}

impl FetchedPage {
    /// The reported total, or the size of this page when none was given.
    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(self.returned as u64)
    }

    /// Whether another page is likely to follow this one.
    pub fn has_more(&self, params: &SearchParams) -> bool {
        params.has_more_after(self.returned, self.total_count)
    }
}

/// Something that can produce pages of records.
///
/// Implemented over HTTP by [`HttpRecordSource`]; tests substitute in-memory
/// sources.
pub trait RecordSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        kind: RecordKind,
        params: &SearchParams,
    ) -> BoxFuture<'static, Result<FetchedPage, FetchError>>;
}

/// Fetches pages from a json-server style REST backend:
/// `GET {base}/{users|reviewers}?_page=P&_limit=L[&q=S]`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRecordSource {
    /// # Errors
    ///
    /// Fails when `base_url` is not an absolute URL or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut base_url =
            Url::parse(base_url).map_err(|_| FetchError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        // Joining onto a path without a trailing slash would replace its
        // last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Collection endpoint for `kind`.
    pub fn endpoint(&self, kind: RecordKind) -> Result<Url, FetchError> {
        self.base_url
            .join(kind.resource())
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch_page(
        &self,
        kind: RecordKind,
        params: &SearchParams,
    ) -> BoxFuture<'static, Result<FetchedPage, FetchError>> {
        let endpoint = self.endpoint(kind);
        let client = self.client.clone();
        let params = params.clone();
        async move {
            let url = endpoint?;
            tracing::debug!(%url, page = params.page(), "GET");
            let response = client.get(url).query(&params.query_pairs()).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status));
            }
            let total_count = parse_total_count(response.headers());

            let body = response.bytes().await?;
            let records: Vec<Record> = serde_json::from_slice(&body)?;
            let returned = records.len();
            let records = post_filter(records, params.search_value());

            Ok(FetchedPage {
                records,
                returned,
                total_count,
            })
        }
        .boxed()
    }
}

/// Read `X-Total-Count`. Missing or non-numeric values count as absent.
pub fn parse_total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
