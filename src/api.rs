// API client module: a small blocking HTTP client that POSTs product
// records to the product API, plus the per-record outcome types and the
// upload loop built on top of it.

use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::Config;
use crate::record::Record;
use crate::ui::Reporter;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Anything that can accept one product record and answer with an HTTP
/// status. `ApiClient` is the real implementation; tests use fakes.
pub trait ProductApi {
    /// Send one record. `Err` means the request never produced a response
    /// (connection refused, reset, timeout...).
    fn post_product(&self, record: &Record) -> Result<StatusCode>;
}

/// Holds a reqwest blocking client, the products endpoint and the
/// pre-built headers (content type and bearer token) sent with every call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl ApiClient {
    /// Build a client for `endpoint` authenticating with `token`.
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: endpoint.to_string(),
            headers: request_headers(token)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.endpoint, &config.token)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Headers shared by every upload request.
fn request_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .context("API token contains characters not allowed in a header")?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

impl ProductApi for ApiClient {
    fn post_product(&self, record: &Record) -> Result<StatusCode> {
        let res = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(record)
            .send()?;
        Ok(res.status())
    }
}

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Created,
    HttpFailure { status: u16 },
    TransportError { message: String },
}

impl UploadOutcome {
    /// Only `201 Created` counts as success; any other status is a failure
    /// and the response body is ignored.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::CREATED {
            UploadOutcome::Created
        } else {
            UploadOutcome::HttpFailure {
                status: status.as_u16(),
            }
        }
    }
}

/// A record's outcome tagged with its name. `Display` gives the line that
/// is printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub name: String,
    pub outcome: UploadOutcome,
}

impl ResultEntry {
    pub fn is_success(&self) -> bool {
        self.outcome == UploadOutcome::Created
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            UploadOutcome::Created => write!(f, "✅ Success: {}", self.name),
            UploadOutcome::HttpFailure { status } => {
                write!(f, "❌ Failed ({}): {}", status, self.name)
            }
            UploadOutcome::TransportError { message } => {
                write!(f, "❌ Error for {}: {}", self.name, message)
            }
        }
    }
}

/// POST one record and classify the result. Never fails: transport errors
/// become a `TransportError` outcome.
pub fn upload_one<A: ProductApi + ?Sized>(api: &A, record: &Record) -> ResultEntry {
    let outcome = match api.post_product(record) {
        Ok(status) => {
            debug!(name = %record.name, status = status.as_u16(), "upload response");
            UploadOutcome::from_status(status)
        }
        Err(e) => {
            warn!(name = %record.name, error = %e, "upload request failed");
            UploadOutcome::TransportError {
                message: e.to_string(),
            }
        }
    };
    ResultEntry {
        name: record.name.clone(),
        outcome,
    }
}

/// Upload `items` sequentially, one request each and in order, printing a
/// line per record. Returns the entries in the same order.
pub fn post_products<A, W>(
    api: &A,
    items: &[Record],
    category: &str,
    reporter: &mut Reporter<W>,
) -> io::Result<Vec<ResultEntry>>
where
    A: ProductApi + ?Sized,
    W: Write,
{
    reporter.processing(category)?;
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let entry = upload_one(api, item);
        reporter.entry(&entry)?;
        results.push(entry);
    }
    Ok(results)
}
