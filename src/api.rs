//! Client for the guess validation endpoint.
//!
//! `GET {endpoint}/api/word?guess=<word>` answers with
//! `{ "success": bool, "result": "0x1xx" }`.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::wordle::{ParseResultError, ResultCode};

/// Default endpoint of the validation service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint accepted '{guess}' without a result")]
    MissingResult { guess: String },

    #[error("malformed result '{result}': {source}")]
    MalformedResult {
        result: String,
        source: ParseResultError,
    },

    #[error("result '{result}' has {got} letters, expected {expected}")]
    ResultLength {
        result: String,
        got: usize,
        expected: usize,
    },
}

/// Answer of the validation endpoint for one guess
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The word exists, with per-letter feedback
    Accepted(ResultCode),
    /// The endpoint refused the word, e.g. because it is not a real word
    Rejected,
}

#[derive(Deserialize, Debug)]
struct WordResponse {
    success: bool,
    #[serde(default)]
    result: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ValidationClient {
    /// HTTP client
    client: reqwest::Client,
    /// Base url, without trailing slash
    endpoint: String,
}

impl ValidationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use an already configured HTTP client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint for the feedback of `guess`.
    ///
    /// The body is decoded regardless of the HTTP status, a refusal is
    /// reported through `success`.
    pub async fn check(&self, guess: &str) -> Result<Verdict, ApiError> {
        let url = format!("{}/api/word", self.endpoint);
        debug!(%url, guess, "validating guess");

        let response = self
            .client
            .get(&url)
            .query(&[("guess", guess)])
            .send()
            .await?;
        let status = response.status();
        let body: WordResponse = response.json().await?;
        info!(guess, %status, success = body.success, "validation response");

        if !body.success {
            return Ok(Verdict::Rejected);
        }

        let result = body.result.ok_or_else(|| ApiError::MissingResult {
            guess: guess.to_string(),
        })?;
        let code: ResultCode = result
            .parse()
            .map_err(|source| ApiError::MalformedResult {
                result: result.clone(),
                source,
            })?;

        let expected = guess.chars().count();
        if code.len() != expected {
            return Err(ApiError::ResultLength {
                result,
                got: code.len(),
                expected,
            });
        }
        Ok(Verdict::Accepted(code))
    }
}
