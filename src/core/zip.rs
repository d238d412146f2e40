//! ZIP code resolution against a public postal-code API.
//!
//! Lookups go through [`ZipResolver`]; callers use [`resolve_zip`], which
//! never fails: any problem comes back as [`ZipOutcome::Unresolved`] so the
//! user can simply try again.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::zip::{ZipInfo, is_valid_zip};
use chrono::Utc;
use moka::sync::Cache;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::time::Duration;

pub const DEFAULT_CACHE_CAPACITY: u64 = 1000;

pub trait ZipResolver {
    /// `LookupNotFound` for unknown codes, `LookupTransport` for anything else.
    fn lookup(&self, code: &str) -> AppResult<ZipInfo>;
}

/// Result of a lookup as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipOutcome {
    Resolved(ZipInfo),
    Unresolved(String),
}

/// Run a lookup, folding every failure into `Unresolved`.
pub fn resolve_zip(resolver: &dyn ZipResolver, code: &str) -> ZipOutcome {
    if !is_valid_zip(code) {
        return ZipOutcome::Unresolved(format!("'{code}' is not a 5-digit ZIP code"));
    }

    match resolver.lookup(code) {
        Ok(info) => ZipOutcome::Resolved(info),
        Err(e) => {
            tracing::warn!(zip = code, error = %e, "zip lookup unresolved");
            ZipOutcome::Unresolved(e.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    country: String,
    places: Vec<ApiPlace>,
}

#[derive(Debug, Deserialize)]
struct ApiPlace {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
}

/// Parse a zippopotam.us response body.
pub fn parse_response(body: &str) -> AppResult<ZipInfo> {
    let resp: ApiResponse = serde_json::from_str(body)
        .map_err(|e| AppError::LookupTransport(format!("malformed response: {e}")))?;

    let state = resp
        .places
        .first()
        .map(|p| p.state_abbreviation.clone())
        .ok_or_else(|| AppError::LookupTransport("response lists no places".into()))?;

    let cities: Vec<String> = resp
        .places
        .into_iter()
        .map(|p| p.place_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Ok(ZipInfo {
        country: resp.country,
        state,
        cities,
    })
}

/// Raw source of ZIP answers, `Ok(None)` for an unknown code.
pub trait ZipFetcher {
    fn fetch(&self, code: &str) -> AppResult<Option<ZipInfo>>;
}

/// zippopotam.us over HTTP.
pub struct HttpZipFetcher {
    client: Client,
    base_url: String,
}

impl HttpZipFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::LookupTransport(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl ZipFetcher for HttpZipFetcher {
    fn fetch(&self, code: &str) -> AppResult<Option<ZipInfo>> {
        let url = format!("{}/{}", self.base_url, code);
        tracing::debug!(%url, "zip lookup");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::LookupTransport(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => {
                let body = resp
                    .text()
                    .map_err(|e| AppError::LookupTransport(e.to_string()))?;
                parse_response(&body).map(Some)
            }
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(AppError::LookupTransport(format!("unexpected status {other}"))),
        }
    }
}

/// Resolver that remembers answers for `ttl`: in memory for the current run,
/// and in the workbook's `zip_cache` table across runs.
///
/// Found and not-found answers are cached; transport errors are not.
pub struct CachedZipResolver<F> {
    fetcher: F,
    memory: Cache<String, Option<ZipInfo>>,
    workbook: Option<DbPool>,
    ttl: Duration,
}

/// The resolver the CLI uses.
pub type ZippopotamResolver = CachedZipResolver<HttpZipFetcher>;

impl<F: ZipFetcher> CachedZipResolver<F> {
    /// Without a workbook only the in-memory layer is used.
    pub fn new(fetcher: F, ttl: Duration, workbook: Option<DbPool>) -> Self {
        let memory = Cache::builder()
            .max_capacity(DEFAULT_CACHE_CAPACITY)
            .time_to_live(ttl)
            .build();

        Self {
            fetcher,
            memory,
            workbook,
            ttl,
        }
    }

    fn ttl_secs(&self) -> i64 {
        i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)
    }

    fn remembered(&self, code: &str) -> Option<Option<ZipInfo>> {
        if let Some(answer) = self.memory.get(code) {
            tracing::debug!(zip = code, "zip cache hit (memory)");
            return Some(answer);
        }

        let pool = self.workbook.as_ref()?;
        match pool.zip_answer(code, Utc::now().timestamp(), self.ttl_secs()) {
            Ok(Some(answer)) => {
                tracing::debug!(zip = code, "zip cache hit (workbook)");
                self.memory.insert(code.to_string(), answer.clone());
                Some(answer)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(zip = code, error = %e, "zip cache read failed");
                None
            }
        }
    }

    fn remember(&self, code: &str, answer: &Option<ZipInfo>) {
        self.memory.insert(code.to_string(), answer.clone());

        if let Some(pool) = &self.workbook
            && let Err(e) = pool.store_zip_answer(code, answer.as_ref(), Utc::now().timestamp())
        {
            tracing::warn!(zip = code, error = %e, "zip cache write failed");
        }
    }
}

impl CachedZipResolver<HttpZipFetcher> {
    /// HTTP fetcher plus the configured workbook as the shared cache.
    /// A workbook that cannot be opened only disables the shared layer.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let fetcher = HttpZipFetcher::new(&cfg.zip_api_url, cfg.http_timeout())?;

        let workbook = match DbPool::open_initialized(&cfg.database) {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::debug!(error = %e, "zip cache limited to this run");
                None
            }
        };

        Ok(Self::new(fetcher, cfg.cache_ttl(), workbook))
    }
}

impl<F: ZipFetcher> ZipResolver for CachedZipResolver<F> {
    fn lookup(&self, code: &str) -> AppResult<ZipInfo> {
        let answer = match self.remembered(code) {
            Some(cached) => cached,
            None => {
                let fetched = self.fetcher.fetch(code)?;
                self.remember(code, &fetched);
                fetched
            }
        };

        answer.ok_or_else(|| AppError::LookupNotFound(format!("ZIP code {code}")))
    }
}
