use naturejournal::core::zip::{CachedZipResolver, ZipFetcher, ZipResolver};
use naturejournal::db::pool::DbPool;
use naturejournal::errors::{AppError, AppResult};
use naturejournal::models::zip::ZipInfo;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

const TTL: Duration = Duration::from_secs(300);

/// Counts every network-equivalent call.
#[derive(Clone)]
struct CountingFetcher {
    calls: Rc<Cell<usize>>,
}

impl CountingFetcher {
    fn new() -> Self {
        Self {
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl ZipFetcher for CountingFetcher {
    fn fetch(&self, code: &str) -> AppResult<Option<ZipInfo>> {
        self.calls.set(self.calls.get() + 1);
        match code {
            "94118" => Ok(Some(ZipInfo {
                country: "United States".into(),
                state: "CA".into(),
                cities: vec!["San Francisco".into()],
            })),
            "99999" => Ok(None),
            _ => Err(AppError::LookupTransport("connection refused".into())),
        }
    }
}

fn workbook_path(dir: &TempDir) -> String {
    dir.path().join("cache.sqlite").to_string_lossy().to_string()
}

/// A resolver as a fresh CLI run would build it.
fn fresh_run(path: &str, fetcher: &CountingFetcher) -> CachedZipResolver<CountingFetcher> {
    let pool = DbPool::open_initialized(path).unwrap();
    CachedZipResolver::new(fetcher.clone(), TTL, Some(pool))
}

#[test]
fn test_answer_survives_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_path(&dir);
    let fetcher = CountingFetcher::new();

    let first = fresh_run(&path, &fetcher).lookup("94118").unwrap();
    let second = fresh_run(&path, &fetcher).lookup("94118").unwrap();

    assert_eq!(first, second);
    assert_eq!(second.cities, vec!["San Francisco"]);
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn test_unknown_code_is_cached_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_path(&dir);
    let fetcher = CountingFetcher::new();

    for _ in 0..2 {
        assert!(matches!(
            fresh_run(&path, &fetcher).lookup("99999"),
            Err(AppError::LookupNotFound(_))
        ));
    }
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn test_transport_errors_are_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_path(&dir);
    let fetcher = CountingFetcher::new();

    let resolver = fresh_run(&path, &fetcher);
    assert!(resolver.lookup("10001").is_err());
    assert!(resolver.lookup("10001").is_err());
    assert!(fresh_run(&path, &fetcher).lookup("10001").is_err());
    assert_eq!(fetcher.calls.get(), 3);

    let pool = DbPool::open_initialized(&path).unwrap();
    assert_eq!(pool.zip_answer("10001", 0, i64::MAX).unwrap(), None);
}

#[test]
fn test_memory_layer_without_workbook() {
    let fetcher = CountingFetcher::new();
    let resolver = CachedZipResolver::new(fetcher.clone(), TTL, None);

    resolver.lookup("94118").unwrap();
    resolver.lookup("94118").unwrap();
    assert_eq!(fetcher.calls.get(), 1);

    // a second run without a workbook has nothing to reuse
    CachedZipResolver::new(fetcher.clone(), TTL, None)
        .lookup("94118")
        .unwrap();
    assert_eq!(fetcher.calls.get(), 2);
}

#[test]
fn test_stale_rows_are_ignored() {
    let pool = DbPool::in_memory().unwrap();
    let info = ZipInfo {
        country: "United States".into(),
        state: "NY".into(),
        cities: vec!["Manhattan".into(), "New York City".into()],
    };

    pool.store_zip_answer("10001", Some(&info), 1_000).unwrap();
    assert_eq!(pool.zip_answer("10001", 1_299, 300).unwrap(), Some(Some(info)));
    assert_eq!(pool.zip_answer("10001", 1_300, 300).unwrap(), None);

    pool.store_zip_answer("99999", None, 1_000).unwrap();
    assert_eq!(pool.zip_answer("99999", 1_010, 300).unwrap(), Some(None));
}

#[test]
fn test_stale_row_triggers_refetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_path(&dir);
    let fetcher = CountingFetcher::new();

    DbPool::open_initialized(&path)
        .unwrap()
        .store_zip_answer("94118", None, 0)
        .unwrap();

    let info = fresh_run(&path, &fetcher).lookup("94118").unwrap();
    assert_eq!(info.state, "CA");
    assert_eq!(fetcher.calls.get(), 1);
}
