//! Resolution orchestrator driving the per-coordinate fetch loop
//!
//! This module provides:
//! - Index-aligned (declaration, URL) resolution items
//! - The sequential fetch loop with per-item failure isolation
//! - Bounded concurrent resolution that still preserves input order
//! - Cooperative cancellation, checked before each item starts

use crate::domain::{CheckReport, FailureKind, LibraryDeclaration, ResolvedVersion, VersionResult};
use crate::progress::ProgressSink;
use crate::registry::MetadataFetcher;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// One unit of resolution work: a declaration and its metadata URL
#[derive(Debug, Clone)]
pub struct ResolutionItem {
    /// The declaration this item answers for
    pub declaration: LibraryDeclaration,
    /// The metadata document to query
    pub metadata_url: String,
}

impl ResolutionItem {
    /// Creates a new resolution item
    pub fn new(declaration: LibraryDeclaration, metadata_url: impl Into<String>) -> Self {
        Self {
            declaration,
            metadata_url: metadata_url.into(),
        }
    }

    fn into_result(self, resolved: ResolvedVersion) -> VersionResult {
        VersionResult::new(self.declaration, self.metadata_url, resolved)
    }
}

/// Orchestrator for resolving the latest version of every item
///
/// One failing lookup degrades its own row and never aborts the rest;
/// `resolve_all` itself cannot fail. Rows come back in input order
/// regardless of the concurrency level.
pub struct Resolver {
    fetcher: Arc<dyn MetadataFetcher>,
    concurrency: usize,
}

impl Resolver {
    /// Creates a sequential resolver
    pub fn new(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self {
            fetcher,
            concurrency: 1,
        }
    }

    /// Sets the maximum number of fetches in flight (builder pattern)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Resolves every item, emitting one progress tuple per item before
    /// its fetch begins
    ///
    /// The cancel flag is checked before each item is started; items seen
    /// after cancellation are reported as cancelled rows, so the report
    /// always carries one row per input item.
    pub async fn resolve_all(
        &self,
        items: Vec<ResolutionItem>,
        progress: Arc<dyn ProgressSink>,
        cancel: Arc<AtomicBool>,
    ) -> CheckReport {
        let total = items.len();

        let results = if self.concurrency <= 1 {
            self.resolve_sequential(items, total, &progress, &cancel)
                .await
        } else {
            self.resolve_bounded(items, total, Arc::clone(&progress), cancel)
                .await
        };
        progress.finished();

        let cancelled = results
            .iter()
            .any(|r| r.resolved == ResolvedVersion::Failed(FailureKind::Cancelled));
        CheckReport::new(results, cancelled)
    }

    async fn resolve_sequential(
        &self,
        items: Vec<ResolutionItem>,
        total: usize,
        progress: &Arc<dyn ProgressSink>,
        cancel: &AtomicBool,
    ) -> Vec<VersionResult> {
        let mut results = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            if cancel.load(Ordering::SeqCst) {
                results.push(item.into_result(ResolvedVersion::Failed(FailureKind::Cancelled)));
                continue;
            }

            progress.fetching(index + 1, total);
            let resolved = self.fetch_one(&item.metadata_url).await;
            results.push(item.into_result(resolved));
        }

        results
    }

    async fn resolve_bounded(
        &self,
        items: Vec<ResolutionItem>,
        total: usize,
        progress: Arc<dyn ProgressSink>,
        cancel: Arc<AtomicBool>,
    ) -> Vec<VersionResult> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let started = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::with_capacity(total);

        for item in items {
            let semaphore = Arc::clone(&semaphore);
            let fetcher = Arc::clone(&self.fetcher);
            let progress = Arc::clone(&progress);
            let cancel = Arc::clone(&cancel);
            let started = Arc::clone(&started);

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.unwrap();

                if cancel.load(Ordering::SeqCst) {
                    return item.into_result(ResolvedVersion::Failed(FailureKind::Cancelled));
                }

                let current = started.fetch_add(1, Ordering::SeqCst) + 1;
                progress.fetching(current, total);

                let resolved = match fetcher.fetch_latest(&item.metadata_url).await {
                    Ok(version) => ResolvedVersion::Found(version),
                    Err(err) => ResolvedVersion::Failed(FailureKind::from(&err)),
                };
                item.into_result(resolved)
            }));
        }

        // Joining in spawn order keeps results in original input order
        let mut results = Vec::with_capacity(total);
        for handle in handles {
            results.push(handle.await.expect("resolution task panicked"));
        }
        results
    }

    async fn fetch_one(&self, url: &str) -> ResolvedVersion {
        match self.fetcher.fetch_latest(url).await {
            Ok(version) => ResolvedVersion::Found(version),
            Err(err) => ResolvedVersion::Failed(FailureKind::from(&err)),
        }
    }
}
