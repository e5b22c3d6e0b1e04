//! Basic metrics instrumentation for tracking lookup activity.
//!
//! Provides counters and duration tracking for queries, contact panels and
//! the embedding cache.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the session and the strategies.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of lookups served
    queries_total: Arc<AtomicU64>,

    /// Lookups that found no answer
    empty_results_total: Arc<AtomicU64>,

    /// Total time spent ranking, in milliseconds
    query_duration_total_ms: Arc<AtomicU64>,

    /// Lookups that showed a contact panel
    contact_panels_total: Arc<AtomicU64>,

    /// Corpus vector lists served from the persistent cache
    cache_hits_total: Arc<AtomicU64>,

    /// Corpus vector lists that had to be recomputed
    cache_misses_total: Arc<AtomicU64>,

    /// Corpus items sent through the embedding backend
    items_embedded_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            queries_total: Arc::new(AtomicU64::new(0)),
            empty_results_total: Arc::new(AtomicU64::new(0)),
            query_duration_total_ms: Arc::new(AtomicU64::new(0)),
            contact_panels_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            items_embedded_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a served lookup with its duration.
    pub fn record_query(&self, duration: Duration) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
        self.query_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a lookup without an answer.
    pub fn record_empty_result(&self) {
        self.empty_results_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that showed contacts.
    pub fn record_contact_panel(&self) {
        self.contact_panels_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a persistent-cache hit.
    pub fn record_cache_hit(&self) {
        self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a persistent-cache miss.
    pub fn record_cache_miss(&self) {
        self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record corpus items embedded.
    pub fn record_items_embedded(&self, count: usize) {
        self.items_embedded_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn queries_total(&self) -> u64 {
        self.queries_total.load(Ordering::Relaxed)
    }

    pub fn empty_results_total(&self) -> u64 {
        self.empty_results_total.load(Ordering::Relaxed)
    }

    pub fn query_duration_total_ms(&self) -> u64 {
        self.query_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average lookup duration in milliseconds.
    pub fn query_duration_avg_ms(&self) -> f64 {
        let total = self.query_duration_total_ms.load(Ordering::Relaxed);
        let count = self.queries_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn contact_panels_total(&self) -> u64 {
        self.contact_panels_total.load(Ordering::Relaxed)
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    pub fn items_embedded_total(&self) -> u64 {
        self.items_embedded_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.queries_total.store(0, Ordering::Relaxed);
        self.empty_results_total.store(0, Ordering::Relaxed);
        self.query_duration_total_ms.store(0, Ordering::Relaxed);
        self.contact_panels_total.store(0, Ordering::Relaxed);
        self.cache_hits_total.store(0, Ordering::Relaxed);
        self.cache_misses_total.store(0, Ordering::Relaxed);
        self.items_embedded_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            queries_total: self.queries_total(),
            empty_results_total: self.empty_results_total(),
            query_duration_total_ms: self.query_duration_total_ms(),
            query_duration_avg_ms: self.query_duration_avg_ms(),
            contact_panels_total: self.contact_panels_total(),
            cache_hits_total: self.cache_hits_total(),
            cache_misses_total: self.cache_misses_total(),
            items_embedded_total: self.items_embedded_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub queries_total: u64,
    pub empty_results_total: u64,
    pub query_duration_total_ms: u64,
    pub query_duration_avg_ms: f64,
    pub contact_panels_total: u64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
    pub items_embedded_total: u64,
}

/// Helper for timing lookups.
pub struct QueryTimer {
    start: Instant,
    metrics: Metrics,
}

impl QueryTimer {
    /// Start timing a lookup.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_query(self.start.elapsed());
    }

    /// Complete the timing and record the lookup as empty.
    pub fn complete_empty(self) {
        self.metrics.record_query(self.start.elapsed());
        self.metrics.record_empty_result();
    }
}
