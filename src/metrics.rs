// Placement metrics module
//
// Lightweight counters for how often each placement mode runs and how often
// it has to fall back to the vault root

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::models::PlacementMode;

/// Placement counters
///
/// Uses atomic operations so a policy shared across threads can record
/// without locks.
#[derive(Debug)]
pub struct Metrics {
    /// Resolutions in root-only mode
    pub root_only: AtomicU64,

    /// Resolutions in same-as-current mode
    pub same_as_current: AtomicU64,

    /// Resolutions in fixed-folder mode
    pub fixed_folder: AtomicU64,

    /// Resolutions in rule-based mode
    pub rule_based: AtomicU64,

    /// Resolutions that ended in the vault-root fallback
    pub fallbacks: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            root_only: AtomicU64::new(0),
            same_as_current: AtomicU64::new(0),
            fixed_folder: AtomicU64::new(0),
            rule_based: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record one resolution in `mode`
    pub fn record_resolution(&self, mode: PlacementMode) {
        let counter = match mode {
            PlacementMode::RootOnly => &self.root_only,
            PlacementMode::SameAsCurrent => &self.same_as_current,
            PlacementMode::FixedFolder => &self.fixed_folder,
            PlacementMode::RuleBased => &self.rule_based,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fallback to the vault root
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Total resolutions across all modes
    pub fn total_resolutions(&self) -> u64 {
        self.root_only.load(Ordering::Relaxed)
            + self.same_as_current.load(Ordering::Relaxed)
            + self.fixed_folder.load(Ordering::Relaxed)
            + self.rule_based.load(Ordering::Relaxed)
    }

    /// Fraction of resolutions that fell back, 0.0 when nothing ran yet
    pub fn fallback_rate(&self) -> f64 {
        let total = self.total_resolutions();
        if total > 0 {
            self.fallbacks.load(Ordering::Relaxed) as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Placement Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Resolutions: {} vault, {} current, {} folder, {} rules",
            self.root_only.load(Ordering::Relaxed),
            self.same_as_current.load(Ordering::Relaxed),
            self.fixed_folder.load(Ordering::Relaxed),
            self.rule_based.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Fallbacks: {} ({:.1}%)",
            self.fallbacks.load(Ordering::Relaxed),
            self.fallback_rate() * 100.0
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.total_resolutions(), 0);
        assert_eq!(metrics.fallbacks.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_resolution_per_mode() {
        let metrics = Metrics::new();

        metrics.record_resolution(PlacementMode::RootOnly);
        metrics.record_resolution(PlacementMode::RuleBased);
        metrics.record_resolution(PlacementMode::RuleBased);
        metrics.record_resolution(PlacementMode::FixedFolder);

        assert_eq!(metrics.root_only.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.rule_based.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.fixed_folder.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.same_as_current.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.total_resolutions(), 4);
    }

    #[test]
    fn test_fallback_rate() {
        let metrics = Metrics::new();
        assert_eq!(metrics.fallback_rate(), 0.0);

        for _ in 0..4 {
            metrics.record_resolution(PlacementMode::FixedFolder);
        }
        metrics.record_fallback();

        assert_eq!(metrics.fallback_rate(), 0.25);
    }
}
