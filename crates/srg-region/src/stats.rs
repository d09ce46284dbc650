//! Per-region running statistics
//!
//! Each labeled region keeps a committed-cell count and a running mean
//! intensity. The mean is maintained with the incremental update
//! `mean += (v - mean) / count`, which stays numerically stable for
//! regions of millions of cells where a running sum would drift.

/// Running statistics of one labeled region
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionStats {
    count: u64,
    mean: f64,
}

impl RegionStats {
    /// Fold one committed sample into the statistics.
    #[inline]
    pub fn add_sample(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// Number of committed cells.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current mean intensity. 0.0 before the first sample.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

/// Label-indexed registry of region statistics
///
/// Regions are created lazily the first time a label is observed in
/// the seed array and are never removed during a run. A region with a
/// zero count has never been registered.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: Vec<RegionStats>,
}

impl RegionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one seed cell for `label`.
    ///
    /// Called once per seed cell during setup; creates the region on
    /// first use.
    pub fn register_seed(&mut self, label: u32, value: f64) {
        self.slot(label).add_sample(value);
    }

    /// Record one grown cell for `label`.
    ///
    /// `label` must already be registered; every proposed label
    /// originates from a seeded region, so an unregistered label here
    /// is an engine bug.
    pub fn commit(&mut self, label: u32, value: f64) {
        debug_assert!(self.is_registered(label));
        self.slot(label).add_sample(value);
    }

    /// Current mean intensity of `label`, or `None` if the label has
    /// never been registered.
    pub fn mean(&self, label: u32) -> Option<f64> {
        self.regions
            .get(label as usize)
            .filter(|r| r.count > 0)
            .map(|r| r.mean)
    }

    /// Number of committed cells for `label` (0 if unregistered).
    pub fn count(&self, label: u32) -> u64 {
        self.regions
            .get(label as usize)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    /// Whether `label` has been observed at least once.
    pub fn is_registered(&self, label: u32) -> bool {
        self.count(label) > 0
    }

    /// Labels registered so far, ascending.
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.count > 0)
            .map(|(i, _)| i as u32)
    }

    fn slot(&mut self, label: u32) -> &mut RegionStats {
        let idx = label as usize;
        if idx >= self.regions.len() {
            self.regions.resize(idx + 1, RegionStats::default());
        }
        &mut self.regions[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_mean() {
        let mut stats = RegionStats::default();
        for v in [10.0, 20.0, 30.0] {
            stats.add_sample(v);
        }
        assert_eq!(stats.count(), 3);
        assert!((stats.mean() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_incremental_mean_stability() {
        // A large region of identical samples must not drift.
        let mut stats = RegionStats::default();
        for _ in 0..1_000_000 {
            stats.add_sample(123.456);
        }
        assert!((stats.mean() - 123.456).abs() < 1e-9);
    }

    #[test]
    fn test_registry_lazy_creation() {
        let mut reg = RegionRegistry::new();
        assert!(!reg.is_registered(3));
        assert_eq!(reg.mean(3), None);

        reg.register_seed(3, 50.0);
        assert!(reg.is_registered(3));
        assert_eq!(reg.mean(3), Some(50.0));
        assert_eq!(reg.count(3), 1);

        // Labels in between stay unregistered.
        assert!(!reg.is_registered(1));
        assert!(!reg.is_registered(2));
    }

    #[test]
    fn test_registry_commit_updates_mean() {
        let mut reg = RegionRegistry::new();
        reg.register_seed(1, 0.0);
        reg.commit(1, 10.0);
        assert_eq!(reg.count(1), 2);
        assert!((reg.mean(1).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_registry_labels() {
        let mut reg = RegionRegistry::new();
        reg.register_seed(5, 1.0);
        reg.register_seed(2, 1.0);
        let labels: Vec<u32> = reg.labels().collect();
        assert_eq!(labels, vec![2, 5]);
    }
}
