use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metric name to score, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityReport {
    values: BTreeMap<String, f64>,
}

impl QualityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-metric mean over several reports, e.g. drawings from different seeds.
    ///
    /// A metric missing from some reports is averaged over those that have it.
    pub fn mean(reports: &[QualityReport]) -> QualityReport {
        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for report in reports {
            for (name, value) in report.iter() {
                let entry = sums.entry(name).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
        sums.into_iter()
            .map(|(name, (sum, count))| (name.to_owned(), sum / count as f64))
            .collect()
    }
}

impl FromIterator<(String, f64)> for QualityReport {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
