//! Grouped metric means, ranked descending.
//!
//! Groups a table by a label dimension and computes the per-group
//! arithmetic mean of one metric. Undefined metric values are excluded
//! from both the sum and the count; a group with no defined values has an
//! undefined mean rather than zero.

use std::collections::HashMap;

use quotient_core::types::{EnrichedRecord, Metric};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Mean of one metric within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    /// The group label (e.g. an industry name).
    pub label: String,

    /// Number of rows in the group.
    pub count: usize,

    /// Number of rows with a defined metric value.
    pub samples: usize,

    /// Arithmetic mean over the defined values; `None` when no row in
    /// the group had a defined value.
    pub mean: Option<f64>,
}

/// A ranked comparison of group means for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// The compared metric.
    pub metric: Metric,

    /// Groups sorted by mean descending (see [`industry_comparison`] for
    /// the exact ordering).
    pub groups: Vec<GroupMean>,
}

impl MetricComparison {
    /// Returns the top-ranked group, if any.
    #[must_use]
    pub fn top(&self) -> Option<&GroupMean> {
        self.groups.first()
    }

    /// Returns the group with the given label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&GroupMean> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Total number of rows across all groups.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|group| group.count).sum()
    }
}

/// Groups records by an arbitrary label and computes per-group means.
///
/// Ordering of the result follows the same rule as
/// [`industry_comparison`]: descending by mean, equal means by label
/// ascending, undefined means last (also by label).
#[must_use]
pub fn group_means<F>(records: &[EnrichedRecord], metric: Metric, classify: F) -> Vec<GroupMean>
where
    F: Fn(&EnrichedRecord) -> String,
{
    let mut grouped: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        grouped.entry(classify(record)).or_default().push(i);
    }

    let mut groups: Vec<GroupMean> = grouped
        .into_iter()
        .map(|(label, indices)| aggregate_group(label, &indices, records, metric))
        .collect();

    sort_by_mean(&mut groups);
    groups
}

/// Compares industries on one metric, ranked by mean descending.
///
/// Ordering: highest mean first; equal means break ties by label
/// ascending; groups whose mean is undefined come after every defined
/// mean, ordered by label ascending. The rule is fixed so callers get
/// deterministic rankings regardless of input order.
#[must_use]
pub fn industry_comparison(records: &[EnrichedRecord], metric: Metric) -> MetricComparison {
    MetricComparison {
        metric,
        groups: group_means(records, metric, |record| record.industry().to_string()),
    }
}

/// Resolves a caller-supplied metric name against the standard set.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownMetric`] when the name is not in the
/// standard set; aggregation cannot proceed meaningfully on a column that
/// does not exist.
pub fn resolve_metric(name: &str) -> AnalyticsResult<Metric> {
    Metric::parse(name).ok_or_else(|| AnalyticsError::unknown_metric(name.trim()))
}

fn aggregate_group(
    label: String,
    indices: &[usize],
    records: &[EnrichedRecord],
    metric: Metric,
) -> GroupMean {
    let mut sum = 0.0;
    let mut samples = 0usize;

    for &i in indices {
        if let Some(value) = records[i].metric(metric) {
            sum += value;
            samples += 1;
        }
    }

    let mean = if samples > 0 {
        Some(sum / samples as f64)
    } else {
        None
    };

    GroupMean {
        label,
        count: indices.len(),
        samples,
        mean,
    }
}

fn sort_by_mean(groups: &mut [GroupMean]) {
    groups.sort_by(|a, b| match (a.mean, b.mean) {
        // Means are finite by construction, so partial_cmp is total here.
        (Some(x), Some(y)) => y
            .partial_cmp(&x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.label.cmp(&b.label),
    });
}
