//! Feature-frequency aggregation for feature-analysis mode.
//!
//! Two views over the same upstream counts:
//!   - the combination matrix, a symmetric pairwise co-occurrence table
//!     rendered as a heatmap
//!   - one ranked table per slot, answering how often a feature was picked
//!     as "feature #k" specifically
//!
//! Both are kept; they are not interchangeable.

use crate::errors::{ReportError, ReportResult};
use crate::model::FeatureSummary;

/// One line of a per-slot ranking.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedFeature {
    pub name: String,
    pub frequency: f64,
}

/// Validated view over a `FeatureSummary`. Never mutates the summary.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAggregator<'a> {
    summary: &'a FeatureSummary,
    slots: usize,
}

impl<'a> FrequencyAggregator<'a> {
    /// Checks that every feature has the same number of frequency slots and
    /// that the combination matrix is N x N.
    pub fn new(summary: &'a FeatureSummary) -> ReportResult<Self> {
        let slots = summary
            .features
            .first()
            .map(|f| f.frequencies.len())
            .unwrap_or(0);

        for feature in &summary.features {
            if feature.frequencies.len() != slots {
                return Err(ReportError::FrequencyLength {
                    feature: feature.name.clone(),
                    expected: slots,
                    found: feature.frequencies.len(),
                });
            }
        }

        let n = summary.features.len();
        let rows = summary.combinations.len();
        if rows != n {
            return Err(ReportError::MatrixShape {
                expected: n,
                rows,
                row: 0,
                found: summary.combinations.first().map(Vec::len).unwrap_or(0),
            });
        }
        if let Some((row, cols)) = summary
            .combinations
            .iter()
            .enumerate()
            .find(|(_, cols)| cols.len() != n)
        {
            return Err(ReportError::MatrixShape {
                expected: n,
                rows,
                row,
                found: cols.len(),
            });
        }

        Ok(Self { summary, slots })
    }

    /// Number of per-slot tables, taken from the first feature.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Feature names in model order, i.e. the heatmap axis labels.
    pub fn feature_names(&self) -> Vec<String> {
        self.summary.features.iter().map(|f| f.name.clone()).collect()
    }

    /// Pass-through; the matrix is produced upstream.
    #[inline]
    pub fn combination_matrix(&self) -> &'a [Vec<f64>] {
        &self.summary.combinations
    }

    /// Features ranked by `frequencies[slot]`, descending. Stable on ties.
    pub fn rank_by_slot(&self, slot: usize) -> ReportResult<Vec<RankedFeature>> {
        if slot >= self.slots {
            return Err(ReportError::SlotOutOfRange {
                slot,
                slots: self.slots,
            });
        }
        let mut ranked: Vec<RankedFeature> = self
            .summary
            .features
            .iter()
            .map(|f| RankedFeature {
                name: f.name.clone(),
                frequency: f.frequencies[slot],
            })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        Ok(ranked)
    }

    /// One ranking per slot, slot order.
    pub fn ranked_tables(&self) -> ReportResult<Vec<Vec<RankedFeature>>> {
        (0..self.slots).map(|slot| self.rank_by_slot(slot)).collect()
    }
}
