//! Quality filtering, ordering, and assembly of ranked records.

use std::cmp::Ordering;

use gridsite_core::column::value_at;
use gridsite_core::{NodeTable, ScoreRecord};

use crate::ComponentScores;

/// Components checked by the quality filter.
const QUALITY_COMPONENTS: usize = 4;

/// Rows where at least one of cost, queue, emissions or policy reaches
/// `threshold`. With no threshold every row passes.
#[must_use]
pub fn quality_mask(scores: &ComponentScores, threshold: Option<f64>) -> Vec<bool> {
    let Some(floor) = threshold else {
        return vec![true; scores.len()];
    };
    let columns: [&[f64]; QUALITY_COMPONENTS] =
        [&scores.cost, &scores.queue, &scores.emissions, &scores.policy];
    let mut mask = vec![false; scores.len()];
    for column in columns {
        for (keep, score) in mask.iter_mut().zip(column) {
            *keep |= *score >= floor;
        }
    }
    mask
}

/// Everything computed for one candidate set, ready to rank.
pub(crate) struct ScoredCandidates<'a> {
    pub(crate) table: &'a NodeTable,
    pub(crate) scores: ComponentScores,
    pub(crate) effective_variability: Vec<f64>,
    pub(crate) baseline: Vec<f64>,
    pub(crate) scenario: Vec<f64>,
}

impl ScoredCandidates<'_> {
    /// Sort `rows` by `primary` descending, then `secondary` descending, then
    /// node identifier ascending.
    fn order(&self, rows: &[usize], primary: &[f64], secondary: &[f64]) -> Vec<usize> {
        let ids = self.table.ids();
        let mut ordered = rows.to_vec();
        ordered.sort_by(|&left, &right| {
            descending(primary, left, right)
                .then_with(|| descending(secondary, left, right))
                .then_with(|| ids.get(left).cmp(&ids.get(right)))
        });
        ordered
    }

    /// Rank the rows selected by `eligible` and keep the best `top_n`.
    pub(crate) fn rank(&self, eligible: &[bool], top_n: usize) -> Vec<ScoreRecord> {
        let rows: Vec<usize> = eligible
            .iter()
            .enumerate()
            .filter_map(|(row, keep)| keep.then_some(row))
            .collect();
        let by_scenario = self.order(&rows, &self.scenario, &self.baseline);
        let by_baseline = self.order(&rows, &self.baseline, &self.scenario);
        let mut baseline_rank = vec![0_usize; self.table.len()];
        for (position, row) in by_baseline.into_iter().enumerate() {
            if let Some(slot) = baseline_rank.get_mut(row) {
                *slot = position + 1;
            }
        }
        by_scenario
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(position, row)| {
                let rank_baseline = baseline_rank.get(row).copied().unwrap_or_default();
                self.record(row, position + 1, rank_baseline)
            })
            .collect()
    }

    fn record(&self, row: usize, rank_scenario: usize, rank_baseline: usize) -> ScoreRecord {
        let text = |column: &[String]| column.get(row).cloned().unwrap_or_default();
        ScoreRecord {
            node: text(self.table.ids()),
            state: text(self.table.states()),
            county: text(self.table.counties()),
            iso: text(self.table.isos()),
            cost_score: value_at(&self.scores.cost, row),
            land_score: value_at(&self.scores.land, row),
            emissions_score: value_at(&self.scores.emissions, row),
            policy_score: value_at(&self.scores.policy, row),
            queue_score: value_at(&self.scores.queue, row),
            price_variability_penalty_score: value_at(&self.scores.variability, row),
            effective_price_variability_penalty_score: value_at(&self.effective_variability, row),
            score_baseline: value_at(&self.baseline, row),
            score_scenario: value_at(&self.scenario, row),
            rank_baseline,
            rank_scenario,
            metrics: self.table.row_metrics(row),
        }
    }
}

fn descending(column: &[f64], left: usize, right: usize) -> Ordering {
    value_at(column, right).total_cmp(&value_at(column, left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scores(cost: f64, queue: f64, emissions: f64, policy: f64) -> ComponentScores {
        ComponentScores {
            cost: vec![cost],
            land: vec![1.0],
            emissions: vec![emissions],
            policy: vec![policy],
            queue: vec![queue],
            variability: vec![1.0],
        }
    }

    #[rstest]
    #[case(scores(0.1, 0.1, 0.1, 0.1), Some(0.3), false)]
    #[case(scores(0.1, 0.3, 0.1, 0.1), Some(0.3), true)]
    #[case(scores(0.1, 0.1, 0.1, 0.9), Some(0.3), true)]
    #[case(scores(0.0, 0.0, 0.0, 0.0), None, true)]
    fn quality_mask_needs_one_strong_component(
        #[case] input: ComponentScores,
        #[case] threshold: Option<f64>,
        #[case] expected: bool,
    ) {
        assert_eq!(quality_mask(&input, threshold), vec![expected]);
    }

    #[rstest]
    fn land_and_variability_do_not_rescue_weak_nodes() {
        let weak = scores(0.2, 0.2, 0.2, 0.2);
        assert_eq!(quality_mask(&weak, Some(0.3)), vec![false]);
    }
}
