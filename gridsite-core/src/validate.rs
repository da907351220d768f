//! Validation and cleaning of raw node tables.
//!
//! Rows missing a critical field are dropped, later duplicates of a node
//! identifier are dropped, remaining numeric gaps are filled with column
//! medians, and every value is clipped into its domain.

use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::column::{median, take};
use crate::{DataError, Metric, NodeMetrics, NodeTable, RawNodeTable, StateCode, is_non_rto};

/// What validation did to a raw table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationReport {
    /// Rows in the raw table.
    pub total_rows: usize,
    /// Rows dropped because a critical field was missing or non-finite.
    pub dropped_missing_critical: usize,
    /// Rows dropped because an earlier row had the same identifier.
    pub dropped_duplicates: usize,
    /// Cells filled by imputation, per metric. Metrics with none are absent.
    pub imputed: BTreeMap<Metric, usize>,
    /// Cells moved into their domain, per metric. Metrics with none are absent.
    pub clipped: BTreeMap<Metric, usize>,
    /// Rows in the validated table.
    pub retained: usize,
}

impl ValidationReport {
    /// Rows removed for any reason.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped_missing_critical + self.dropped_duplicates
    }
}

/// Validate and clean a raw node table.
///
/// Non-finite numbers count as missing. Identifiers, counties and market
/// labels are trimmed; states are normalised to upper-case codes, with full
/// state names mapped to their code.
///
/// # Errors
/// - [`DataError::InconsistentColumns`] when the raw columns differ in length.
/// - [`DataError::MissingColumns`] when the table has rows but a critical
///   column has no usable value in any of them.
/// - [`DataError::NoValidData`] when no row survives.
pub fn validate_nodes(raw: &RawNodeTable) -> Result<(NodeTable, ValidationReport), DataError> {
    raw.check_shape()?;
    let total_rows = raw.len();
    let cells = raw.metrics.map_ref(|_, column| finite_cells(column));
    check_critical_columns(raw, &cells)?;

    let complete = complete_rows(raw, &cells);
    let dropped_missing_critical = complete.iter().filter(|keep| !**keep).count();
    let (mask, dropped_duplicates) = first_occurrences(&raw.ids, &complete);
    let retained = total_rows - dropped_missing_critical - dropped_duplicates;
    if dropped_missing_critical > 0 {
        warn!("Dropped {dropped_missing_critical} of {total_rows} nodes missing critical fields");
    }
    if dropped_duplicates > 0 {
        warn!("Dropped {dropped_duplicates} nodes with duplicate identifiers");
    }
    if retained == 0 {
        return Err(DataError::NoValidData {
            total_rows,
            dropped: total_rows,
        });
    }

    let mut imputed = BTreeMap::new();
    let mut clipped = BTreeMap::new();
    let metrics = cells.map_ref(|metric, column| {
        let (filled, gaps) = impute(metric, take(column, &mask));
        if gaps > 0 {
            imputed.insert(metric, gaps);
        }
        let (clean, clips) = clip(metric, filled);
        if clips > 0 {
            clipped.insert(metric, clips);
        }
        clean
    });

    let table = NodeTable {
        ids: take(&raw.ids, &mask)
            .into_iter()
            .flatten()
            .map(|id| id.trim().to_owned())
            .collect(),
        states: take(&raw.states, &mask)
            .into_iter()
            .flatten()
            .map(|state| normalise_state(&state))
            .collect(),
        counties: trimmed_labels(&raw.counties, &mask),
        isos: trimmed_labels(&raw.isos, &mask),
        metrics,
    };
    debug!(
        "Validated node table: {retained} of {total_rows} rows retained, {} metrics imputed, {} metrics clipped",
        imputed.len(),
        clipped.len()
    );
    let report = ValidationReport {
        total_rows,
        dropped_missing_critical,
        dropped_duplicates,
        imputed,
        clipped,
        retained,
    };
    Ok((table, report))
}

fn finite_cells(column: &[Option<f64>]) -> Vec<Option<f64>> {
    column
        .iter()
        .map(|cell| cell.filter(|value| value.is_finite()))
        .collect()
}

fn has_text(cell: Option<&String>) -> bool {
    cell.is_some_and(|text| !text.trim().is_empty())
}

fn check_critical_columns(
    raw: &RawNodeTable,
    cells: &NodeMetrics<Vec<Option<f64>>>,
) -> Result<(), DataError> {
    if raw.is_empty() {
        return Ok(());
    }
    let mut columns = Vec::new();
    if !raw.ids.iter().any(|id| has_text(id.as_ref())) {
        columns.push("node");
    }
    if !raw.states.iter().any(|state| has_text(state.as_ref())) {
        columns.push("state");
    }
    columns.extend(
        Metric::ALL
            .into_iter()
            .filter(|metric| metric.is_critical())
            .filter(|metric| cells.get(*metric).iter().all(Option::is_none))
            .map(Metric::as_str),
    );
    if columns.is_empty() {
        Ok(())
    } else {
        Err(DataError::MissingColumns { columns })
    }
}

fn complete_rows(raw: &RawNodeTable, cells: &NodeMetrics<Vec<Option<f64>>>) -> Vec<bool> {
    let mut complete: Vec<bool> = raw
        .ids
        .iter()
        .zip(&raw.states)
        .map(|(id, state)| has_text(id.as_ref()) && has_text(state.as_ref()))
        .collect();
    for metric in Metric::ALL.into_iter().filter(|metric| metric.is_critical()) {
        for (keep, cell) in complete.iter_mut().zip(cells.get(metric)) {
            *keep &= cell.is_some();
        }
    }
    complete
}

/// Mask keeping complete rows whose identifier has not been seen before.
fn first_occurrences(ids: &[Option<String>], complete: &[bool]) -> (Vec<bool>, usize) {
    let mut seen = HashSet::new();
    let mut duplicates = 0_usize;
    let mask = ids
        .iter()
        .zip(complete)
        .map(|(id, keep)| {
            if !keep {
                return false;
            }
            let fresh = id.as_deref().is_some_and(|text| seen.insert(text.trim()));
            if !fresh {
                duplicates += 1;
            }
            fresh
        })
        .collect();
    (mask, duplicates)
}

/// Fill gaps with the median of the present values.
///
/// The price-variance median ignores non-RTO sentinels so a gap is never
/// imputed from a mix of market and non-market nodes.
fn impute(metric: Metric, column: Vec<Option<f64>>) -> (Vec<f64>, usize) {
    let gaps = column.iter().filter(|cell| cell.is_none()).count();
    if gaps == 0 {
        return (column.into_iter().flatten().collect(), 0);
    }
    let present: Vec<f64> = column
        .iter()
        .flatten()
        .copied()
        .filter(|value| metric != Metric::PriceVariance || !is_non_rto(*value))
        .collect();
    let fill = median(&present).unwrap_or_else(|| {
        warn!(
            "Column {metric} has no usable values; imputing {}",
            metric.fallback()
        );
        metric.fallback()
    });
    let filled = column
        .into_iter()
        .map(|cell| cell.unwrap_or(fill))
        .collect();
    (filled, gaps)
}

fn clip(metric: Metric, column: Vec<f64>) -> (Vec<f64>, usize) {
    let mut clips = 0_usize;
    let clean = column
        .into_iter()
        .map(|value| {
            let bounded = metric.clip(value);
            if bounded.to_bits() != value.to_bits() {
                clips += 1;
            }
            bounded
        })
        .collect();
    (clean, clips)
}

fn normalise_state(state: &str) -> String {
    state.parse::<StateCode>().map_or_else(
        |_| state.trim().to_ascii_uppercase(),
        |code| code.as_str().to_owned(),
    )
}

fn trimmed_labels(column: &[Option<String>], mask: &[bool]) -> Vec<String> {
    take(column, mask)
        .into_iter()
        .map(|label| label.map(|text| text.trim().to_owned()).unwrap_or_default())
        .collect()
}
