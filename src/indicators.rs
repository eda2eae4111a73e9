//! Crossing signals over analysis-record columns.
//!
//! Series are `&[Option<f64>]` so that bars without trades (`None`) flow
//! straight through; any comparison involving `None` is `false`.

use crate::domain::candlestick::AnalysisRecord;

/// A numeric column of [`AnalysisRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisColumn {
    Open,
    High,
    Low,
    Close,
    Volume,
    Ask,
    Bid,
    Spread,
    Midprice,
    OpenInterest,
}

impl AnalysisColumn {
    pub fn get(&self, record: &AnalysisRecord) -> Option<f64> {
        match self {
            AnalysisColumn::Open => record.open,
            AnalysisColumn::High => record.high,
            AnalysisColumn::Low => record.low,
            AnalysisColumn::Close => record.close,
            AnalysisColumn::Volume => Some(record.volume),
            AnalysisColumn::Ask => Some(record.ask),
            AnalysisColumn::Bid => Some(record.bid),
            AnalysisColumn::Spread => Some(record.spread),
            AnalysisColumn::Midprice => Some(record.midprice),
            AnalysisColumn::OpenInterest => Some(record.open_interest),
        }
    }
}

/// Extract one column, in record order.
pub fn column(records: &[AnalysisRecord], col: AnalysisColumn) -> Vec<Option<f64>> {
    records.iter().map(|r| col.get(r)).collect()
}

/// A flat line of `len` points, for crossing against a threshold.
pub fn constant(value: f64, len: usize) -> Vec<Option<f64>> {
    vec![Some(value); len]
}

/// `true` at `i` when `a[i] > b[i]` and `a[i - 1] <= b[i]`.
///
/// Both sides of the test use the current `b`, so the previous `a` is held
/// against today's line. The result has `a.len()` elements; index 0 and
/// indices past the end of `b` are always `false`.
pub fn crossover(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<bool> {
    crossing(a, b, |cur_a, cur_b, prev_a| cur_a > cur_b && prev_a <= cur_b)
}

/// `true` at `i` when `a[i] < b[i]` and `a[i - 1] >= b[i]`.
pub fn crossunder(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<bool> {
    crossing(a, b, |cur_a, cur_b, prev_a| cur_a < cur_b && prev_a >= cur_b)
}

fn crossing<F>(a: &[Option<f64>], b: &[Option<f64>], test: F) -> Vec<bool>
where
    F: Fn(f64, f64, f64) -> bool,
{
    let at = |s: &[Option<f64>], i: usize| s.get(i).copied().flatten();

    (0..a.len())
        .map(|i| {
            if i == 0 {
                return false;
            }
            match (at(a, i), at(b, i), at(a, i - 1)) {
                (Some(ca), Some(cb), Some(pa)) => test(ca, cb, pa),
                _ => false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candlestick::test_support::{quiet_candlestick, traded_candlestick};
    use crate::domain::candlestick::{analyze, AnalysisRecord};
    use crate::shared::PeriodInterval;

    fn series(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_crossover_against_constant() {
        let close = series(&[0.40, 0.45, 0.55, 0.60, 0.48]);
        let signal = crossover(&close, &constant(0.50, close.len()));
        assert_eq!(signal, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_crossunder_against_constant() {
        let close = series(&[0.60, 0.55, 0.45, 0.40, 0.52]);
        let signal = crossunder(&close, &constant(0.50, close.len()));
        assert_eq!(signal, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_touching_then_crossing_counts() {
        let a = series(&[0.50, 0.51]);
        let b = constant(0.50, 2);
        assert_eq!(crossover(&a, &b), vec![false, true]);
        assert_eq!(crossunder(&series(&[0.50, 0.49]), &b), vec![false, true]);
    }

    #[test]
    fn test_none_never_signals() {
        let a = vec![Some(0.40), None, Some(0.60), Some(0.70)];
        let b = constant(0.50, 4);
        // Index 2 compares against the missing bar at index 1.
        assert_eq!(crossover(&a, &b), vec![false, false, false, false]);
    }

    #[test]
    fn test_two_series_cross() {
        let fast = series(&[1.0, 2.0, 3.0, 2.0]);
        let slow = series(&[2.0, 2.5, 2.5, 2.5]);
        assert_eq!(crossover(&fast, &slow), vec![false, false, true, false]);
        assert_eq!(crossunder(&fast, &slow), vec![false, false, false, true]);

        // The line drops under both bars of `a`: a[0] = 1.0 is already above
        // b[1] = 0.5, so this is not a fresh cross.
        let a = series(&[1.0, 3.0]);
        let b = series(&[2.0, 0.5]);
        assert_eq!(crossover(&a, &b), vec![false, false]);

        // The line rises over both bars: a[0] = 3.0 is already below b[1].
        let a = series(&[3.0, 1.0]);
        let b = series(&[2.0, 5.0]);
        assert_eq!(crossunder(&a, &b), vec![false, false]);

        // a[0] sits at-or-below the current line, then a[1] clears it.
        let a = series(&[1.0, 3.0]);
        let b = series(&[0.5, 2.0]);
        assert_eq!(crossover(&a, &b), vec![false, true]);
    }

    #[test]
    fn test_shorter_b_is_false_past_its_end() {
        let a = series(&[0.1, 0.9, 0.1, 0.9]);
        let b = constant(0.5, 2);
        assert_eq!(crossover(&a, &b), vec![false, true, false, false]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(crossover(&[], &[]).is_empty());
        assert!(constant(1.0, 0).is_empty());
    }

    #[test]
    fn test_column_extraction() {
        let records: Vec<AnalysisRecord> = analyze(
            vec![traded_candlestick(1_700_003_600), quiet_candlestick(1_700_007_200)],
            PeriodInterval::Hour,
        )
        .unwrap();

        assert_eq!(column(&records, AnalysisColumn::Close), vec![Some(0.44), None]);
        assert_eq!(
            column(&records, AnalysisColumn::Spread),
            vec![Some(0.03), Some(0.03)]
        );
        assert_eq!(
            column(&records, AnalysisColumn::Volume),
            vec![Some(120.5), Some(0.0)]
        );
    }
}
