//! Value axis under the bars.
//!
//! The endpoints are rounded to readable numbers before six evenly spaced
//! ticks are placed:
//!
//! * the smallest value is rounded **down** at its leading digit
//!   (361 -> 300),
//! * the largest value is rounded **up** past its second digit
//!   (980 -> 990, 1000 -> 1010).
//!
//! Tick columns use the same scale as bar widths (`150 * value / max`), so a
//! `+` sits exactly where a bar of that value would end. Column 0 always
//! stands for the value 0.

use std::fmt::Write;

use crate::core::{
    constants::{AXIS_FILL, AXIS_TAIL, FULL_SCALE_WIDTH, TICK_GLYPH, TICK_INTERVALS},
    scale::{decimal_digits, pow10, round_down, round_half_up, round_up_past},
    snapshot::Snapshot,
};

/// A labeled mark on the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub value: i128,
    pub column: usize,
}

/// Ticks with strictly increasing columns plus the rendered line width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisPlan {
    ticks: Vec<Tick>,
    total_width: usize,
}

/// Plan the axis for a ranked snapshot spanning `min..=max`.
///
/// Negative values are treated as 0. When the span collapses (all values
/// equal, or too close to fit five steps) a flat axis with a single tick at
/// full scale is produced.
#[must_use]
pub fn plan_axis(min: i64, max: i64) -> AxisPlan {
    let lo = min.max(0).unsigned_abs();
    let hi = max.max(0).unsigned_abs();
    if lo >= hi {
        return AxisPlan::flat(max);
    }

    let max_round_to = pow10(decimal_digits(hi).saturating_sub(2));
    let min_round_to = pow10(decimal_digits(lo) - 1);
    let rounded_min = round_down(lo, min_round_to);
    let rounded_max = round_up_past(hi, max_round_to);

    let step = (rounded_max - rounded_min) / TICK_INTERVALS;
    if step == 0 {
        return AxisPlan::flat(max);
    }

    let mut ticks: Vec<Tick> = Vec::with_capacity(7);
    for i in 0..=TICK_INTERVALS {
        let value = rounded_min + i * step;
        let column = column_of(value, rounded_max);
        // column 0 is reserved for the origin
        if column == 0 && value != 0 {
            continue;
        }
        let tick = Tick {
            value: i128::from(value),
            column,
        };
        // several ticks on one column: the larger value wins
        match ticks.last_mut() {
            Some(last) if last.column == column => *last = tick,
            _ => ticks.push(tick),
        }
    }
    if ticks.first().is_none_or(|t| t.column != 0) {
        ticks.insert(0, Tick { value: 0, column: 0 });
    }

    AxisPlan::from_ticks(ticks)
}

/// Column of `value` on a scale where `full` sits at full width.
#[inline]
fn column_of(value: u64, full: u64) -> usize {
    let col = round_half_up(
        u128::from(value) * FULL_SCALE_WIDTH as u128,
        u128::from(full),
    );
    usize::try_from(col).unwrap_or(usize::MAX)
}

impl AxisPlan {
    /// Axis without intermediate ticks: one `+` at full scale.
    #[must_use]
    pub fn flat(label: i64) -> Self {
        Self::from_ticks(vec![Tick {
            value: i128::from(label),
            column: FULL_SCALE_WIDTH,
        }])
    }

    /// Axis for the snapshot's current bars, `None` when it has none.
    #[must_use]
    pub fn for_snapshot(snapshot: &Snapshot) -> Option<Self> {
        let (min, max) = snapshot.value_range()?;
        Some(plan_axis(min, max))
    }

    fn from_ticks(ticks: Vec<Tick>) -> Self {
        let last = ticks.last().map_or(0, |t| t.column);
        Self {
            ticks,
            total_width: last + 1 + AXIS_TAIL.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Characters in [`Self::axis_line`].
    #[inline]
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    #[inline]
    fn last_column(&self) -> usize {
        self.ticks.last().map_or(0, |t| t.column)
    }

    /// `+----+----+ ... ----->`
    #[must_use]
    pub fn axis_line(&self) -> String {
        let mut line = String::with_capacity(self.total_width);
        let mut ticks = self.ticks.iter().peekable();
        for col in 0..=self.last_column() {
            if ticks.next_if(|t| t.column == col).is_some() {
                line.push(TICK_GLYPH);
            } else {
                line.push(AXIS_FILL);
            }
        }
        line.push_str(AXIS_TAIL);
        line
    }

    /// Tick values, each starting at its tick's column.
    ///
    /// A label of `n` characters swallows the `n - 1` padding columns after
    /// it, so the following labels stay on their columns. Labels are never
    /// centred.
    #[must_use]
    pub fn label_line(&self) -> String {
        let mut line = String::with_capacity(self.total_width);
        let mut ticks = self.ticks.iter().peekable();
        let mut skip = 0usize;
        for col in 0..=self.last_column() {
            if let Some(t) = ticks.next_if(|t| t.column == col) {
                let before = line.len();
                let _ = write!(line, "{}", t.value);
                skip = line.len() - before - 1;
            } else if skip > 0 {
                skip -= 1;
            } else {
                line.push(' ');
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(plan: &AxisPlan) -> Vec<usize> {
        plan.ticks().iter().map(|t| t.column).collect()
    }

    fn values(plan: &AxisPlan) -> Vec<i128> {
        plan.ticks().iter().map(|t| t.value).collect()
    }

    fn tick_positions(line: &str) -> Vec<usize> {
        line.char_indices()
            .filter(|(_, c)| *c == '+')
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn equal_values_give_a_flat_axis() {
        let plan = plan_axis(42, 42);
        assert_eq!(plan.ticks(), [Tick { value: 42, column: 150 }]);

        let axis = plan.axis_line();
        assert_eq!(&axis[..150], "-".repeat(150));
        assert_eq!(&axis[150..151], "+");
        assert_eq!(&axis[151..], AXIS_TAIL);
        assert_eq!(tick_positions(&axis), [150]);

        assert_eq!(plan.label_line(), format!("{}42", " ".repeat(150)));
        assert_eq!(plan.total_width(), 181);
    }

    #[test]
    fn hundreds_fixture() {
        // 120 -> 100 (leading digit), 980 -> 990 (tens), step 178
        let plan = plan_axis(120, 980);
        assert_eq!(values(&plan), [0, 100, 278, 456, 634, 812, 990]);
        assert_eq!(columns(&plan), [0, 15, 42, 69, 96, 123, 150]);

        let axis = plan.axis_line();
        assert_eq!(tick_positions(&axis), [0, 15, 42, 69, 96, 123, 150]);
        assert_eq!(axis.len(), plan.total_width());
        assert!(axis.ends_with("----------------------------->"));

        let gap = " ".repeat(24);
        let expected = format!(
            "0{}100{gap}278{gap}456{gap}634{gap}812{gap}990",
            " ".repeat(14)
        );
        assert_eq!(plan.label_line(), expected);
    }

    #[test]
    fn labels_start_on_their_tick_column() {
        let plan = plan_axis(120, 980);
        let labels = plan.label_line();
        for t in plan.ticks() {
            assert!(labels[t.column..].starts_with(&t.value.to_string()), "{t:?}");
        }
    }

    #[test]
    fn zero_minimum_is_the_first_tick() {
        let plan = plan_axis(0, 500);
        assert_eq!(values(&plan), [0, 102, 204, 306, 408, 510]);
        assert_eq!(columns(&plan), [0, 30, 60, 90, 120, 150]);
    }

    #[test]
    fn small_minimum_never_takes_the_origin() {
        // 1 and 3 both round onto column 0
        let plan = plan_axis(1, 999);
        assert_eq!(values(&plan), [0, 200, 399, 598, 797, 996]);
        assert_eq!(columns(&plan), [0, 30, 60, 90, 120, 149]);
        assert!(plan.label_line().starts_with("0 "));

        let plan = plan_axis(3, 999);
        assert_eq!(values(&plan), [0, 202, 401, 600, 799, 998]);
        assert_eq!(columns(&plan), [0, 30, 60, 90, 120, 150]);
    }

    #[test]
    fn huge_maximum_keeps_exact_labels() {
        // 9_223_372_036_854_775_807 rounds up past i64::MAX
        let plan = plan_axis(1, i64::MAX);
        assert_eq!(plan.ticks()[0], Tick { value: 0, column: 0 });
        let last = plan.ticks().last().copied().unwrap();
        assert_eq!(last.value, 9_299_999_999_999_999_996);
        assert!(last.value > i128::from(i64::MAX));
        assert_eq!(last.column, 150);
        assert!(plan.label_line().ends_with("9299999999999999996"));
    }

    #[test]
    fn negative_minimum_is_clamped_to_zero() {
        assert_eq!(plan_axis(-70, 500), plan_axis(0, 500));
    }

    #[test]
    fn non_positive_maximum_is_flat() {
        assert_eq!(plan_axis(0, 0).ticks(), [Tick { value: 0, column: 150 }]);
        assert_eq!(plan_axis(-9, -3).ticks(), [Tick { value: -3, column: 150 }]);
    }

    #[test]
    fn single_digit_values() {
        // max rounds at 10^0; the last tick falls short of full scale
        let plan = plan_axis(1, 7);
        assert_eq!(values(&plan), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(columns(&plan), [0, 19, 38, 56, 75, 94, 113]);
    }

    #[test]
    fn span_too_small_for_five_steps_is_flat() {
        // 1 -> 1, 2 -> 3: only two units to split
        assert_eq!(plan_axis(1, 2), AxisPlan::flat(2));
    }

    #[test]
    fn crowded_ticks_collapse_onto_one_column() {
        let plan = plan_axis(9000, 9001);
        let cols = columns(&plan);
        assert!(cols.windows(2).all(|w| w[0] < w[1]), "{cols:?}");
        assert_eq!(plan.ticks().last(), Some(&Tick { value: 9100, column: 150 }));
        assert_eq!(tick_positions(&plan.axis_line()), cols);
    }

    #[test]
    fn columns_always_increase_and_stay_in_range() {
        for (min, max) in [(1, 10), (3, 99_999), (361, 7_432), (999, 1_000), (0, 1)] {
            let plan = plan_axis(min, max);
            let cols = columns(&plan);
            assert!(cols.windows(2).all(|w| w[0] < w[1]), "{min}..{max}: {cols:?}");
            assert!(cols.iter().all(|&c| c <= 150), "{min}..{max}: {cols:?}");
            assert_eq!(plan.axis_line().len(), plan.total_width());
        }
    }
}
