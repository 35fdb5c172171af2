//! Breakeven detection.

use rust_decimal::Decimal;

use super::round_cents;
use super::payoff::PayoffPoint;

/// Find the prices where the sampled payoff crosses zero.
///
/// Points must be in ascending price order. Between two samples of opposite
/// sign the crossing is linearly interpolated and rounded to cents.
///
/// A run of samples that are exactly zero yields one breakeven: the side
/// bordering positive profit (entry when entered from profit, otherwise exit
/// when it leaves into profit), else whichever side borders a non-zero
/// sample. A curve that is zero everywhere has none.
#[must_use]
pub fn find_breakevens(points: &[PayoffPoint]) -> Vec<Decimal> {
    let mut breakevens = Vec::new();
    let mut i = 0;

    while i < points.len() {
        if points[i].profit.is_zero() {
            let start = i;
            while points.get(i + 1).is_some_and(|p| p.profit.is_zero()) {
                i += 1;
            }
            if let Some(price) = zero_run_breakeven(points, start, i) {
                breakevens.push(price);
            }
        } else if let Some(&next) = points.get(i + 1) {
            let (prev, curr) = (points[i], next);
            if !curr.profit.is_zero()
                && prev.profit.is_sign_negative() != curr.profit.is_sign_negative()
            {
                breakevens.push(interpolate_zero(prev, curr));
            }
        }
        i += 1;
    }

    breakevens
}

/// Breakeven for the zero run `points[start..=end]`.
fn zero_run_breakeven(points: &[PayoffPoint], start: usize, end: usize) -> Option<Decimal> {
    let before = start.checked_sub(1).map(|j| points[j].profit);
    let after = points.get(end + 1).map(|p| p.profit);
    let entry = points[start].price;
    let exit = points[end].price;

    match (before, after) {
        (Some(b), _) if b > Decimal::ZERO => Some(entry),
        (_, Some(a)) if a > Decimal::ZERO => Some(exit),
        (Some(_), _) => Some(entry),
        (None, Some(_)) => Some(exit),
        (None, None) => None,
    }
}

fn interpolate_zero(prev: PayoffPoint, curr: PayoffPoint) -> Decimal {
    let prev_abs = prev.profit.abs();
    let weight = prev_abs / (prev_abs + curr.profit.abs());
    round_cents(prev.price + weight * (curr.price - prev.price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn curve(samples: &[(Decimal, Decimal)]) -> Vec<PayoffPoint> {
        samples
            .iter()
            .map(|&(price, profit)| PayoffPoint::new(price, profit))
            .collect()
    }

    #[test]
    fn empty_and_single_point() {
        assert!(find_breakevens(&[]).is_empty());
        assert!(find_breakevens(&curve(&[(dec!(100), Decimal::ZERO)])).is_empty());
    }

    #[test]
    fn interpolates_rising_crossing() {
        let points = curve(&[(dec!(100), dec!(-2)), (dec!(104), dec!(2))]);
        assert_eq!(find_breakevens(&points), vec![dec!(102)]);
    }

    #[test]
    fn interpolates_falling_crossing() {
        let points = curve(&[(dec!(10), dec!(3)), (dec!(11), dec!(-1))]);
        assert_eq!(find_breakevens(&points), vec![dec!(10.75)]);
    }

    #[test]
    fn rounds_to_cents() {
        let points = curve(&[(dec!(0), dec!(-1)), (dec!(1), dec!(2))]);
        assert_eq!(find_breakevens(&points), vec![dec!(0.33)]);
    }

    #[test]
    fn zero_sample_reported_once() {
        let points = curve(&[
            (dec!(1), dec!(-1)),
            (dec!(2), Decimal::ZERO),
            (dec!(3), dec!(1)),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(2)]);
    }

    #[test]
    fn zero_run_rising_reported_at_exit() {
        let points = curve(&[
            (dec!(1), dec!(-1)),
            (dec!(2), Decimal::ZERO),
            (dec!(3), Decimal::ZERO),
            (dec!(4), dec!(1)),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(3)]);
    }

    #[test]
    fn zero_run_falling_reported_at_entry() {
        let points = curve(&[
            (dec!(1), dec!(1)),
            (dec!(2), Decimal::ZERO),
            (dec!(3), Decimal::ZERO),
            (dec!(4), dec!(-1)),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(2)]);
    }

    #[test]
    fn zero_touch_reported_once() {
        let points = curve(&[
            (dec!(1), dec!(-1)),
            (dec!(2), Decimal::ZERO),
            (dec!(3), Decimal::ZERO),
            (dec!(4), dec!(-1)),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(2)]);
    }

    #[test]
    fn leading_zero_plateau_reported_at_exit() {
        let points = curve(&[
            (dec!(80), Decimal::ZERO),
            (dec!(85), Decimal::ZERO),
            (dec!(90), Decimal::ZERO),
            (dec!(95), dec!(5)),
            (dec!(100), dec!(10)),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(90)]);
    }

    #[test]
    fn trailing_zero_plateau_reported_at_entry() {
        let points = curve(&[
            (dec!(100), dec!(-10)),
            (dec!(105), dec!(-5)),
            (dec!(110), Decimal::ZERO),
            (dec!(115), Decimal::ZERO),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(110)]);
    }

    #[test]
    fn flat_zero_curve_has_no_breakeven() {
        let points = curve(&[(dec!(1), Decimal::ZERO), (dec!(2), Decimal::ZERO)]);
        assert!(find_breakevens(&points).is_empty());
    }

    #[test]
    fn zero_at_both_edges() {
        let points = curve(&[
            (dec!(90), Decimal::ZERO),
            (dec!(100), dec!(-10)),
            (dec!(110), Decimal::ZERO),
        ]);
        assert_eq!(find_breakevens(&points), vec![dec!(90), dec!(110)]);
    }

    #[test]
    fn no_crossing() {
        let points = curve(&[(dec!(1), dec!(-1)), (dec!(2), dec!(-0.5)), (dec!(3), dec!(-2))]);
        assert!(find_breakevens(&points).is_empty());
    }
}
