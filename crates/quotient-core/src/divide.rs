//! Division that treats missing operands and zero denominators as undefined.
//!
//! Every derived ratio in the workspace flows through [`safe_div`]: the
//! result is `Some` finite quotient or `None`, never a panic, an infinity,
//! or a NaN. Element-wise and broadcast forms cover column-oriented
//! callers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Divides two optional decimals, yielding an undefined result for a
/// missing operand or a zero denominator.
///
/// The quotient is converted to `f64` for consumption by ratio columns;
/// decimal magnitudes are well inside `f64` range, so a defined result is
/// always finite.
#[must_use]
pub fn safe_div(numerator: Option<Decimal>, denominator: Option<Decimal>) -> Option<f64> {
    let numerator = numerator?;
    let denominator = denominator?;
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator).and_then(|q| q.to_f64())
}

/// Element-wise [`safe_div`] over two columns.
///
/// The inputs are expected to be the same length; if they are not, the
/// output has the length of the shorter one.
#[must_use]
pub fn safe_div_series(
    numerators: &[Option<Decimal>],
    denominators: &[Option<Decimal>],
) -> Vec<Option<f64>> {
    numerators
        .iter()
        .zip(denominators.iter())
        .map(|(n, d)| safe_div(*n, *d))
        .collect()
}

/// [`safe_div`] of a column by a single denominator.
///
/// An absent or zero denominator yields an all-undefined column of the
/// numerator's length.
#[must_use]
pub fn safe_div_by(
    numerators: &[Option<Decimal>],
    denominator: Option<Decimal>,
) -> Vec<Option<f64>> {
    numerators
        .iter()
        .map(|n| safe_div(*n, denominator))
        .collect()
}
