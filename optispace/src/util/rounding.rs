use crate::fsize;

/// Rounds `value` to `decimals` decimal places, halfway cases away from zero.
pub fn round_to(value: fsize, decimals: i32) -> fsize {
    let factor = (10.0 as fsize).powi(decimals);
    (value * factor).round() / factor
}
