use crate::domain::model::RawBalance;

/// Converts a raw balance into a finite number.
///
/// Anything that is not a finite number after parsing (empty or missing
/// cells, free text, `NaN`, infinities) becomes `0.0`. Negative values are
/// kept as they are. This never fails.
pub fn coerce(raw: &RawBalance) -> f64 {
    let value = match raw {
        RawBalance::Number(x) => *x,
        RawBalance::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        RawBalance::Missing => 0.0,
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}
