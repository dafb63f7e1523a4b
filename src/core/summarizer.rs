use crate::core::coerce::coerce;
use crate::domain::model::{Holder, RawRecord, Summary, DECILE_COUNT};

/// Computes distribution statistics for a set of holders.
///
/// `top` is the size of the concentration window; a window larger than the
/// holder set covers the whole set. The input is left untouched and every
/// degenerate case (no holders, zero total, unparseable balances) resolves to
/// a defined value, so this function cannot fail.
pub fn summarize(records: &[RawRecord], top: usize) -> Summary {
    let holders = rank_holders(records);
    let balances: Vec<f64> = holders.iter().map(|h| h.balance).collect();

    let total_balance: f64 = balances.iter().sum();

    // Shares and Gini are scale-free; an overflowing sum is recomputed on
    // balances divided by the largest magnitude.
    let rescaled;
    let (shares_of, shares_total) = if total_balance.is_finite() {
        (&balances[..], total_balance)
    } else {
        rescaled = rescale(&balances);
        (&rescaled[..], rescaled.iter().sum())
    };

    Summary {
        holders: balances.len(),
        total_balance,
        top_share: top_share(shares_of, shares_total, top),
        gini: gini(shares_of, shares_total),
        deciles_balance: deciles(&balances),
    }
}

fn rescale(balances: &[f64]) -> Vec<f64> {
    let scale = balances.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if scale == 0.0 {
        return balances.to_vec();
    }
    balances.iter().map(|x| x / scale).collect()
}

/// Coerces every balance and orders holders by descending balance. Equal
/// balances keep their input order.
pub(crate) fn rank_holders(records: &[RawRecord]) -> Vec<Holder> {
    let mut holders: Vec<Holder> = records
        .iter()
        .map(|record| Holder {
            address: record.address.clone(),
            balance: coerce(&record.balance),
        })
        .collect();

    // `sort_by` is stable; balances are finite after coercion.
    holders.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    holders
}

/// Share of `total` held by the first `top` entries of `descending`.
fn top_share(descending: &[f64], total: f64, top: usize) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }

    let window = top.min(descending.len());
    let top_sum: f64 = descending[..window].iter().sum();
    finite_or_zero(top_sum / total)
}

/// Balance at rank `ceil(n * d / 10)` for `d = 1..=10`, counted from the
/// largest holder. An empty set yields ten zeros.
fn deciles(descending: &[f64]) -> [f64; DECILE_COUNT] {
    let mut out = [0.0; DECILE_COUNT];
    let n = descending.len();
    if n == 0 {
        return out;
    }

    for (slot, d) in out.iter_mut().zip(1..=DECILE_COUNT) {
        *slot = descending[decile_index(n, d)];
    }
    out
}

/// 0-based index of decile `d` in a descending sequence of length `n > 0`.
/// Integer ceiling keeps exact multiples of ten from drifting.
fn decile_index(n: usize, d: usize) -> usize {
    let rank = (n * d).div_ceil(DECILE_COUNT);
    rank.saturating_sub(1).min(n - 1)
}

/// Discrete Gini coefficient over the balances.
///
/// With `x_i` the i-th smallest balance:
/// `G = 2 * sum(i * x_i) / (n * sum(x_i)) - (n + 1) / n`.
fn gini(descending: &[f64], total: f64) -> f64 {
    let n = descending.len();
    if n == 0 || total == 0.0 {
        return 0.0;
    }

    let weighted: f64 = descending
        .iter()
        .rev()
        .enumerate()
        .map(|(i, x)| (i + 1) as f64 * x)
        .sum();

    let n = n as f64;
    finite_or_zero((2.0 * weighted) / (n * total) - (n + 1.0) / n)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
