use super::{AccountBalance, ChartPair};

/// Round to `places` decimals, half away from zero, on the decimal representation.
///
/// The shift happens by rewriting the shortest decimal form of `value` with an
/// `e{places}` exponent and parsing it back, so `1.005` becomes exactly `100.5`
/// before rounding instead of `100.49999999999999`. Non-finite input is
/// returned as is.
pub fn round_half_away(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = match format!("{value}e{places}").parse::<f64>() {
        Ok(shifted) if shifted.is_finite() => shifted,
        _ => return value,
    };

    // f64::round breaks ties away from zero
    let rounded = shifted.round();

    format!("{rounded}e-{places}").parse::<f64>().unwrap_or(value)
}

/// Round to 2 decimals, half away from zero
pub fn round_to_cents(value: f64) -> f64 {
    round_half_away(value, 2)
}

/// One chart pair per account, in input order
pub fn transform_accounts(accounts: &[AccountBalance]) -> Vec<ChartPair> {
    accounts
        .iter()
        .map(|account| ChartPair::new(account.name.as_str(), round_to_cents(account.current())))
        .collect()
}

/// Sum of the already-rounded slice values, rounded again to cents
pub fn total_net_worth(pairs: &[ChartPair]) -> f64 {
    round_to_cents(pairs.iter().map(ChartPair::value).sum())
}
