/// Compact badge text for a counter: `999`, `1.5K`, `2.3M`.
///
/// One fractional digit, rounded half-up. Values just under a unit boundary
/// stay in the smaller unit (`999_999` is `1000.0K`).
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M", one_decimal(value, 1_000_000))
    } else if value >= 1_000 {
        format!("{}K", one_decimal(value, 1_000))
    } else {
        value.to_string()
    }
}

fn one_decimal(value: u64, unit: u64) -> String {
    // Integer tenths avoid float rounding surprises (1_050 -> 1.1K, not 1.0K).
    let tenths = (u128::from(value) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}
