pub const PRICE_NOT_AVAILABLE: &str = "Not available. Visit hotel website";

/// Render a provider price tier as repeated currency symbols. Total over all
/// inputs: codes outside 0..=3 (and absent tiers) get the fallback text.
pub fn format_price_tier(price_level: Option<i64>) -> String {
    match price_level {
        Some(level @ 0..=3) => "$".repeat(level as usize + 1),
        _ => PRICE_NOT_AVAILABLE.to_string(),
    }
}
