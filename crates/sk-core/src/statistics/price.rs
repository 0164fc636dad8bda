use crate::device::Device;

/// Parses a staff-entered decimal string.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// inputs yield `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Stock value of a single device: purchase price, else sell price, else 0.
pub fn device_value(device: &Device) -> f64 {
    [
        device.details.purchase_price.as_deref(),
        device.details.sell_price.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_price)
    .unwrap_or(0.0)
}
