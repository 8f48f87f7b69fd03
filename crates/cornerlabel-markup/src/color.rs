/// Parses a `#rrggbb` (opaque) or `#aarrggbb` literal into packed `0xAARRGGBB`.
///
/// Returns `None` for anything else, including a missing `#`.
pub fn parse_color(literal: &str) -> Option<u32> {
    let hex = literal.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(0xff00_0000 | value),
        8 => Some(value),
        _ => None,
    }
}
