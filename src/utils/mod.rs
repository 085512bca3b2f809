pub const DEFAULT_NATIONALITIES: &[&str] = &["us", "dk", "fr", "gb"];

/// Parses a comma-separated list of two-letter nationality codes,
/// lowercasing and deduplicating while preserving order.
pub fn parse_nat_csv(value: &str) -> Result<Vec<String>, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("nationality list is empty".to_string());
    }
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let item = part.trim();
        if item.is_empty() {
            continue;
        }
        if item.len() != 2 || !item.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("invalid nationality code '{item}'"));
        }
        let code = item.to_ascii_lowercase();
        if !out.contains(&code) {
            out.push(code);
        }
    }
    if out.is_empty() {
        return Err("nationality list is empty".to_string());
    }
    Ok(out)
}

/// Formats an RFC 3339 timestamp like "1968-01-24T13:03:46.178Z" as
/// MM/DD/YYYY with zero-padded month and day.
pub fn format_birthdate(value: &str) -> Result<String, String> {
    let date_part = value.split('T').next().unwrap_or_default();
    let mut fields = date_part.split('-');
    let (Some(year), Some(month), Some(day)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("invalid date '{value}', expected YYYY-MM-DD"));
    };
    let year: u16 = year
        .parse()
        .map_err(|_| format!("invalid year in date '{value}'"))?;
    let month: u8 = month
        .parse()
        .map_err(|_| format!("invalid month in date '{value}'"))?;
    let day: u8 = day
        .parse()
        .map_err(|_| format!("invalid day in date '{value}'"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("date '{value}' is out of range"));
    }
    Ok(format!("{month:02}/{day:02}/{year:04}"))
}
