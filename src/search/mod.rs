use crate::directory::PersonRecord;

/// Case-insensitive substring match of the query against "first last".
pub fn matches(query: &str, record: &PersonRecord) -> bool {
    let name = format!("{} {}", record.first, record.last).to_lowercase();
    name.contains(&query.to_lowercase())
}

/// Returns the records whose full name contains the query, in input order.
/// An empty or whitespace-only query returns the full set; this branch
/// returns early so the substring pass cannot overwrite it.
pub fn filter<'a>(query: &str, records: &'a [PersonRecord]) -> Vec<&'a PersonRecord> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    // the raw query, whitespace included, is what must appear in the name
    records.iter().filter(|r| matches(query, r)).collect()
}
