use std::collections::HashSet;

// a single fetched person, immutable for the lifetime of the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub portrait_url: String,
    pub birthdate: String,
}

impl PersonRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    pub fn locality(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    pub fn street_address(&self) -> String {
        format!(
            "{} {}, {}, {} {}",
            self.street_number, self.street_name, self.city, self.state, self.postcode
        )
    }
}

// the fetched records in response order; never mutated after construction
#[derive(Clone, Debug, Default)]
pub struct Directory {
    records: Vec<PersonRecord>,
}

impl Directory {
    /// Builds a directory from fetched records, rejecting duplicate ids
    /// so id-based lookups stay unambiguous.
    pub fn new(records: Vec<PersonRecord>) -> Result<Self, String> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in records.iter() {
            if !seen.insert(record.id.as_str()) {
                return Err(format!("duplicate identifier '{}'", record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.records.get(index)
    }

    // a miss here is a caller-side no-op, never a crash
    pub fn find_by_id(&self, id: &str) -> Option<&PersonRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
