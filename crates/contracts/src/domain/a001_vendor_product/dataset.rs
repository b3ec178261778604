use super::schema::Row;

/// Relative path of the CSV asset served next to the app bundle
pub const CSV_PATH: &str = "./sports.csv";

/// All rows of one CSV load, header excluded.
///
/// Built once per page mount and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
    skipped_records: usize,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            skipped_records: 0,
        }
    }

    /// Parses raw CSV text, always discarding the first physical record.
    ///
    /// The reader is lenient: records of any length are accepted, cells are
    /// kept untrimmed, blank lines are skipped. A record the reader fails on
    /// is counted in [`Dataset::skipped_records`] and left out.
    pub fn from_csv_text(text: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        let mut skipped_records = 0;
        for (idx, record) in reader.records().enumerate() {
            if idx == 0 {
                // header row
                continue;
            }
            match record {
                Ok(record) => rows.push(record.iter().collect()),
                Err(_) => skipped_records += 1,
            }
        }

        Self {
            rows,
            skipped_records,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// Distinct category values in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .map(Row::category)
            .filter(|category| seen.insert(*category))
            .map(str::to_string)
            .collect()
    }
}
