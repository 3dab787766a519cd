#![allow(dead_code)]

use csv::StringRecord;
use political_donors::models::{Contribution, Rejection};
use political_donors::{process_contributions, RunSummary};

/// Build a 21-field itemized contribution line with the given relevant fields
pub fn make_line(recipient: &str, zip: &str, date: &str, amount: &str, other_id: &str) -> String {
    let mut fields = vec![""; 21];
    fields[0] = recipient;
    fields[10] = zip;
    fields[13] = date;
    fields[14] = amount;
    fields[15] = other_id;
    fields.join("|")
}

/// Build an individual contribution line (empty other-identifier)
pub fn individual(recipient: &str, zip: &str, date: &str, amount: &str) -> String {
    make_line(recipient, zip, date, amount, "")
}

/// Parse one raw line the way the reader hands records to the parser
pub fn parse_line(line: &str) -> Result<Contribution, Rejection> {
    let line = line.trim_end_matches(['\n', '\r']);
    let record = StringRecord::from(line.split('|').collect::<Vec<&str>>());
    Contribution::from_record(&record)
}

/// Join lines into an input stream
pub fn build_input(lines: &[String]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// Outputs of one in-memory run
pub struct RunOutput {
    pub by_zip: String,
    pub by_date: String,
    pub summary: RunSummary,
}

impl RunOutput {
    pub fn zip_lines(&self) -> Vec<&str> {
        self.by_zip.lines().collect()
    }

    pub fn date_lines(&self) -> Vec<&str> {
        self.by_date.lines().collect()
    }
}

/// Run the full pipeline over an input string
pub fn process_str(input: &str) -> RunOutput {
    let mut by_zip = Vec::new();
    let mut by_date = Vec::new();
    let summary = process_contributions(input.as_bytes(), &mut by_zip, &mut by_date)
        .expect("in-memory run should not fail");
    RunOutput {
        by_zip: String::from_utf8(by_zip).expect("zip output is UTF-8"),
        by_date: String::from_utf8(by_date).expect("date output is UTF-8"),
        summary,
    }
}
