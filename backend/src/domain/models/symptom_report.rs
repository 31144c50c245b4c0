use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Symptom, SymptomReport, Village};

/// A symptom report that passed validation but has not been stored yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatedReport {
    pub patient_name: String,
    pub age: u8,
    pub village: Village,
    pub contact_number: Option<String>,
    pub symptoms: Vec<Symptom>,
    pub additional_notes: Option<String>,
}

impl ValidatedReport {
    /// Stamp the report with its id and creation time
    pub fn into_report(self, id: String, created_at: DateTime<Utc>) -> SymptomReport {
        SymptomReport {
            id,
            patient_name: self.patient_name,
            age: self.age,
            village: self.village,
            contact_number: self.contact_number,
            symptoms: self.symptoms,
            additional_notes: self.additional_notes,
            created_at,
        }
    }
}

/// Pick an id for a report created at `epoch_millis`.
///
/// The id is the creation time, bumped past the largest numeric id already
/// stored so ids stay unique even when two reports land in the same
/// millisecond or the clock steps backwards. Ids that are not epoch
/// timestamps are ignored.
pub fn next_report_id<'a, I>(epoch_millis: u64, existing_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let newest = existing_ids
        .into_iter()
        .filter_map(|id| SymptomReport::parse_id(id).ok())
        .max();

    let id = match newest {
        Some(max) if max >= epoch_millis => max.saturating_add(1),
        _ => epoch_millis,
    };
    SymptomReport::generate_id(id)
}
