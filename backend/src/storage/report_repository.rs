//! # Symptom Report Repository
//!
//! The append-only report log. All reports live under a single storage key
//! as one JSON array, newest first:
//!
//! ```json
//! [
//!   {"id":"1760695200001","patientName":"Asha Roy","age":34,"village":"Tezpur",
//!    "symptoms":["fever","headache"],"createdAt":"2025-10-17T10:00:00.001Z"},
//!   {"id":"1760695100000", ...}
//! ]
//! ```
//!
//! `append` is a read-modify-write of the whole array. It is not safe against
//! a second writer sharing the same storage (another browser tab, say); the
//! last write wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::Value;
use shared::SymptomReport;

use super::traits::{KeyValueStorage, ReportStorage, StorageError};
use crate::domain::models::symptom_report::next_report_id;
use crate::domain::models::ValidatedReport;

#[derive(Clone)]
pub struct SymptomReportRepository<K: KeyValueStorage> {
    storage: K,
    key: String,
}

impl<K: KeyValueStorage> SymptomReportRepository<K> {
    pub fn new(storage: K, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// Raw entries of the stored array. Missing or unreadable storage, and
    /// content that is not a JSON array, read as an empty log.
    fn load_entries(&self) -> Vec<Value> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("⚠️ Could not read reports from '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("⚠️ Stored reports under '{}' are not an array, treating as empty", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("⚠️ Stored reports under '{}' are unreadable, treating as empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Read all reports, newest first. Entries that do not match the report
    /// model are skipped here but stay in storage untouched.
    pub fn load_reports(&self) -> Vec<SymptomReport> {
        self.load_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<SymptomReport>(entry) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("⚠️ Skipping stored report #{} under '{}': {}", index, self.key, e);
                    None
                }
            })
            .collect()
    }

    /// Number of readable reports
    pub fn count(&self) -> usize {
        self.load_reports().len()
    }

    /// Store `report` as created at `now` and return it with its id.
    /// Every entry already stored is written back as it was found.
    pub fn append_at(
        &self,
        report: ValidatedReport,
        now: DateTime<Utc>,
    ) -> Result<SymptomReport, StorageError> {
        let mut entries = self.load_entries();

        let epoch_millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = next_report_id(
            epoch_millis,
            entries.iter().filter_map(|entry| entry.get("id").and_then(Value::as_str)),
        );
        let stored = report.into_report(id, now);

        let write_failed = |e: serde_json::Error| StorageError::WriteFailed {
            key: self.key.clone(),
            reason: e.to_string(),
        };
        entries.insert(0, serde_json::to_value(&stored).map_err(write_failed)?);
        let serialized = serde_json::to_string(&entries).map_err(write_failed)?;
        self.storage.set_item(&self.key, &serialized)?;

        info!(
            "📝 Stored symptom report {} ({} entries under '{}')",
            stored.id,
            entries.len(),
            self.key
        );
        Ok(stored)
    }
}

#[async_trait]
impl<K: KeyValueStorage> ReportStorage for SymptomReportRepository<K> {
    async fn load(&self) -> Vec<SymptomReport> {
        self.load_reports()
    }

    async fn append(&self, report: ValidatedReport) -> Result<SymptomReport, StorageError> {
        self.append_at(report, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;
    use shared::{Symptom, Village};

    fn setup_test_repo() -> SymptomReportRepository<MemoryStorage> {
        SymptomReportRepository::new(MemoryStorage::new(), "symptomReports")
    }

    fn validated(name: &str, symptoms: Vec<Symptom>) -> ValidatedReport {
        ValidatedReport {
            patient_name: name.to_string(),
            age: 34,
            village: Village::Tezpur,
            contact_number: None,
            symptoms,
            additional_notes: None,
        }
    }

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_load_empty_store() {
        let repo = setup_test_repo();
        assert!(repo.load_reports().is_empty());
    }

    #[test]
    fn test_append_prepends_newest_first() {
        let repo = setup_test_repo();

        let first = repo.append_at(validated("R1", vec![Symptom::Fever]), at_millis(1_000)).unwrap();
        let second = repo.append_at(validated("R2", vec![Symptom::Nausea]), at_millis(2_000)).unwrap();

        let reports = repo.load_reports();
        assert_eq!(reports, vec![second, first]);
        assert_eq!(reports[0].id, "2000");
        assert_eq!(reports[0].created_at, at_millis(2_000));
    }

    #[test]
    fn test_append_in_same_millisecond_gets_distinct_ids() {
        let repo = setup_test_repo();
        let now = at_millis(5_000);

        let a = repo.append_at(validated("A", vec![Symptom::Fever]), now).unwrap();
        let b = repo.append_at(validated("B", vec![Symptom::Fever]), now).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(b.id, "5001");
    }

    #[test]
    fn test_corrupt_content_reads_as_empty_and_is_replaced() {
        let repo = setup_test_repo();
        repo.storage().set_item("symptomReports", "{not json").unwrap();

        assert!(repo.load_reports().is_empty());

        repo.append_at(validated("Asha Roy", vec![Symptom::Fever]), at_millis(1)).unwrap();
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_non_array_content_reads_as_empty() {
        let repo = setup_test_repo();
        repo.storage().set_item("symptomReports", r#"{"id":"1"}"#).unwrap();

        assert!(repo.load_reports().is_empty());
    }

    #[test]
    fn test_unreadable_entries_survive_append() {
        let repo = setup_test_repo();
        let seeded = r#"[
            {"id":"2000","patientName":"Old A","age":34.5,"village":"Tezpur",
             "symptoms":["fever"],"createdAt":"2023-12-14T01:02:02.000Z"},
            {"id":"1000","patientName":"Old B","age":40,"village":"Jorhat",
             "symptoms":["nausea"],"createdAt":"2023-12-13T01:02:02.000Z"}
        ]"#;
        repo.storage().set_item("symptomReports", seeded).unwrap();

        let readable = repo.load_reports();
        assert_eq!(readable.len(), 1);
        assert_eq!(readable[0].patient_name, "Old B");

        let stored = repo
            .append_at(validated("Asha Roy", vec![Symptom::Fever]), at_millis(1_500))
            .unwrap();
        // Bumped past the unreadable entry's id as well
        assert_eq!(stored.id, "2001");

        let raw = repo.storage().get_item("symptomReports").unwrap().unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["patientName"], "Asha Roy");
        assert_eq!(entries[1]["patientName"], "Old A");
        assert_eq!(entries[1]["age"], 34.5);
        assert_eq!(entries[2]["patientName"], "Old B");

        let names: Vec<String> = repo.load_reports().into_iter().map(|r| r.patient_name).collect();
        assert_eq!(names, vec!["Asha Roy", "Old B"]);
    }

    #[test]
    fn test_persisted_layout_is_json_array() {
        let repo = setup_test_repo();
        repo.append_at(
            validated("Asha Roy", vec![Symptom::Fever, Symptom::Headache]),
            at_millis(1_700_000_000_000),
        )
        .unwrap();

        let raw = repo.storage().get_item("symptomReports").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["id"], "1700000000000");
        assert_eq!(entry["age"], 34);
        assert_eq!(entry["symptoms"], serde_json::json!(["fever", "headache"]));
    }

    #[test]
    fn test_rejected_write_leaves_log_unchanged() {
        let repo = SymptomReportRepository::new(MemoryStorage::with_quota(64), "symptomReports");

        let err = repo
            .append_at(validated("Asha Roy", vec![Symptom::Fever]), at_millis(1))
            .unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_report_storage_trait_round_trip() {
        let repo = setup_test_repo();
        let stored = repo.append(validated("Mina", vec![Symptom::Vomiting])).await.unwrap();

        let loaded = repo.load().await;
        assert_eq!(loaded, vec![stored]);
        assert_eq!(repo.load().await, loaded);
    }
}
