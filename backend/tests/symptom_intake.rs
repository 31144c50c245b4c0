use chrono::{DateTime, Duration, TimeZone, Utc};
use healthwatch_backend::{
    IntakeConfig, KeyValueStorage, MemoryStorage, ReportStorage, SubmissionController,
    SubmitError, SymptomReportRepository,
};
use shared::{FailureReason, ReportField, SubmissionStatus, Symptom, Village};

type Controller = SubmissionController<SymptomReportRepository<MemoryStorage>>;

fn controller_over(storage: MemoryStorage) -> Controller {
    let config = IntakeConfig::default();
    let repository = SymptomReportRepository::new(storage, config.reports_key.clone());
    SubmissionController::from_config(repository, &config)
}

fn fill(controller: &mut Controller, name: &str, age: &str, village: &str, symptoms: &[Symptom]) {
    controller.set_patient_name(name);
    controller.set_age_input(age);
    controller.set_village(village);
    for symptom in symptoms {
        controller.toggle_symptom(*symptom, true);
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 17, 9, 30, 0).unwrap()
}

#[tokio::test]
async fn scenario_a_valid_report_is_stored() {
    let mut controller = controller_over(MemoryStorage::new());
    let before = controller.storage().count();

    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Fever, Symptom::Headache]);
    let report = controller.submit(now()).await.unwrap();

    assert_eq!(controller.status(), SubmissionStatus::Succeeded);
    assert_eq!(controller.storage().count(), before + 1);

    let stored = &controller.storage().load().await[0];
    assert_eq!(stored, &report);
    assert_eq!(stored.symptoms, vec![Symptom::Fever, Symptom::Headache]);
    assert_eq!(stored.village, Village::Tezpur);
    assert_eq!(stored.age, 34);
}

#[tokio::test]
async fn scenario_b_empty_name_is_rejected() {
    let mut controller = controller_over(MemoryStorage::new());

    fill(&mut controller, "", "34", "Tezpur", &[Symptom::Fever]);
    let err = controller.submit(now()).await.unwrap_err();

    match err {
        SubmitError::Validation(errors) => assert_eq!(errors.fields(), vec![ReportField::PatientName]),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(controller.storage().count(), 0);
}

#[tokio::test]
async fn scenario_c_age_out_of_range_is_rejected() {
    let mut controller = controller_over(MemoryStorage::new());

    fill(&mut controller, "Bikash", "200", "Tezpur", &[Symptom::Fever]);
    assert!(controller.submit(now()).await.is_err());

    assert_eq!(controller.field_errors().fields(), vec![ReportField::Age]);
    assert_eq!(controller.field_error(ReportField::Age), Some("Age must be between 0 and 150"));
    assert_eq!(controller.storage().count(), 0);
}

#[tokio::test]
async fn scenario_d_no_symptoms_is_rejected() {
    let mut controller = controller_over(MemoryStorage::new());

    fill(&mut controller, "Mina", "40", "Jorhat", &[]);
    assert!(controller.submit(now()).await.is_err());

    assert_eq!(controller.field_errors().fields(), vec![ReportField::Symptoms]);
    assert_eq!(
        controller.status(),
        SubmissionStatus::Failed(FailureReason::Validation)
    );
    assert_eq!(controller.storage().count(), 0);
}

#[tokio::test]
async fn scenario_e_failed_write_keeps_the_draft() {
    let mut controller = controller_over(MemoryStorage::with_quota(64));

    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Fever]);
    controller.set_additional_notes("Fever since the river flooded");
    let draft = controller.form().clone();

    let err = controller.submit(now()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Storage(_)));
    assert_eq!(controller.status(), SubmissionStatus::Failed(FailureReason::Storage));
    assert!(controller.submit_failed());
    assert_eq!(controller.form(), &draft);
    assert_eq!(controller.storage().count(), 0);
}

#[tokio::test]
async fn every_valid_combination_adds_exactly_one_report() {
    let mut controller = controller_over(MemoryStorage::new());
    let mut expected = 0;

    for (i, village) in Village::ALL.iter().enumerate() {
        for age in ["0", "75", "150"] {
            let symptom = Symptom::ALL[i % Symptom::ALL.len()];
            fill(&mut controller, "Patient", age, village.name(), &[symptom]);

            controller
                .submit(now() + Duration::milliseconds(expected))
                .await
                .unwrap();
            expected += 1;
            assert_eq!(controller.storage().count(), expected as usize);
        }
    }
}

#[tokio::test]
async fn single_violations_report_only_that_field() {
    let cases: [(&str, &str, &str, &[Symptom], ReportField); 6] = [
        ("  ", "34", "Tezpur", &[Symptom::Fever], ReportField::PatientName),
        ("Asha", "", "Tezpur", &[Symptom::Fever], ReportField::Age),
        ("Asha", "-3", "Tezpur", &[Symptom::Fever], ReportField::Age),
        ("Asha", "12.5", "Tezpur", &[Symptom::Fever], ReportField::Age),
        ("Asha", "34", "", &[Symptom::Fever], ReportField::Village),
        ("Asha", "34", "Guwahati", &[Symptom::Fever], ReportField::Village),
    ];

    for (name, age, village, symptoms, field) in cases {
        let mut controller = controller_over(MemoryStorage::new());
        fill(&mut controller, name, age, village, symptoms);

        assert!(controller.submit(now()).await.is_err());
        assert_eq!(controller.field_errors().fields(), vec![field], "case {name:?} {age:?} {village:?}");
        assert_eq!(controller.storage().count(), 0);
    }
}

#[tokio::test]
async fn load_is_idempotent() {
    let repository = SymptomReportRepository::new(MemoryStorage::new(), "symptomReports");
    let mut controller = SubmissionController::new(repository.clone(), Duration::seconds(3));
    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Fatigue]);
    controller.submit(now()).await.unwrap();

    let first = repository.load().await;
    let second = repository.load().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn newest_report_comes_first_and_ids_differ() {
    let storage = MemoryStorage::new();
    let repository = SymptomReportRepository::new(storage.clone(), "symptomReports");
    let mut controller = SubmissionController::new(repository.clone(), Duration::seconds(3));

    fill(&mut controller, "First", "20", "Dhubri", &[Symptom::Diarrhea]);
    let r1 = controller.submit(now()).await.unwrap();
    fill(&mut controller, "Second", "21", "Nagaon", &[Symptom::Vomiting]);
    // Same instant on purpose
    let r2 = controller.submit(now()).await.unwrap();

    let loaded = repository.load().await;
    assert_eq!(loaded, vec![r2.clone(), r1.clone()]);
    assert_ne!(r1.id, r2.id);

    let raw = storage.get_item("symptomReports").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["patientName"], "Second");
    assert_eq!(json[0]["age"], 21);
    assert_eq!(json[1]["symptoms"], serde_json::json!(["diarrhea"]));
}

#[tokio::test]
async fn corrupt_store_reads_as_empty_and_recovers_on_append() {
    let storage = MemoryStorage::new();
    storage.set_item("symptomReports", "{not json").unwrap();
    let repository = SymptomReportRepository::new(storage, "symptomReports");
    assert!(repository.load().await.is_empty());

    let mut controller = SubmissionController::new(repository.clone(), Duration::seconds(3));
    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Nausea]);
    controller.submit(now()).await.unwrap();

    assert_eq!(repository.count(), 1);
}

#[tokio::test]
async fn status_returns_to_idle_after_display_window() {
    let mut controller = controller_over(MemoryStorage::new());
    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Fever]);
    controller.submit(now()).await.unwrap();

    controller.tick(now() + Duration::milliseconds(2500));
    assert!(controller.submit_succeeded());

    controller.tick(now() + Duration::milliseconds(3000));
    assert_eq!(controller.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn reports_written_by_older_clients_are_never_dropped() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            "symptomReports",
            r#"[{"patientName":"Old A","age":34.5,"village":"Tezpur","symptoms":["fever"],
                 "id":"1702516122000","createdAt":"2023-12-14T01:02:02.000Z"},
                {"patientName":"Old B","age":40,"village":"Jorhat","symptoms":["nausea"],
                 "id":"1702516000000","createdAt":"2023-12-14T01:00:00.000Z"}]"#,
        )
        .unwrap();
    let repository = SymptomReportRepository::new(storage.clone(), "symptomReports");
    assert_eq!(repository.load().await.len(), 1);

    let mut controller = SubmissionController::new(repository.clone(), Duration::seconds(3));
    fill(&mut controller, "Asha Roy", "34", "Tezpur", &[Symptom::Fever]);
    controller.submit(now()).await.unwrap();

    let raw = storage.get_item("symptomReports").unwrap().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|entry| entry["patientName"] == "Old A"));
    assert!(entries.iter().any(|entry| entry["patientName"] == "Old B"));
    assert_eq!(repository.load().await.len(), 2);
}
