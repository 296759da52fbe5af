use tamare_core::models::appointment::Appointment;
use tamare_core::models::doctor::Doctor;
use tamare_core::models::medication::Medication;
use tamare_core::models::patient::{Gender, Patient};
use tamare_core::models::transaction::{
    MedicationTransaction, TransactionDirection, TransactionItem,
};
use tamare_search::Searchable;
use tamare_search::query::AppointmentField;
use tamare_storage::error::StoreError;
use tamare_storage::fixtures::Fixtures;
use tamare_storage::{InMemoryStore, RecordSink, RecordStore};

fn sample_store() -> InMemoryStore {
    InMemoryStore::from_fixtures(Fixtures::sample())
}

fn new_patient(name: &str) -> Patient {
    Patient {
        id: String::new(),
        name: name.to_string(),
        age: None,
        gender: Gender::M,
        national_id: String::new(),
        phone: String::new(),
        email: String::new(),
        address: String::new(),
        condition: String::new(),
        allergies: String::new(),
        blood_type: String::new(),
        last_visit: String::new(),
    }
}

#[test]
fn sample_fixtures_have_expected_sizes() {
    let store = sample_store();
    assert_eq!(store.patients().len(), 8);
    assert_eq!(store.doctors().len(), 3);
    assert_eq!(store.appointments().len(), 6);
    assert_eq!(store.medications().len(), 8);
}

#[test]
fn list_preserves_store_order() {
    let store = sample_store();
    let meds: &[Medication] = store.list();
    let names: Vec<&str> = meds.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names[0], "Paracetamol");
    assert_eq!(names[7], "Salbutamol");
}

#[test]
fn get_finds_by_id() {
    let store = sample_store();
    let doctor: Option<&Doctor> = store.get("2");
    assert_eq!(doctor.map(|d| d.name.as_str()), Some("Dra. Ana Martínez"));
    let missing: Option<&Doctor> = store.get("99");
    assert!(missing.is_none());
}

#[test]
fn query_delegates_to_filter() {
    let store = sample_store();
    let fields = [AppointmentField::PatientName, AppointmentField::DoctorName];
    let found: Vec<&Appointment> = store.query("ana", &fields);
    let ids: Vec<&str> = found.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);

    let all: Vec<&Appointment> = store.query("", Appointment::DEFAULT_FIELDS);
    assert_eq!(all.len(), 6);
}

#[test]
fn save_with_empty_id_assigns_one_and_appends() -> Result<(), StoreError> {
    let mut store = sample_store();
    let saved = store.save(new_patient("Rosa Blanco"))?;
    assert!(!saved.id.is_empty());
    assert_eq!(store.patients().len(), 9);
    assert_eq!(store.patients()[8], saved);
    Ok(())
}

#[test]
fn save_with_known_id_replaces_in_place() -> Result<(), StoreError> {
    let mut store = sample_store();
    let mut edited = store.patients()[2].clone();
    edited.condition = "Asma controlada".to_string();
    edited.age = None;

    store.save(edited.clone())?;
    assert_eq!(store.patients().len(), 8);
    assert_eq!(store.patients()[2], edited);
    Ok(())
}

#[test]
fn save_with_unknown_id_appends() -> Result<(), StoreError> {
    let mut store = InMemoryStore::new();
    let mut patient = new_patient("Pedro Ruiz");
    patient.id = "p-42".to_string();
    let saved = store.save(patient)?;
    assert_eq!(saved.id, "p-42");
    assert_eq!(store.patients().len(), 1);
    Ok(())
}

#[test]
fn transactions_never_touch_stock() {
    let mut store = sample_store();
    let before = store.medications().to_vec();

    store.record_transaction(MedicationTransaction {
        date: "2024-01-15".to_string(),
        notes: String::new(),
        direction: TransactionDirection::Exit,
        items: vec![TransactionItem {
            medication_id: "1".to_string(),
            quantity: Some(100),
            reason: "Prescripción".to_string(),
        }],
    });

    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.medications(), before.as_slice());
}

#[test]
fn critical_flag_is_kept_as_supplied() {
    let store = sample_store();
    let flagged: Vec<&str> = store
        .medications()
        .iter()
        .filter(|m| m.critical)
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["5", "7", "8"]);
}

#[test]
fn fixtures_round_trip_through_file() -> Result<(), StoreError> {
    let dir = tempfile::tempdir().map_err(|source| StoreError::Io {
        path: std::env::temp_dir(),
        source,
    })?;
    let path = dir.path().join("records.json");

    let original = sample_store().to_fixtures();
    original.save(&path)?;
    let loaded = Fixtures::load(&path)?;
    assert_eq!(loaded, original);
    Ok(())
}

#[test]
fn partial_records_file_defaults_missing_collections() -> Result<(), StoreError> {
    let dir = tempfile::tempdir().map_err(|source| StoreError::Io {
        path: std::env::temp_dir(),
        source,
    })?;
    let path = dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"{ "medications": [
            { "id": "1", "name": "Paracetamol", "stock": 3, "expiry": "12/2024" }
        ] }"#,
    )
    .map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    let loaded = Fixtures::load(&path)?;
    assert!(loaded.patients.is_empty());
    assert_eq!(loaded.medications.len(), 1);
    assert!(!loaded.medications[0].critical);
    Ok(())
}

#[test]
fn missing_records_file_is_an_io_error() {
    let err = Fixtures::load(std::path::Path::new("/nonexistent/records.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
