use jiff::civil::date;

use tamare_core::coerce::parse_int;
use tamare_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use tamare_core::models::doctor::Specialty;
use tamare_core::models::medication::{ExpiryMonth, Medication, name_by_id};
use tamare_core::models::patient::{Gender, Patient};
use tamare_core::models::report::{ReportCategory, ReportKind};
use tamare_core::models::transaction::{
    MedicationTransaction, TransactionDirection, TransactionItem,
};

fn medication(id: &str, name: &str, expiry: &str) -> Medication {
    Medication {
        id: id.to_string(),
        name: name.to_string(),
        category: String::new(),
        stock: 10,
        unit: "tabletas".to_string(),
        expiry: expiry.to_string(),
        critical: false,
    }
}

#[test]
fn parse_int_takes_leading_digits() {
    assert_eq!(parse_int("45"), Some(45));
    assert_eq!(parse_int("  7"), Some(7));
    assert_eq!(parse_int("30kg"), Some(30));
    assert_eq!(parse_int("+8"), Some(8));
    assert_eq!(parse_int("-2"), Some(-2));
}

#[test]
fn parse_int_without_digits_is_not_a_number() {
    assert_eq!(parse_int("abc"), None);
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("-"), None);
    assert_eq!(parse_int("x12"), None);
}

#[test]
fn parse_int_overflow_is_not_a_number() {
    assert_eq!(parse_int("99999999999999999999999"), None);
}

#[test]
fn expiry_month_parses_month_and_year() {
    let expiry: ExpiryMonth = "04/2024".parse().unwrap();
    assert_eq!(expiry, ExpiryMonth { month: 4, year: 2024 });
    assert_eq!(expiry.first_day().unwrap(), date(2024, 4, 1));
}

#[test]
fn expiry_month_overflow_rolls_into_next_year() {
    let expiry: ExpiryMonth = "13/2024".parse().unwrap();
    assert_eq!(expiry.first_day().unwrap(), date(2025, 1, 1));

    let expiry: ExpiryMonth = "0/2024".parse().unwrap();
    assert_eq!(expiry.first_day().unwrap(), date(2023, 12, 1));
}

#[test]
fn malformed_expiry_is_an_error() {
    assert!("2024-04".parse::<ExpiryMonth>().is_err());
    assert!("ab/2024".parse::<ExpiryMonth>().is_err());
    assert!(medication("1", "X", "").expiry_month().is_err());
}

#[test]
fn status_round_trips_through_wire_spelling() {
    for status in AppointmentStatus::ALL {
        assert_eq!(status.as_str().parse::<AppointmentStatus>().unwrap(), status);
    }
    assert!("Confirmed".parse::<AppointmentStatus>().is_err());
}

#[test]
fn status_label_for_unknown_is_desconocido() {
    assert_eq!(AppointmentStatus::label_for("confirmed"), "Confirmada");
    assert_eq!(AppointmentStatus::label_for("pending"), "Pendiente");
    assert_eq!(AppointmentStatus::label_for("cancelled"), "Cancelada");
    assert_eq!(AppointmentStatus::label_for("xyz"), "Desconocido");
    assert_eq!(AppointmentStatus::label_for(""), "Desconocido");
}

#[test]
fn catalogs_have_fixed_sizes_and_order() {
    assert_eq!(AppointmentType::ALL.len(), 5);
    assert_eq!(AppointmentType::ALL[0].label(), "Consulta General");
    assert_eq!(AppointmentType::ALL[4].label(), "Emergencia");
    assert_eq!(Specialty::ALL.len(), 11);
    assert_eq!(Specialty::ALL[0], Specialty::default());
    assert_eq!(Specialty::ALL[10].label(), "Otra");
    assert_eq!("Pediatría".parse::<Specialty>().unwrap(), Specialty::Pediatrics);
}

#[test]
fn appointment_wire_spellings() {
    let json = serde_json::json!({
        "id": "2",
        "time": "10:30",
        "patient_name": "Carlos Rodríguez",
        "doctor_name": "Dra. Ana Martínez",
        "appointment_type": "Control Mensual",
        "status": "confirmed"
    });
    let appointment: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(appointment.appointment_type, AppointmentType::MonthlyCheckup);
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert_eq!(appointment.notes, "");
}

#[test]
fn patient_missing_optional_fields_default() {
    let json = serde_json::json!({ "id": "1", "name": "María González", "age": 45, "gender": "F" });
    let patient: Patient = serde_json::from_value(json).unwrap();
    assert_eq!(patient.age, Some(45));
    assert_eq!(patient.gender, Gender::F);
    assert_eq!(patient.gender.label(), "Femenino");
    assert!(patient.allergies.is_empty());
}

#[test]
fn name_by_id_falls_back_to_placeholder() {
    let meds = vec![medication("1", "Paracetamol", "12/2024")];
    assert_eq!(name_by_id(&meds, "1"), "Paracetamol");
    assert_eq!(name_by_id(&meds, "9"), "Seleccionar medicamento");
    assert_eq!(name_by_id(&meds, ""), "Seleccionar medicamento");
}

#[test]
fn stock_delta_is_signed_by_direction_and_skips_nan() {
    let items = vec![
        TransactionItem {
            medication_id: "1".to_string(),
            quantity: Some(5),
            reason: "Compra".to_string(),
        },
        TransactionItem {
            medication_id: "1".to_string(),
            quantity: None,
            reason: String::new(),
        },
        TransactionItem {
            medication_id: "2".to_string(),
            quantity: Some(3),
            reason: String::new(),
        },
        TransactionItem {
            medication_id: "1".to_string(),
            quantity: Some(2),
            reason: String::new(),
        },
    ];
    let mut tx = MedicationTransaction {
        date: "2024-01-15".to_string(),
        notes: String::new(),
        direction: TransactionDirection::Entry,
        items,
    };
    assert_eq!(tx.stock_delta("1"), 7);
    assert_eq!(tx.stock_delta("2"), 3);
    assert_eq!(tx.stock_delta("3"), 0);

    tx.direction = TransactionDirection::Exit;
    assert_eq!(tx.stock_delta("1"), -7);
}

#[test]
fn transaction_direction_serializes_as_type() {
    let tx = MedicationTransaction {
        date: "2024-01-15".to_string(),
        notes: String::new(),
        direction: TransactionDirection::Exit,
        items: Vec::new(),
    };
    let value = serde_json::to_value(&tx).unwrap();
    assert_eq!(value["type"], "exit");
    assert_eq!(TransactionDirection::Exit.title(), "Salida de Medicamentos");
}

#[test]
fn report_catalog_groups_three_per_category() {
    for category in ReportCategory::ALL {
        let kinds = category.reports();
        assert_eq!(kinds.len(), 3);
        assert!(kinds.iter().all(|k| k.category() == category));
    }
    let card = ReportKind::ExpiringMedications.card();
    assert_eq!(card.title, "Medicamentos por Vencer");
    assert_eq!(card.updated, "Actualizado: Ayer");
}
