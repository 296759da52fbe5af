use jiff::civil::date;

use tamare_core::models::appointment::{Appointment, AppointmentStatus};
use tamare_shell::dashboard::summarize;
use tamare_storage::fixtures::Fixtures;
use tamare_storage::{InMemoryStore, RecordSink};

fn appointment(date: &str, time: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        date: date.to_string(),
        time: time.to_string(),
        patient_name: format!("{date} {time}"),
        status,
        ..Appointment::default()
    }
}

#[test]
fn sample_counts() {
    let store = InMemoryStore::from_fixtures(Fixtures::sample());
    let summary = summarize(&store, "TAMARE", date(2023, 10, 20));

    assert_eq!(summary.clinic_name, "TAMARE");
    assert_eq!(summary.doctors, 3);
    assert_eq!(summary.patients, 8);
    assert_eq!(summary.appointments_today, 6);
    assert!(summary.upcoming.len() <= 3);
    assert!(summary.upcoming.iter().all(|a| a.status != AppointmentStatus::Cancelled));
}

#[test]
fn upcoming_is_ordered_and_skips_past_and_cancelled() {
    let mut store = InMemoryStore::new();
    for a in [
        appointment("2024-01-16", "08:00", AppointmentStatus::Pending),
        appointment("2024-01-14", "10:00", AppointmentStatus::Confirmed),
        appointment("2024-01-15", "11:30", AppointmentStatus::Confirmed),
        appointment("2024-01-15", "09:00", AppointmentStatus::Cancelled),
        appointment("2024-01-15", "10:00", AppointmentStatus::Pending),
        appointment("not a date", "07:00", AppointmentStatus::Pending),
        appointment("2024-02-01", "07:00", AppointmentStatus::Pending),
    ] {
        store.save(a).unwrap();
    }

    let summary = summarize(&store, "TAMARE", date(2024, 1, 15));
    assert_eq!(summary.appointments_today, 3);

    let upcoming: Vec<_> = summary.upcoming.iter().map(|a| a.patient_name.as_str()).collect();
    assert_eq!(upcoming, ["2024-01-15 10:00", "2024-01-15 11:30", "2024-01-16 08:00"]);
}
