use jiff::civil::date;

use tamare_core::models::patient::Patient;
use tamare_core::models::report::{ReportCategory, ReportKind};
use tamare_search::MedicationTab;
use tamare_search::report::ReportInputs;
use tamare_shell::screens::{
    AppointmentsScreen, MedicationsScreen, ReportsScreen, SearchScreen, format_long_date,
};
use tamare_storage::InMemoryStore;
use tamare_storage::fixtures::Fixtures;

fn store() -> InMemoryStore {
    InMemoryStore::from_fixtures(Fixtures::sample())
}

#[test]
fn long_date_is_spanish() {
    assert_eq!(format_long_date(date(2024, 1, 15)), "lunes, 15 de enero de 2024");
    assert_eq!(format_long_date(date(2023, 10, 22)), "domingo, 22 de octubre de 2023");
}

#[test]
fn day_selector_steps_across_month_ends() {
    let mut screen = AppointmentsScreen::new(date(2024, 3, 1));
    screen.prev_day();
    assert_eq!(screen.selected_date(), date(2024, 2, 29));
    screen.next_day();
    screen.next_day();
    assert_eq!(screen.selected_date(), date(2024, 3, 2));
    assert_eq!(screen.date_label(), "sábado, 2 de marzo de 2024");
}

#[test]
fn selected_day_does_not_narrow_appointments() {
    let store = store();
    let mut screen = AppointmentsScreen::new(date(2024, 1, 15));
    assert_eq!(screen.search.visible(&store).len(), 6);

    screen.search.handle_search("ana");
    let visible = screen.search.visible(&store);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|a| {
        a.patient_name.to_lowercase().contains("ana")
            || a.doctor_name.to_lowercase().contains("ana")
    }));
}

#[test]
fn patient_search_uses_the_name() {
    let store = store();
    let mut screen = SearchScreen::<Patient>::new();
    assert_eq!(screen.visible(&store).len(), 8);

    screen.handle_search("   ");
    assert_eq!(screen.visible(&store).len(), 8);

    screen.handle_search("maria");
    assert!(screen.visible(&store).iter().all(|p| p.name.to_lowercase().contains("maria")));
}

#[test]
fn medications_screen_combines_query_and_tab() {
    let store = store();
    let today = date(2024, 1, 15);
    let mut screen = MedicationsScreen::new();

    let all = screen.visible(&store, today).len();
    assert_eq!(all, 8);

    screen.handle_tab_change(MedicationTab::Critical);
    let critical = screen.visible(&store, today);
    assert!(critical.iter().all(|m| m.stock <= 15));

    let first = critical.first().map(|m| m.name.clone());
    if let Some(name) = first {
        screen.handle_search(name.to_uppercase());
        assert!(screen.visible(&store, today).iter().all(|m| m.name == name));
    }

    screen.handle_search("");
    screen.handle_tab_change(MedicationTab::All);
    assert_eq!(screen.visible(&store, today).len(), all);
}

#[test]
fn reports_tab_selects_three_cards() {
    let mut screen = ReportsScreen::new();
    assert_eq!(screen.active(), ReportCategory::Patients);

    for category in ReportCategory::ALL {
        screen.set_active(category);
        let cards = screen.cards();
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.kind.category() == category));
    }
}

#[test]
fn reports_tables_skip_underivable_entries() {
    let store = store();
    let inputs = ReportInputs {
        patients: store.patients(),
        appointments: store.appointments(),
        medications: store.medications(),
        today: date(2024, 1, 15),
    };

    let mut screen = ReportsScreen::new();
    screen.set_active(ReportCategory::Medications);
    let tables = screen.tables(&inputs);
    assert!(tables.iter().all(|t| t.kind != ReportKind::MonthlyConsumption));
    assert_eq!(tables.len(), 2);
}
