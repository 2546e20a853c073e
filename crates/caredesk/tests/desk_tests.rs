//! Integration tests for the desk
//!
//! Every mutation is saved straight away, so a desk reopened on the same
//! data directory must see exactly what the previous one left behind.

use caredesk::persist::RestoreStop;
use caredesk::record::{IntakeRecord, InventoryRecord, RotationRecord, TriageRecord};
use caredesk::testing::{ambulance, config_in, emergency, patient, supply};
use caredesk::{Desk, Role, StoreError};
use tempfile::tempdir;

mod session_tests {
    use super::*;

    #[test]
    fn test_reopen_restores_every_role() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let (mut desk, _) = Desk::open(&config).unwrap();
            desk.admit_patient(patient("P1")).unwrap().into_result().unwrap();
            desk.admit_patient(patient("P2")).unwrap().into_result().unwrap();
            desk.add_supply(supply("Gauze", "B1")).unwrap().into_result().unwrap();
            desk.log_emergency(emergency("Ann", 4)).unwrap().into_result().unwrap();
            desk.log_emergency(emergency("Bo", 8)).unwrap().into_result().unwrap();
            desk.register_ambulance(ambulance("A1")).unwrap().into_result().unwrap();
            desk.register_ambulance(ambulance("A2")).unwrap().into_result().unwrap();
            desk.rotate_shift().unwrap().into_result().unwrap();
        }

        let (mut desk, report) = Desk::open(&config).unwrap();
        for role in Role::ALL {
            assert_eq!(report.for_role(role).stop, RestoreStop::EndOfInput);
        }
        assert_eq!(desk.usage(Role::Intake), (2, 100));
        assert_eq!(desk.intake().front().unwrap().id, "P1");
        assert_eq!(desk.inventory().peek_top().unwrap().batch, "B1");
        assert_eq!(desk.rotation().front().unwrap().tag, "A2");

        let served = desk.process_most_critical().unwrap().into_result().unwrap();
        assert_eq!(served.subject, "Bo");
    }

    #[test]
    fn test_removals_are_persisted() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let (mut desk, _) = Desk::open(&config).unwrap();
            desk.admit_patient(patient("P1")).unwrap().into_result().unwrap();
            desk.add_supply(supply("Gauze", "B1")).unwrap().into_result().unwrap();
            desk.add_supply(supply("Saline", "B2")).unwrap().into_result().unwrap();

            let discharged = desk.discharge_patient().unwrap().into_result().unwrap();
            assert_eq!(discharged.id, "P1");
            let used = desk.use_supply("Gauze").unwrap().into_result().unwrap();
            assert_eq!(used.batch, "B1");
        }

        let (desk, _) = Desk::open(&config).unwrap();
        assert!(desk.intake().is_empty());
        let kinds: Vec<_> = desk.inventory().iter().map(|r| r.kind.to_string()).collect();
        assert_eq!(kinds, vec!["Saline"]);
    }

    #[test]
    fn test_store_files_follow_config() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.storage.rotation_file = "fleet/units.txt".into();

        let (mut desk, _) = Desk::open(&config).unwrap();
        desk.register_ambulance(ambulance("A1")).unwrap().into_result().unwrap();

        let path = dir.path().join("fleet/units.txt");
        assert_eq!(desk.path(Role::Rotation), path.as_path());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "A1\n");
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_capacity_errors_surface_from_config() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.capacity.intake = 1;

        let (mut desk, _) = Desk::open(&config).unwrap();
        desk.admit_patient(patient("P1")).unwrap().into_result().unwrap();
        assert_eq!(
            desk.admit_patient(patient("P2")).unwrap_err(),
            StoreError::Full { capacity: 1 }
        );
        assert_eq!(desk.usage(Role::Intake), (1, 1));
    }

    #[test]
    fn test_use_unknown_supply_is_not_found() {
        let dir = tempdir().unwrap();
        let (mut desk, _) = Desk::open(&config_in(dir.path())).unwrap();
        desk.add_supply(supply("Gauze", "B1")).unwrap().into_result().unwrap();

        assert!(matches!(
            desk.use_supply("Iodine").unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert_eq!(desk.inventory().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_mutation_in_memory() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let (mut desk, _) = Desk::open(&config).unwrap();

        // A directory where the store file should be makes every save fail
        std::fs::create_dir_all(desk.path(Role::Triage)).unwrap();

        let applied = desk.log_emergency(emergency("Ann", 9)).unwrap();
        assert!(applied.saved.is_err());
        assert_eq!(desk.triage().len(), 1);
    }

    #[test]
    fn test_blank_leading_field_is_refused_and_later_records_survive() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let (mut desk, _) = Desk::open(&config).unwrap();
            desk.admit_patient(patient("P1")).unwrap().into_result().unwrap();
            assert_eq!(
                desk.admit_patient(IntakeRecord::new("", "Bo", "Cold")).unwrap_err(),
                StoreError::Blank { field: "patient id" }
            );
            // A leading line break clips the id down to nothing
            assert!(matches!(
                desk.admit_patient(IntakeRecord::new("\nP2", "Bo", "Cold")),
                Err(StoreError::Blank { .. })
            ));
            desk.admit_patient(patient("P3")).unwrap().into_result().unwrap();

            assert!(desk.register_ambulance(RotationRecord::new("")).is_err());
            assert!(desk.add_supply(InventoryRecord::new("", 5, "B1")).is_err());
            assert!(desk.log_emergency(TriageRecord::new("\r\n", "Burn", 5)).is_err());
        }

        let (desk, report) = Desk::open(&config).unwrap();
        assert_eq!(report.for_role(Role::Intake).stop, RestoreStop::EndOfInput);
        let ids: Vec<_> = desk.intake().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["P1", "P3"]);
        assert!(desk.rotation().is_empty());
        assert!(desk.inventory().is_empty());
        assert!(desk.triage().is_empty());
    }

    #[test]
    fn test_empty_operations_report_empty() {
        let dir = tempdir().unwrap();
        let (mut desk, _) = Desk::open(&config_in(dir.path())).unwrap();

        assert_eq!(desk.discharge_patient().unwrap_err(), StoreError::Empty);
        assert_eq!(desk.use_last_supply().unwrap_err(), StoreError::Empty);
        assert_eq!(desk.process_most_critical().unwrap_err(), StoreError::Empty);
        assert_eq!(desk.rotate_shift().unwrap_err(), StoreError::Empty);
    }
}
