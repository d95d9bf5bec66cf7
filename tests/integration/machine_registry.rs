use slotaudit::models::evaluation::EvaluationRow;
use slotaudit::services::machine_service::{MachineService, Requester};
use slotaudit::services::report_service::ReportService;
use slotaudit::store::{evaluation_ledger, StoreRoot};
use tempfile::tempdir;

const SEEDED_MACHINE: &str = "Clip Machine 4P - #001";

#[test]
fn fresh_store_seeds_the_sample_machine() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let machines = MachineService::new(root);

    let all = machines.list(Requester::Admin).expect("admin listing");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, SEEDED_MACHINE);
    assert!(all[0].active);

    // The sample machine ships assigned to Leonel and Gina.
    let leonel = machines
        .list(Requester::User("Leonel"))
        .expect("user listing");
    assert_eq!(leonel.len(), 1);

    let daniel = machines
        .list(Requester::User("Daniel"))
        .expect("user listing");
    assert!(daniel.is_empty());
}

#[test]
fn create_with_photo_writes_the_asset() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let machines = MachineService::new(root.clone());

    let record = machines
        .create(
            "Crane King - #014",
            vec!["Daniel".to_string()],
            Some(b"\xff\xd8 fake jpeg"),
        )
        .expect("create machine");

    let photo_path = root.photo_path("Crane King - #014");
    assert!(photo_path.exists());
    assert_eq!(record.photo.as_deref(), Some(photo_path.to_str().unwrap()));

    let daniel = machines
        .list(Requester::User("Daniel"))
        .expect("user listing");
    assert_eq!(daniel.len(), 1);
    assert_eq!(daniel[0].name, "Crane King - #014");

    // Re-upload replaces the asset in place.
    let replaced = machines
        .save_photo("Crane King - #014", b"\xff\xd8 newer jpeg")
        .expect("replace photo");
    assert_eq!(replaced.photo.as_deref(), record.photo.as_deref());
    assert_eq!(
        std::fs::read(&photo_path).expect("photo bytes"),
        b"\xff\xd8 newer jpeg"
    );
}

#[test]
fn reassign_overwrites_the_assignment_list() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let machines = MachineService::new(root);

    let updated = machines
        .reassign(SEEDED_MACHINE, vec!["Christian".to_string()])
        .expect("reassign");
    assert_eq!(updated.assigned_to, vec!["Christian".to_string()]);

    assert!(machines
        .list(Requester::User("Leonel"))
        .expect("listing")
        .is_empty());
    assert_eq!(
        machines
            .list(Requester::User("Christian"))
            .expect("listing")
            .len(),
        1
    );
}

#[test]
fn unknown_machine_mutations_fail_with_not_found() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let machines = MachineService::new(root);

    assert!(machines.reassign("No Such Machine", vec![]).is_err());
    assert!(machines.deactivate("No Such Machine").is_err());
}

#[test]
fn soft_delete_hides_listings_but_keeps_ledger_history() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let machines = MachineService::new(root.clone());
    let reports = ReportService::new(root.clone());

    evaluation_ledger::append_batch(
        &root,
        &[EvaluationRow {
            machine: SEEDED_MACHINE.to_string(),
            user: "Eduardo".to_string(),
            criterion_id: "4".to_string(),
            criterion: "Material quality".to_string(),
            weight: 0.10,
            score: 2,
            comments: "[cabinet: 7]".to_string(),
            timestamp: "2025-10-06 10:00".to_string(),
        }],
    )
    .expect("append row");

    machines.deactivate(SEEDED_MACHINE).expect("deactivate");

    assert!(machines
        .list(Requester::Admin)
        .expect("listing")
        .is_empty());
    // Historical rows survive and still aggregate.
    let approval = reports
        .approval_for(SEEDED_MACHINE)
        .expect("approval")
        .expect("has rows");
    assert!(approval > 0.0);
}
