//! Full lifecycle: admin sets up a machine and tasks, evaluators log in,
//! rate and report, and the admin reads the aggregates back.

use slotaudit::models::evaluation::{CriterionAnswer, CriterionInput, SubItemAnswer};
use slotaudit::models::payout::BandPosition;
use slotaudit::services::machine_service::Requester;
use slotaudit::session::{self, AppState};
use slotaudit::store::StoreRoot;
use tempfile::tempdir;

#[test]
fn audit_lifecycle_from_setup_to_reports() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let app = AppState::new(root);

    session::admin_login("181025").expect("admin login");

    let machine = app
        .machines()
        .create(
            "Boxer Punch - #007",
            vec!["Gina".to_string(), "Christian".to_string()],
            None,
        )
        .expect("create machine");

    let cut = app
        .tasks()
        .assign_cut("Gina", &machine.name, "Week 1 - November")
        .expect("assign cut");
    app.tasks()
        .assign_mission("Christian", &machine.name, "Revision", "Check the coin slot")
        .expect("assign mission");

    // Gina's session: sees her machine and her two pending steps.
    let gina = session::login("Gina").expect("login");
    let visible = app
        .machines()
        .list(Requester::User(&gina.user))
        .expect("listing");
    assert!(visible.iter().any(|m| m.name == machine.name));
    assert_eq!(app.tasks().pending(Some(&gina.user)).expect("pending").len(), 1);

    app.evaluations()
        .submit(
            &machine.name,
            &gina.user,
            &[
                CriterionAnswer {
                    criterion_id: 2,
                    input: CriterionInput::Target { value: 20.0 },
                },
                CriterionAnswer {
                    criterion_id: 5,
                    input: CriterionInput::SubItems {
                        answers: vec![
                            SubItemAnswer::rated("Is the design modern?", 7),
                            SubItemAnswer::rated("Are the labels in good shape?", 6),
                        ],
                    },
                },
            ],
        )
        .expect("submit evaluation");

    app.tasks()
        .complete_cut(&cut.id, 8200.0, 24.0, "")
        .expect("complete cut");

    // Christian answers his mission.
    let christian = session::login("Christian").expect("login");
    let pending = app
        .tasks()
        .pending(Some(&christian.user))
        .expect("pending");
    let mission = &pending[0];
    app.tasks()
        .complete_mission(&mission.id, &christian.user, 3, "slot is clean")
        .expect("complete mission");

    // Admin reads the aggregates: target row scores 3 (0.2 weight) plus
    // look & feel tier 2 (0.1 weight) = 0.8 weighted → 26.67%.
    let approval = app
        .reports()
        .approval_for(&machine.name)
        .expect("approval")
        .expect("has rows");
    assert!((approval - (0.8 / 3.0 * 100.0)).abs() < 1e-6);

    let series = app.reports().payout_series(&machine.name).expect("series");
    assert!(series.band_from_target);
    assert_eq!(series.points.len(), 1);
    // 24% against the 15–25 band recorded by the target.
    assert_eq!(series.points[0].position, BandPosition::Within);

    let matrix = app.reports().progress_matrix().expect("matrix");
    let row = matrix
        .iter()
        .find(|row| row.machine == machine.name)
        .expect("matrix row");
    let complete = |user: &str| row.cells.iter().find(|c| c.user == user).unwrap().complete;
    assert!(complete("Gina"));
    // The mission answer alone does not mark Christian's audit complete.
    assert!(!complete("Christian"));

    assert!(app.tasks().pending(None).expect("pending").is_empty());
    assert_eq!(app.reports().audit_detail(&machine.name).expect("detail").len(), 3);
}
