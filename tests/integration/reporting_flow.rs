use slotaudit::models::evaluation::{CriterionAnswer, CriterionInput, EvaluationRow};
use slotaudit::models::payout::{BandPosition, PayoutRow};
use slotaudit::models::report::SeverityTier;
use slotaudit::services::evaluation_service::EvaluationService;
use slotaudit::services::report_service::ReportService;
use slotaudit::store::{evaluation_ledger, payout_ledger, StoreRoot};
use slotaudit::utils::logger;
use tempfile::tempdir;

const MACHINE: &str = "Clip Machine 4P - #001";

fn row(criterion_id: u32, criterion: &str, weight: f64, score: u8, user: &str) -> EvaluationRow {
    EvaluationRow {
        machine: MACHINE.to_string(),
        user: user.to_string(),
        criterion_id: criterion_id.to_string(),
        criterion: criterion.to_string(),
        weight,
        score,
        comments: String::new(),
        timestamp: "2025-10-06 10:00".to_string(),
    }
}

/// One full audit worth of rows with weighted score 2.4 out of 3.0.
fn full_audit_rows() -> Vec<EvaluationRow> {
    vec![
        row(1, "Sales (budget)", 0.20, 3, "Leonel"),
        row(2, "Sales (payout)", 0.20, 3, "Gina"),
        row(3, "Functionality", 0.20, 2, "Christian"),
        row(4, "Material quality", 0.10, 2, "Eduardo"),
        row(5, "Look & feel", 0.10, 2, "Gina"),
        row(6, "Maintainability", 0.10, 2, "Christian"),
        row(7, "Support", 0.10, 2, "Daniel"),
    ]
}

#[test]
fn weighted_rows_produce_the_approval_percentage() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    logger::init_logging(root.dir()).expect("logging");
    let reports = ReportService::new(root.clone());

    evaluation_ledger::append_batch(&root, &full_audit_rows()).expect("append");

    let approval = reports
        .approval_for(MACHINE)
        .expect("approval")
        .expect("has rows");
    assert!((approval - 80.0).abs() < 1e-6, "approval was {approval}");

    let summary = reports.approval_summary().expect("summary");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].machine, MACHINE);
    assert!((summary[0].approval_pct - 80.0).abs() < 1e-6);

    // A machine with no rows reports nothing rather than failing.
    assert_eq!(reports.approval_for("Ghost Machine").expect("approval"), None);
}

#[test]
fn progress_matrix_is_a_binary_presence_check() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let reports = ReportService::new(root.clone());

    evaluation_ledger::append_batch(
        &root,
        &[
            row(4, "Material quality", 0.10, 2, "Eduardo"),
            // Mission rows never count toward progress.
            EvaluationRow {
                criterion_id: "MISSION".to_string(),
                criterion: "MISSION: Revision".to_string(),
                weight: 0.0,
                ..row(0, "", 0.0, 2, "Daniel")
            },
        ],
    )
    .expect("append");

    let matrix = reports.progress_matrix().expect("matrix");
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix[0].machine, MACHINE);

    let cell = |user: &str| {
        matrix[0]
            .cells
            .iter()
            .find(|c| c.user == user)
            .expect("cell")
            .complete
    };
    assert!(cell("Eduardo"));
    assert!(!cell("Daniel"));
    assert!(!cell("Gina"));
}

#[test]
fn payout_series_classifies_against_the_default_band() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let reports = ReportService::new(root.clone());

    for (week, payout) in [("Week 1", 25.0), ("Week 2", 20.0), ("Week 3", 17.0)] {
        payout_ledger::append(
            &root,
            &PayoutRow {
                machine: MACHINE.to_string(),
                date: "2025-10-06".to_string(),
                week: week.to_string(),
                sales: 10000.0,
                payout,
                notes: String::new(),
            },
        )
        .expect("append");
    }

    let series = reports.payout_series(MACHINE).expect("series");
    assert!(!series.band_from_target);
    assert_eq!(series.band.min, 18.0);
    assert_eq!(series.band.max, 22.0);
    assert_eq!(series.points.len(), 3);
    assert_eq!(series.points[0].position, BandPosition::Above);
    assert_eq!(series.points[1].position, BandPosition::Within);
    assert_eq!(series.points[2].position, BandPosition::Below);
}

#[test]
fn recorded_target_overrides_the_default_band() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let evaluations = EvaluationService::new(root.clone());
    let reports = ReportService::new(root.clone());

    // Gina records a 30% payout target; the band becomes 25–35 and the
    // sentinel row stays out of the series points.
    evaluations
        .submit(
            MACHINE,
            "Gina",
            &[CriterionAnswer {
                criterion_id: 2,
                input: CriterionInput::Target { value: 30.0 },
            }],
        )
        .expect("submit");

    payout_ledger::append(
        &root,
        &PayoutRow {
            machine: MACHINE.to_string(),
            date: "2025-10-13".to_string(),
            week: "Week 1".to_string(),
            sales: 9000.0,
            payout: 27.0,
            notes: String::new(),
        },
    )
    .expect("append");

    let series = reports.payout_series(MACHINE).expect("series");
    assert!(series.band_from_target);
    assert_eq!(series.band.min, 25.0);
    assert_eq!(series.band.max, 35.0);
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].position, BandPosition::Within);
}

#[test]
fn radar_averages_per_criterion_name() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let reports = ReportService::new(root.clone());

    evaluation_ledger::append_batch(
        &root,
        &[
            row(4, "Material quality", 0.10, 3, "Eduardo"),
            row(4, "Material quality", 0.10, 2, "Eduardo"),
            row(7, "Support", 0.10, 1, "Daniel"),
        ],
    )
    .expect("append");

    let radar = reports.radar(MACHINE).expect("radar");
    assert_eq!(radar.len(), 2);
    assert_eq!(radar[0].criterion, "Material quality");
    assert!((radar[0].mean_score - 2.5).abs() < 1e-9);
    assert_eq!(radar[1].criterion, "Support");
    assert!((radar[1].mean_score - 1.0).abs() < 1e-9);
}

#[test]
fn audit_detail_maps_scores_to_severity_tiers() {
    let dir = tempdir().expect("temp dir");
    let root = StoreRoot::new(dir.path().join("data")).expect("store root");
    let reports = ReportService::new(root.clone());

    evaluation_ledger::append_batch(
        &root,
        &[
            row(4, "Material quality", 0.10, 3, "Eduardo"),
            row(6, "Maintainability", 0.10, 2, "Christian"),
            row(7, "Support", 0.10, 1, "Daniel"),
        ],
    )
    .expect("append");

    let detail = reports.audit_detail(MACHINE).expect("detail");
    let tiers: Vec<SeverityTier> = detail.iter().map(|row| row.tier).collect();
    assert_eq!(
        tiers,
        vec![SeverityTier::Good, SeverityTier::Fair, SeverityTier::Poor]
    );
}
