//! Append-only evaluation ledger backed by a delimited table.

use tracing::debug;

use crate::error::AppResult;
use crate::models::evaluation::EvaluationRow;
use crate::store::{ledger, StoreRoot};

pub const HEADER: &str = "machine,user,criterion_id,criterion,weight,score,comments,timestamp";

const FIELD_COUNT: usize = 8;

pub fn append_batch(root: &StoreRoot, rows: &[EvaluationRow]) -> AppResult<()> {
    let formatted: Vec<String> = rows.iter().map(to_fields).map(|f| ledger::format_row(&f)).collect();
    ledger::append_rows(&root.evaluations_path(), HEADER, &formatted)?;
    debug!(target: "app::store", rows = rows.len(), "evaluation rows appended");
    Ok(())
}

pub fn read_all(root: &StoreRoot) -> AppResult<Vec<EvaluationRow>> {
    ledger::read_typed(&root.evaluations_path(), FIELD_COUNT, from_fields)
}

fn to_fields(row: &EvaluationRow) -> Vec<String> {
    vec![
        row.machine.clone(),
        row.user.clone(),
        row.criterion_id.clone(),
        row.criterion.clone(),
        row.weight.to_string(),
        row.score.to_string(),
        row.comments.clone(),
        row.timestamp.clone(),
    ]
}

fn from_fields(fields: &[String]) -> Option<EvaluationRow> {
    Some(EvaluationRow {
        machine: fields[0].clone(),
        user: fields[1].clone(),
        criterion_id: fields[2].clone(),
        criterion: fields[3].clone(),
        weight: fields[4].parse().ok()?,
        score: fields[5].parse().ok()?,
        comments: fields[6].clone(),
        timestamp: fields[7].clone(),
    })
}
