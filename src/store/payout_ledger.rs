//! Append-only payout ledger. Sentinel rows (see
//! [`crate::models::payout::BAND_SENTINEL_WEEK`]) live in the same table as
//! the weekly figures.

use tracing::debug;

use crate::error::AppResult;
use crate::models::payout::PayoutRow;
use crate::store::{ledger, StoreRoot};

pub const HEADER: &str = "machine,date,week,sales,payout,notes";

const FIELD_COUNT: usize = 6;

pub fn append(root: &StoreRoot, row: &PayoutRow) -> AppResult<()> {
    let formatted = ledger::format_row(&to_fields(row));
    ledger::append_rows(&root.payout_path(), HEADER, &[formatted])?;
    debug!(target: "app::store", machine = %row.machine, week = %row.week, "payout row appended");
    Ok(())
}

pub fn read_all(root: &StoreRoot) -> AppResult<Vec<PayoutRow>> {
    ledger::read_typed(&root.payout_path(), FIELD_COUNT, from_fields)
}

pub fn read_for_machine(root: &StoreRoot, machine: &str) -> AppResult<Vec<PayoutRow>> {
    Ok(read_all(root)?
        .into_iter()
        .filter(|row| row.machine == machine)
        .collect())
}

fn to_fields(row: &PayoutRow) -> Vec<String> {
    vec![
        row.machine.clone(),
        row.date.clone(),
        row.week.clone(),
        row.sales.to_string(),
        row.payout.to_string(),
        row.notes.clone(),
    ]
}

fn from_fields(fields: &[String]) -> Option<PayoutRow> {
    Some(PayoutRow {
        machine: fields[0].clone(),
        date: fields[1].clone(),
        week: fields[2].clone(),
        sales: fields[3].parse().ok()?,
        payout: fields[4].parse().ok()?,
        notes: fields[5].clone(),
    })
}
