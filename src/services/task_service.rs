use chrono::Local;
use tracing::info;

use crate::catalog::MISSION_CRITERION_ID;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::models::evaluation::EvaluationRow;
use crate::models::payout::PayoutRow;
use crate::models::task::{TaskKind, TaskRecord};
use crate::store::{evaluation_ledger, payout_ledger, task_store, StoreRoot};

const CUT_PROMPT: &str = "Weekly payout report";

#[derive(Clone)]
pub struct TaskService {
    root: StoreRoot,
}

impl TaskService {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    /// Assigns a weekly payout-figures request. The week label doubles as
    /// the task title and later as the ledger week column.
    pub fn assign_cut(
        &self,
        assignee: &str,
        machine: &str,
        week_label: &str,
    ) -> AppResult<TaskRecord> {
        self.assign(TaskKind::Cut, assignee, machine, week_label, CUT_PROMPT)
    }

    /// Assigns an ad-hoc follow-up question.
    pub fn assign_mission(
        &self,
        assignee: &str,
        machine: &str,
        title: &str,
        prompt: &str,
    ) -> AppResult<TaskRecord> {
        self.assign(TaskKind::Mission, assignee, machine, title, prompt)
    }

    fn assign(
        &self,
        kind: TaskKind,
        assignee: &str,
        machine: &str,
        title: &str,
        prompt: &str,
    ) -> AppResult<TaskRecord> {
        if config::find_user(assignee).is_none() {
            return Err(AppError::validation(format!("unknown assignee: {assignee}")));
        }
        if machine.trim().is_empty() {
            return Err(AppError::validation("task must target a machine"));
        }
        if title.trim().is_empty() {
            return Err(AppError::validation("task title must not be empty"));
        }

        let record = TaskRecord {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            assigned_to: assignee.to_string(),
            machine: machine.to_string(),
            title: title.to_string(),
            prompt: prompt.to_string(),
            completed: false,
        };

        let mut tasks = task_store::load(&self.root)?;
        tasks.push(record.clone());
        task_store::save(&self.root, &tasks)?;
        info!(task_id = %record.id, kind = ?kind, assignee = %assignee, "task assigned");
        Ok(record)
    }

    pub fn all(&self) -> AppResult<Vec<TaskRecord>> {
        task_store::load(&self.root)
    }

    /// Incomplete tasks, optionally restricted to one assignee.
    pub fn pending(&self, assignee: Option<&str>) -> AppResult<Vec<TaskRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|task| !task.completed)
            .filter(|task| assignee.map_or(true, |name| task.assigned_to == name))
            .collect())
    }

    /// Submits the figures for a cut task: appends exactly one payout row
    /// (week = task title, date = today), then flips that task's completed
    /// flag by id and rewrites the full queue.
    pub fn complete_cut(
        &self,
        task_id: &str,
        sales: f64,
        payout_pct: f64,
        notes: &str,
    ) -> AppResult<PayoutRow> {
        if !(0.0..=100.0).contains(&payout_pct) {
            return Err(AppError::validation(format!(
                "payout percentage out of range: {payout_pct}"
            )));
        }
        if sales < 0.0 {
            return Err(AppError::validation(format!("negative sales: {sales}")));
        }

        let task = self.find_task(task_id, TaskKind::Cut)?;
        let row = PayoutRow {
            machine: task.machine.clone(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            week: task.title.clone(),
            sales,
            payout: payout_pct,
            notes: notes.to_string(),
        };

        payout_ledger::append(&self.root, &row)?;
        self.mark_completed(task_id)?;
        info!(task_id = %task_id, machine = %row.machine, week = %row.week, "cut task completed");
        Ok(row)
    }

    /// Submits a mission answer: appends one zero-weight evaluation row
    /// tagged with the mission sentinel, then flips the task completed flag.
    pub fn complete_mission(
        &self,
        task_id: &str,
        user: &str,
        score: u8,
        observations: &str,
    ) -> AppResult<EvaluationRow> {
        if !(1..=3).contains(&score) {
            return Err(AppError::validation(format!(
                "mission score out of range: {score}"
            )));
        }

        let task = self.find_task(task_id, TaskKind::Mission)?;
        let row = EvaluationRow {
            machine: task.machine.clone(),
            user: user.to_string(),
            criterion_id: MISSION_CRITERION_ID.to_string(),
            criterion: format!("MISSION: {}", task.title),
            weight: 0.0,
            score,
            comments: format!("Q: {} | A: {}", task.prompt, observations),
            timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        };

        evaluation_ledger::append_batch(&self.root, std::slice::from_ref(&row))?;
        self.mark_completed(task_id)?;
        info!(task_id = %task_id, machine = %row.machine, "mission task completed");
        Ok(row)
    }

    fn find_task(&self, task_id: &str, expected_kind: TaskKind) -> AppResult<TaskRecord> {
        let task = self
            .all()?
            .into_iter()
            .find(|task| task.id == task_id)
            .ok_or_else(AppError::not_found)?;
        if task.kind != expected_kind {
            return Err(AppError::validation(format!(
                "task {task_id} is not a {expected_kind:?} task"
            )));
        }
        Ok(task)
    }

    fn mark_completed(&self, task_id: &str) -> AppResult<()> {
        let mut tasks = task_store::load(&self.root)?;
        let target = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(AppError::not_found)?;
        target.completed = true;
        task_store::save(&self.root, &tasks)
    }
}
