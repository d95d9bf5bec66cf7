//! Login and the single-session application façade.

use std::sync::Arc;

use tracing::info;

use crate::config::{self, Role, ADMIN_PASSWORD};
use crate::error::{AppError, AppResult};
use crate::services::evaluation_service::EvaluationService;
use crate::services::machine_service::MachineService;
use crate::services::report_service::ReportService;
use crate::services::task_service::TaskService;
use crate::store::StoreRoot;

/// An evaluator session. Users identify by name only; there is no per-user
/// password in this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub role: Role,
}

/// Marker for an authenticated admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession;

pub fn login(name: &str) -> AppResult<Session> {
    let entry = config::find_user(name)
        .ok_or_else(|| AppError::auth(format!("unknown user: {name}")))?;
    info!(user = %entry.name, role = ?entry.role, "user logged in");
    Ok(Session {
        user: entry.name.to_string(),
        role: entry.role,
    })
}

/// The only user-facing validation error in the system: a wrong master
/// password.
pub fn admin_login(password: &str) -> AppResult<AdminSession> {
    if password == ADMIN_PASSWORD {
        info!("admin logged in");
        Ok(AdminSession)
    } else {
        Err(AppError::auth("incorrect master password"))
    }
}

/// Service wiring over one store root, shared by the whole interactive
/// session.
#[derive(Clone)]
pub struct AppState {
    root: StoreRoot,
    machines: Arc<MachineService>,
    tasks: Arc<TaskService>,
    evaluations: Arc<EvaluationService>,
    reports: Arc<ReportService>,
}

impl AppState {
    pub fn new(root: StoreRoot) -> Self {
        let machines = Arc::new(MachineService::new(root.clone()));
        let tasks = Arc::new(TaskService::new(root.clone()));
        let evaluations = Arc::new(EvaluationService::new(root.clone()));
        let reports = Arc::new(ReportService::new(root.clone()));

        Self {
            root,
            machines,
            tasks,
            evaluations,
            reports,
        }
    }

    pub fn store_root(&self) -> &StoreRoot {
        &self.root
    }

    pub fn machines(&self) -> &MachineService {
        &self.machines
    }

    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    pub fn evaluations(&self) -> &EvaluationService {
        &self.evaluations
    }

    pub fn reports(&self) -> &ReportService {
        &self.reports
    }
}
