pub mod evaluation_service;
pub mod machine_service;
pub mod report_service;
pub mod task_service;
