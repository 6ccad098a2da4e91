pub mod orchestrator;
pub mod status;

pub use orchestrator::{InstallEvent, InstallationOrchestrator, OrchestratorOptions};
pub use status::{collect_status, installed_tools, StatusRow};
