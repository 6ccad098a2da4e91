pub mod dependency;
pub mod entities;
pub mod ports;
pub mod system;

pub use dependency::{resolve, resolve_strict, validate_catalog, CatalogReport, DependencySource};
pub use entities::{
    Catalog, InstallMethod, InstallOutcome, InstallReport, InstallationResult, Selection,
    SkipReason, ToolDescriptor,
};
pub use ports::command::{CommandError, CommandExecutor};
pub use ports::detector::{ToolDetector, ToolStatus};
pub use ports::installer::{InstallError, Installer};
