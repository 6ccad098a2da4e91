pub mod catalog;
pub mod parser;
pub mod result;
pub mod selection;
pub mod tool;

pub use catalog::{Catalog, Config};
pub use parser::{ConfigError, ConfigFormat, ConfigParser};
pub use result::{InstallOutcome, InstallReport, InstallationResult, ReportSummary, SkipReason};
pub use selection::{CategorySelection, Selection};
pub use tool::{InstallMethod, ToolDescriptor};
