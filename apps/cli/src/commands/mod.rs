pub mod check;
pub mod install;
pub mod list;
pub mod status;

pub use check::CheckCommand;
pub use install::InstallCommand;
pub use list::ListCommand;
pub use status::StatusCommand;
