pub mod adapters;
pub mod detector;
pub mod system;

pub use adapters::{AptInstaller, ManualInstaller, ScriptInstaller};
pub use detector::WhichDetector;
pub use system::ShellExecutor;
