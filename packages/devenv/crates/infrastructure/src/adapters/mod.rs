pub mod apt;
pub mod manual;
pub mod script;

pub use apt::AptInstaller;
pub use manual::ManualInstaller;
pub use script::ScriptInstaller;
