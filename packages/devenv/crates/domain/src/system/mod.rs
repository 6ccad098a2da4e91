pub mod platform;
pub mod version;

pub use platform::{Environment, PlatformDetector};
pub use version::parse_version;
