//! Facade over the devenv layers: `domain` (catalog, resolver, ports),
//! `infrastructure` (shell, install strategies, detection) and
//! `application` (installation orchestrator, status).

pub use application;
pub use domain;
pub use infrastructure;
