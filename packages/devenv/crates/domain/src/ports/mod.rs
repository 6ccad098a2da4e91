pub mod command;
pub mod detector;
pub mod installer;
