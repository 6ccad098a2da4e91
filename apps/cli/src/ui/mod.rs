pub mod prompt;
pub mod report;
pub mod tables;
pub mod theme;

pub use theme::{Icon, Theme};

pub fn info(message: impl AsRef<str>) {
    println!("{} {}", Theme::primary(Icon::Info), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::warning("!"), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::error(Icon::Cross), message.as_ref());
}

pub fn println(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}
