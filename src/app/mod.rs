// Terminal front end: one command per dashboard screen.

#[cfg(feature = "cli")]
pub mod commands;
pub mod render;
