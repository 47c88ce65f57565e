pub mod commands;
pub mod reporter;
