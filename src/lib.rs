// Library entry point for icongen
pub mod commands;
pub mod models;
pub mod render;
pub mod utils;
