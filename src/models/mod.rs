mod config;
mod icon;

pub use config::*;
pub use icon::*;
