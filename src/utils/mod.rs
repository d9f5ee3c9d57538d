mod paths;

pub use paths::*;
