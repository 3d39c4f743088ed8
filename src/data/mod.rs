pub mod loader;
pub mod options;
