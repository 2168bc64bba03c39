pub mod config;
pub mod error;
pub mod install;
pub mod loader;
pub mod registry;
pub mod selection;
pub mod types;
pub mod view;

pub use error::{Result, SoukError};
