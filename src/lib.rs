pub mod provider;
pub mod ffi;
pub mod config;
pub mod window;

pub use provider::ValueProvider;
