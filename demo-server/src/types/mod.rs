pub mod config;
pub mod environment;
pub mod error;

pub use config::DemoConfig;
pub use environment::Environment;
pub use error::AppError;
