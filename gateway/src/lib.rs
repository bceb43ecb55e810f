pub mod build_info;
pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod practice;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use build_info::BUILD_ID;
pub use config::ServerConfig;
pub use errors::app_error::{AppError, AppResult};
pub use practice::{PracticeConfig, PracticeRegistry};
pub use state::AppState;
