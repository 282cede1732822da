//! Application layer - Use cases and orchestration

pub mod handler;
pub mod manage_config;

pub use handler::RequestHandler;
pub use manage_config::ConfigService;
