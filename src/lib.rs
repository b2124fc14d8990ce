// Infrastructure layer (shared components)
pub mod infrastructure;

// Re-export infrastructure modules
pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::postgres;

// Domain layer
pub mod probe;

// Supporting modules
pub mod telemetry;
