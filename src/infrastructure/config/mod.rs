mod env_file;
mod settings;

pub use env_file::{read_env_file, DEFAULT_ENV_FILE};
pub use settings::{ConnectionUri, DatabaseConfig, PASSWORD_MASK, REQUIRED_VARS};
