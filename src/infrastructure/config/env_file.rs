//! Optional `.env` file support.

use std::collections::HashMap;
use std::path::Path;

/// Conventional location of the environment file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Read `path` into a key/value map without touching the process environment.
///
/// A missing or malformed file is not fatal: it is logged at `warn` and an
/// empty map is returned so that OS-level variables can still satisfy the
/// configuration. A file that fails to parse is ignored as a whole.
pub fn read_env_file(path: impl AsRef<Path>) -> HashMap<String, String> {
    let path = path.as_ref();

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::warn!(
                path = %path.display(),
                "Env file not found, relying on OS environment variables"
            );
            return HashMap::new();
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Error loading env file, relying on OS environment variables"
            );
            return HashMap::new();
        }
    };

    match iter.collect::<Result<HashMap<_, _>, _>>() {
        Ok(vars) => {
            tracing::debug!(path = %path.display(), count = vars.len(), "Env file loaded");
            vars
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Error parsing env file, relying on OS environment variables"
            );
            HashMap::new()
        }
    }
}
