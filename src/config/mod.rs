mod loader;
mod types;

pub use loader::{ConfigError, ENV_ADMIN_TOKEN, ENV_API_URL};
pub use types::Config;
