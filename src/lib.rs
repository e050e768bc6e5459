pub mod config;
pub mod engine;
pub mod logger;
mod session;
mod session_rng;
mod settings;

pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::{GameSettings, get_config_manager};
