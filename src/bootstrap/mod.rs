pub mod config;
pub mod logging;
pub mod run;
pub mod wiring;

pub use config::load_config;
pub use logging::init_tracing_subscriber;
pub use run::{platform_config, resolve_config, start};
pub use wiring::{build_state, wire_dependencies};
