pub mod api;
pub mod api_doc;
pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::run_server;
pub use state::AppState;
