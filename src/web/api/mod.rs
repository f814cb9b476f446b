pub mod error;
pub mod launches;
