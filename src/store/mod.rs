mod error;
mod folder;

pub use error::StoreError;
pub use folder::FolderStore;

use crate::telemetry::Launch;

/// Where launches come from. Implementations are read-only.
pub trait LaunchSource: Send + Sync {
    /// Every readable launch, samples included, ordered by id.
    fn list_launches(&self) -> Result<Vec<Launch>, StoreError>;
    fn get_launch(&self, launch_id: u32) -> Result<Launch, StoreError>;
}
