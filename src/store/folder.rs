use log::{error, warn};
use std::path::{Path, PathBuf};

use crate::store::{LaunchSource, StoreError};
use crate::telemetry::Launch;

/// Launch documents stored as `<base>/<launch_id>.json`, one per file.
/// Every call goes back to disk.
pub struct FolderStore {
    base: PathBuf,
}

impl FolderStore {
    pub fn new(base: PathBuf) -> Self {
        FolderStore { base }
    }

    fn launch_path(&self, launch_id: u32) -> PathBuf {
        self.base.join(format!("{}.json", launch_id))
    }

    pub fn read_launch_file(path: &Path) -> Result<Launch, StoreError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            file: path.display().to_string(),
            source,
        })
    }
}

impl LaunchSource for FolderStore {
    fn list_launches(&self) -> Result<Vec<Launch>, StoreError> {
        if !self.base.exists() {
            warn!("Launch folder {} does not exist", self.base.display());
            return Ok(Vec::new());
        }

        let mut launches = Vec::new();
        for entry in self.base.read_dir()? {
            let entry = entry?;
            let entry_path = entry.path();

            let is_json = entry_path.extension().and_then(|e| e.to_str()) == Some("json");
            if !entry_path.is_file() || !is_json {
                continue;
            }

            match Self::read_launch_file(&entry_path) {
                Ok(launch) => launches.push(launch),
                Err(e) => {
                    error!("Skipping launch file {}: {}", entry_path.display(), e);
                    continue;
                }
            }
        }

        launches.sort_by_key(|l| l.launch_id);
        Ok(launches)
    }

    fn get_launch(&self, launch_id: u32) -> Result<Launch, StoreError> {
        let path = self.launch_path(launch_id);

        if !path.exists() {
            return Err(StoreError::NotFound(launch_id));
        }

        let launch = Self::read_launch_file(&path)?;
        if launch.launch_id != launch_id {
            warn!(
                "{} declares launch_id {}, serving it as {}",
                path.display(),
                launch.launch_id,
                launch_id
            );
        }
        Ok(launch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempFolder(PathBuf);

    impl TempFolder {
        fn new() -> Self {
            let path =
                std::env::temp_dir().join(format!("cansat-store-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&path).unwrap();
            TempFolder(path)
        }

        fn write(&self, name: &str, content: &str) {
            std::fs::write(self.0.join(name), content).unwrap();
        }
    }

    impl Drop for TempFolder {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn lists_sorted_and_skips_broken_files() {
        let folder = TempFolder::new();
        folder.write(
            "2.json",
            r#"{"launch_id": 2, "start_date": "2025-06-30T10:00:00Z", "end_date": null, "variables": []}"#,
        );
        folder.write("1.json", r#"{"launch_id": 1, "variables": [{"timestamp": 5}]}"#);
        folder.write("3.json", "{ not json");
        folder.write("notes.txt", "ignored");

        let store = FolderStore::new(folder.0.clone());
        let launches = store.list_launches().unwrap();

        let ids: Vec<u32> = launches.iter().map(|l| l.launch_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(launches[1].start_date.as_deref(), Some("2025-06-30T10:00:00Z"));
        assert_eq!(launches[0].samples.len(), 1);
    }

    #[test]
    fn missing_folder_lists_empty() {
        let store = FolderStore::new(std::env::temp_dir().join("cansat-store-does-not-exist"));
        assert!(store.list_launches().unwrap().is_empty());
    }

    #[test]
    fn get_launch_reads_samples() {
        let folder = TempFolder::new();
        folder.write(
            "7.json",
            r#"{"launch_id": 7, "variables": [{"timestamp": 10, "humidity": 41.5}, {"timestamp": 20}]}"#,
        );

        let launch = FolderStore::new(folder.0.clone()).get_launch(7).unwrap();

        assert_eq!(launch.launch_id, 7);
        assert_eq!(launch.samples.len(), 2);
        assert_eq!(launch.samples[0].humidity, Some(41.5));
    }

    #[test]
    fn get_launch_errors() {
        let folder = TempFolder::new();
        folder.write("4.json", "\"oops\"");
        let store = FolderStore::new(folder.0.clone());

        assert!(matches!(store.get_launch(5), Err(StoreError::NotFound(5))));
        assert!(matches!(store.get_launch(4), Err(StoreError::Json { .. })));
    }
}
