use std::sync::Arc;

use crate::store::LaunchSource;
use crate::telemetry::{Classifier, SystemClock, TimePolicy};

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn LaunchSource>,
}

impl AppState {
    pub fn policy(&self) -> TimePolicy {
        self.config.time_policy.policy()
    }

    pub fn classifier(&self) -> Classifier<SystemClock> {
        Classifier::new(SystemClock, self.policy())
    }
}
