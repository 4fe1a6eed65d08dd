use crate::errors::LoadError;
use crate::models::Snapshot;
use crate::storage::load_snapshot;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub csv_path: PathBuf,
    pub year: i32,
    snapshot: Arc<RwLock<Arc<Snapshot>>>,
}

impl AppState {
    pub fn new(csv_path: PathBuf, year: i32) -> Self {
        Self {
            csv_path,
            year,
            snapshot: Arc::new(RwLock::new(Arc::new(Snapshot::empty(year)))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    // On failure the previous snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, LoadError> {
        let fresh = Arc::new(load_snapshot(self.year, &self.csv_path).await?);
        *self.snapshot.write().await = Arc::clone(&fresh);
        Ok(fresh)
    }
}
