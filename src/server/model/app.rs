use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    /// The fixed input/output files under the parsing directory are a
    /// single-slot resource shared with the transform script. Overlapping
    /// uploads take this lock and serialize instead of racing on the paths.
    pub parse_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            parse_lock: Arc::new(Mutex::new(())),
        }
    }
}
