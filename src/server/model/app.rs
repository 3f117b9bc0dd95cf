use sea_orm::DatabaseConnection;

use crate::model::overlay::RelabelPolicy;
use crate::server::detection::DetectionClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub detection_client: DetectionClient,
    pub bucket_prefix: String,
    pub relabel_policy: RelabelPolicy,
}
