use sea_orm::DatabaseConnection;

use crate::server::model::live::LiveSessions;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Innings in play, keyed by match ID
    pub live: LiveSessions,
    /// Over limit applied when a live innings is started without one
    pub default_max_overs: Option<i32>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, default_max_overs: Option<i32>) -> Self {
        Self {
            db,
            live: LiveSessions::default(),
            default_max_overs,
        }
    }
}
