//! Server configuration shared by both web apps.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATASET_PATH: &str = "data/fitness_dataset.csv";
pub const DEFAULT_ARTIFACTS_DIR: &str = "prediction_utils";
pub const DEFAULT_SESSION_COOKIE: &str = "fitrecs_session";

/// Where to listen and what to load at startup.
///
/// The recommendation app reads `dataset_path`; the predictor app reads
/// `artifacts_dir`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dataset_path: PathBuf,
    pub artifacts_dir: PathBuf,
    /// Name of the cookie carrying the session id
    pub session_cookie: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}
