pub mod app_config;
pub mod bbox;
pub mod config;
pub mod dealer;
pub mod error;
pub mod rank;
pub mod store;

pub use app_config::AppConfig;
pub use bbox::{BoundingBox, Origin};
pub use config::{load_app_config, load_app_config_from_env};
pub use dealer::DealerRecord;
pub use error::{ConfigError, CoreError};
pub use rank::{distance_miles, rank};
pub use store::{LocationStore, MergeOutcome};
