pub mod comparison;
pub mod config;
pub mod error;
pub mod game_log;
pub mod radar;
pub mod report;
pub mod rolling;
pub mod sample_data;
pub mod shooting;
pub mod shot_cluster;
pub mod team;
pub mod theme;

pub use error::{MetricsError, MetricsResult};
pub use shot_cluster::{ClusterConfig, ShotCluster, ShotSample, cluster};
