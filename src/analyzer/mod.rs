//! Version history collection and current-version resolution

pub mod history_collector;
pub mod version_resolver;

pub use history_collector::HistoryCollector;
pub use version_resolver::{
    build_number_from, build_number_from_env, Resolution, VersionResolver,
};
