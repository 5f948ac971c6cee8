pub mod orchestration;

pub use orchestration::{
    compute_version_info, open_repository, run_version_info, Backend, VersionInfo,
    VersionInfoArgs,
};
