//! Command implementations for theme-cli

pub mod backup;
pub mod diff;
pub mod info;
pub mod list;
pub mod restore;
pub mod update;

pub use backup::run_backup;
pub use diff::run_diff;
pub use info::run_info;
pub use list::run_list;
pub use restore::run_restore;
pub use update::run_update;
