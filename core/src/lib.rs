pub mod catalog;
pub mod config;
pub mod formats;
pub mod languages;
pub mod patch;
pub mod placeholder;
pub mod reconcile;
pub mod report;
pub mod routing;
pub mod sync;


pub use catalog::{Catalog, ValueIndex};
pub use config::SyncConfig;
pub use patch::{apply_patch, build_patch, Patch, PatchSummary};
pub use reconcile::{reconcile, CorrespondenceMap, Reconciliation};
pub use report::{LanguageSummary, SyncReport};
pub use routing::run_routing;
pub use sync::{run_sync, SyncError};
