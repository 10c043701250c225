//! Merge the per-transport JSON exports for Brest into one `timetable.json`
//! and describe the published files in `meta.json`.

pub mod category;
pub mod error;
pub mod manifest;
pub mod output;
pub mod timetable;

pub use category::Category;
pub use error::LoadError;
pub use manifest::{build_manifest, write_manifest, Manifest};
pub use timetable::{build_timetable, write_timetable, CategoryEntry, Timetable};

pub const VERSION: &str = "1.0.0";

// scraped upstream
pub const SOURCE: &str = "brestgortrans.by";

pub const DEFAULT_DATA_DIR: &str = "data";

pub const TIMETABLE_FILE: &str = "timetable.json";
pub const MANIFEST_FILE: &str = "meta.json";
