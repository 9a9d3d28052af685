//! Text edits applied to files of the project being provisioned
//!
//! - [`config_line`]: replace the first line containing a marker
//! - [`ignore`]: idempotently append an entry to an ignore list

pub mod config_line;
pub mod ignore;

pub use config_line::{PatchOutcome, patch_file};
pub use ignore::{IgnoreOutcome, ensure_entry};
