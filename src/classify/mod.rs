//! Heuristic predicates over raw preference keys and value text.
//!
//! These classifiers decide what counts as a date, an identifier, UI state,
//! or an opaque binary blob. They are deliberately shape-based: a value
//! that merely looks like one of these is treated as one, and the
//! occasional mis-classification is an accepted property of the approach,
//! not an error condition.

mod blob;
mod date;
mod ident;
mod state;

pub use blob::is_binary_blob;
pub use date::{is_cf_absolute_time, is_date_string, is_timestamp_key, is_unix_timestamp};
pub use ident::{is_hashed_id_string, is_uuid_key, is_uuid_string};
pub use state::{is_ui_state_key, is_ui_state_value};
