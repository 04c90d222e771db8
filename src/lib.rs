//! stdl - H:M:S duration text, breadth-first directory walks, and byte sizes

pub mod dates;
pub mod duration;
pub mod error;
pub mod output;
pub mod size;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use dates::{date_range, parse_date};
pub use duration::{hms_to_seconds, parse_human_duration, seconds_to_hms};
pub use error::{Error, Result};
pub use size::{DirUsage, KbSize, bytes_readable, dir_size, dir_usage, readable_size_to_bytes};
pub use walk::{
    ExtensionFilter, WalkConfig, WalkMode, Walker, get_dirs_in, get_files_in, walk_entries,
    yield_dirs_in, yield_files_in,
};
