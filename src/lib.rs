//! Read-only memory-mapped file access.
//!
//! [`MappedFile::open`] maps a whole file into the process and hands back a
//! handle exposing the bytes as one contiguous slice. Dropping (or
//! explicitly closing) the handle unmaps the region and closes the file.
//! When open fails it returns `None` and leaves a description of the
//! failure in a per-thread slot readable through [`last_error`].
//!
//! ```no_run
//! let map = mmfio::MappedFile::open("data.bin", "r")
//!     .unwrap_or_else(|| panic!("{}", mmfio::last_error()));
//! println!("{} bytes at {:p}", map.size(), map.data());
//! ```

mod diag;
mod map;
mod mode;

pub use diag::last_error;
pub use map::MappedFile;
pub use mode::{decode_open_mode, OpenMode};
