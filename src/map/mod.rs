use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::slice;

use anyhow::{bail, Context};

use crate::diag;
use crate::mode::{decode_open_mode, OpenMode};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as sys;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as sys;

/// A whole file mapped read-only into the process.
///
/// The handle owns the OS file, the mapping and the mapped region; all
/// three are released together when it is dropped or [`close`]d. The
/// record is immutable after open, so `data`/`size` and reads through
/// the mapped bytes are safe from any number of threads at once.
///
/// [`close`]: MappedFile::close
pub struct MappedFile {
    raw: sys::RawMap,
}

// Immutable after open and the pages carry read-only protection, so
// sharing across threads cannot race.
unsafe impl Send for MappedFile {}
unsafe impl Sync for MappedFile {}

impl MappedFile {
    /// Maps the named file and returns a handle to its bytes.
    ///
    /// `mode` is an fopen-style string; only a mode decoding to
    /// read-only is accepted today (`"r"`, possibly with ignored extra
    /// characters). On any failure this returns `None` and stores a
    /// description retrievable through [`crate::last_error`]. Empty
    /// files are rejected.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Option<MappedFile> {
        match open_mapped(path.as_ref(), mode) {
            Ok(raw) => Some(MappedFile { raw }),
            Err(err) => {
                diag::set_last_error(format!("{err:#}"));
                None
            }
        }
    }

    /// First byte of the mapped region.
    pub fn data(&self) -> *const u8 {
        self.raw.ptr()
    }

    /// Number of valid bytes at [`data`](MappedFile::data); always
    /// greater than zero.
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// The mapped region as a slice borrowing from the handle.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.raw.ptr(), self.raw.len()) }
    }

    /// Unmaps the region and closes the file. Equivalent to dropping
    /// the handle.
    pub fn close(self) {}
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedFile")
            .field("data", &self.data())
            .field("size", &self.size())
            .finish()
    }
}

// The uniform lifecycle: decode mode, open, query size, reject empty,
// map the whole range. Each step's resources are scoped owners, so a
// failure at any step releases everything acquired so far in reverse
// order and no partial handle escapes.
fn open_mapped(path: &Path, mode: &str) -> anyhow::Result<sys::RawMap> {
    if decode_open_mode(mode) != OpenMode::ReadOnly {
        bail!("no valid file opening mode flags were provided");
    }

    let file = sys::open_file(path)
        .with_context(|| format!("could not open file \"{}\"", path.display()))?;

    let size = file
        .metadata()
        .context("could not get file size")?
        .len();
    if size == 0 {
        bail!("could not map file: file is empty");
    }
    let len = usize::try_from(size).context("could not map file")?;

    sys::RawMap::new(file, len).context("could not map file")
}
