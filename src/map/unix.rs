use std::fs::File;
use std::io;
use std::os::fd::{AsRawFd, IntoRawFd};
use std::path::Path;
use std::ptr;

pub(crate) fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Backend record: descriptor, base address, length. `mmap` takes the
/// descriptor directly, so there is no separate mapping object to keep.
#[derive(Debug)]
pub(crate) struct RawMap {
    fd: libc::c_int,
    ptr: *const u8,
    len: usize,
}

impl RawMap {
    // MAP_PRIVATE: the region is never written back, and a private
    // mapping stays valid within the mapped extent even if another
    // process truncates the file.
    pub(crate) fn new(file: File, len: usize) -> io::Result<RawMap> {
        let addr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ,
                libc::MAP_PRIVATE,
                file.as_raw_fd(),
                0,
            )
        };
        if addr == libc::MAP_FAILED {
            // `file` drops here and closes the descriptor
            return Err(io::Error::last_os_error());
        }

        Ok(RawMap {
            fd: file.into_raw_fd(),
            ptr: addr as *const u8,
            len,
        })
    }

    pub(crate) fn ptr(&self) -> *const u8 {
        self.ptr
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Drop for RawMap {
    fn drop(&mut self) {
        // unmap before the descriptor goes away
        unsafe {
            libc::munmap(self.ptr as *mut libc::c_void, self.len);
            libc::close(self.fd);
        }
    }
}
