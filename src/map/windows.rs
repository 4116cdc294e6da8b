use std::fs::{File, OpenOptions};
use std::io;
use std::os::windows::fs::OpenOptionsExt;
use std::os::windows::io::{AsRawHandle, IntoRawHandle};
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE};
use windows_sys::Win32::System::Memory::{
    CreateFileMappingW, MapViewOfFile, UnmapViewOfFile, FILE_MAP_READ,
    MEMORY_MAPPED_VIEW_ADDRESS, PAGE_READONLY,
};

pub(crate) fn open_file(path: &Path) -> io::Result<File> {
    // generic read, sharing disabled, existing file only
    OpenOptions::new().read(true).share_mode(0).open(path)
}

/// Backend record: mapping on Windows goes through a named kernel
/// object distinct from the file, so the handle carries both plus the
/// mapped view.
#[derive(Debug)]
pub(crate) struct RawMap {
    file: HANDLE,
    mapping: HANDLE,
    ptr: *const u8,
    len: usize,
}

impl RawMap {
    pub(crate) fn new(file: File, len: usize) -> io::Result<RawMap> {
        let mapping = unsafe {
            CreateFileMappingW(
                file.as_raw_handle() as HANDLE,
                ptr::null(),
                PAGE_READONLY,
                ((len as u64) >> 32) as u32,
                len as u32,
                ptr::null(),
            )
        };
        if mapping.is_null() {
            // `file` drops here and closes its handle
            return Err(io::Error::last_os_error());
        }

        let view = unsafe { MapViewOfFile(mapping, FILE_MAP_READ, 0, 0, len) };
        if view.Value.is_null() {
            let err = io::Error::last_os_error();
            unsafe { CloseHandle(mapping) };
            return Err(err);
        }

        Ok(RawMap {
            file: file.into_raw_handle() as HANDLE,
            mapping,
            ptr: view.Value as *const u8,
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
        // view, then mapping object, then file
        unsafe {
            UnmapViewOfFile(MEMORY_MAPPED_VIEW_ADDRESS {
                Value: self.ptr as *mut _,
            });
            CloseHandle(self.mapping);
            CloseHandle(self.file);
        }
    }
}
