use std::cell::RefCell;

// One slot per thread so concurrent failing opens cannot tear each
// other's messages. Written only on open failure, never cleared on
// success.
thread_local! {
    static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

pub(crate) fn set_last_error(msg: String) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = msg);
}

/// Returns the description of the most recent [`MappedFile::open`]
/// failure on the calling thread, or the empty string if none has
/// occurred yet.
///
/// [`MappedFile::open`]: crate::MappedFile::open
pub fn last_error() -> String {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}
