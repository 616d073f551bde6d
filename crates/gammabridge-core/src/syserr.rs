//! Platform system-error descriptions.

use std::ffi::{c_int, CStr};

use crate::error::Result;
use crate::owned::{duplicate, AllocPolicy, OwnedText};

/// Description of `errnum` from the platform `strerror`, copied out.
///
/// `strerror` may hand back a buffer shared with other callers, so the
/// text is duplicated before anything else runs. No lock is taken: callers
/// on platforms where `strerror` is not thread-safe must serialise.
pub fn system_error_text(errnum: c_int, policy: AllocPolicy) -> Result<Option<OwnedText>> {
    // SAFETY: `strerror` returns NULL or a NUL-terminated string, and the
    // borrow ends inside this block.
    unsafe {
        let ptr = libc::strerror(errnum);
        if ptr.is_null() {
            return Ok(None);
        }
        duplicate(CStr::from_ptr(ptr), policy).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eperm_is_described() {
        let text = system_error_text(libc::EPERM, AllocPolicy::Abort).unwrap().unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn test_copies_are_independent() {
        let first = system_error_text(libc::ENOENT, AllocPolicy::Abort).unwrap().unwrap();
        let second = system_error_text(libc::EACCES, AllocPolicy::Abort).unwrap().unwrap();
        assert_ne!(first, second);
        assert_eq!(
            first,
            system_error_text(libc::ENOENT, AllocPolicy::Abort).unwrap().unwrap()
        );
    }
}
