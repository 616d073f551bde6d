//! Bindings to the system libgamma.

use std::ffi::{c_char, c_int, CStr};
use std::ptr::addr_of;

use super::{ErrorSurface, GroupId};
use crate::codes::ErrorCode;

#[link(name = "gamma")]
extern "C" {
    fn libgamma_name_of_error(value: c_int) -> *const c_char;
    fn libgamma_value_of_error(name: *const c_char) -> c_int;

    // Written by libgamma when it reports `LIBGAMMA_DEVICE_REQUIRE_GROUP`.
    static mut libgamma_group_gid: libc::gid_t;
    static mut libgamma_group_name: *const c_char;
}

/// Queries the linked libgamma.
///
/// Group identity is read from libgamma's globals on every call. libgamma
/// only writes them while reporting `LIBGAMMA_DEVICE_REQUIRE_GROUP`, so
/// callers must not race a failing device open against these reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedSurface;

impl ErrorSurface for LinkedSurface {
    fn name_of_error(&self, code: ErrorCode) -> Option<&CStr> {
        // SAFETY: libgamma returns NULL or a pointer to a static string.
        unsafe {
            let ptr = libgamma_name_of_error(code);
            (!ptr.is_null()).then(|| CStr::from_ptr(ptr))
        }
    }

    fn value_of_error(&self, name: &CStr) -> ErrorCode {
        // SAFETY: `name` is NUL-terminated and outlives the call.
        unsafe { libgamma_value_of_error(name.as_ptr()) }
    }

    fn group_gid(&self) -> GroupId {
        // SAFETY: read through a raw pointer of an initialised C global; no
        // reference to the mutable static is formed.
        unsafe { addr_of!(libgamma_group_gid).read() }
    }

    fn group_name(&self) -> Option<&CStr> {
        // SAFETY: the global is NULL or points to a NUL-terminated string
        // that stays valid until libgamma next reports a group error.
        unsafe {
            let ptr = addr_of!(libgamma_group_name).read();
            (!ptr.is_null()).then(|| CStr::from_ptr(ptr))
        }
    }
}
