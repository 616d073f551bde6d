//! C ABI over the process-wide [`Bridge`].
//!
//! Every `char *` returned here is a fresh copy owned by the caller and
//! must be released with [`gammabridge_text_free`]. NULL means "absent",
//! or an allocation failure under the `propagate` policy.

use std::ffi::{c_char, c_int, c_uint, CStr};
use std::ptr;

use gammabridge_core::{logging, Bridge, OwnedText, Result};
use tracing::warn;

fn into_c(result: Result<Option<OwnedText>>) -> *mut c_char {
    match result {
        Ok(Some(text)) => text.into_raw(),
        Ok(None) => ptr::null_mut(),
        Err(e) => {
            warn!(error = %e, "Returning NULL to C caller");
            ptr::null_mut()
        }
    }
}

/// Install the default log subscriber. Returns 1 if installed, 0 if one was
/// already present.
#[no_mangle]
pub extern "C" fn gammabridge_init_logging() -> c_int {
    c_int::from(logging::init())
}

/// Name of the libgamma definition for `code`, or NULL.
#[no_mangle]
pub extern "C" fn gammabridge_name_of_error(code: c_int) -> *mut c_char {
    into_c(Bridge::global().name_of_error(code))
}

/// Code of the libgamma definition called `name`; 0 when `name` is NULL or
/// unknown.
///
/// # Safety
///
/// `name` must be NULL or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn gammabridge_value_of_error(name: *const c_char) -> c_int {
    let name = (!name.is_null()).then(|| CStr::from_ptr(name));
    Bridge::global().value_of_error(name)
}

#[no_mangle]
pub extern "C" fn gammabridge_required_group_id() -> c_uint {
    Bridge::global().required_group_id()
}

/// Name of the group required for device access, or NULL if unset.
#[no_mangle]
pub extern "C" fn gammabridge_required_group_name() -> *mut c_char {
    into_c(Bridge::global().required_group_name())
}

/// Platform description of `errnum`, or NULL.
#[no_mangle]
pub extern "C" fn gammabridge_system_error_text(errnum: c_int) -> *mut c_char {
    into_c(Bridge::global().system_error_text(errnum))
}

/// Release a string returned by this library. NULL is ignored.
///
/// # Safety
///
/// `text` must be NULL or a pointer returned by this library that has not
/// been released yet.
#[no_mangle]
pub unsafe extern "C" fn gammabridge_text_free(text: *mut c_char) {
    if !text.is_null() {
        drop(OwnedText::from_raw(text));
    }
}
