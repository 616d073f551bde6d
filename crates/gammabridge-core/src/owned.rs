//! Owned copies of native strings.
//!
//! Native strings reach the bridge as loans: pointers into memory that the
//! native side owns and may reuse or free after the call. Before anything
//! crosses outward it is copied into an [`OwnedText`] through [`duplicate`],
//! and the loan is never touched again.

use std::alloc::{handle_alloc_error, Layout};
use std::borrow::Cow;
use std::collections::TryReserveError;
use std::ffi::{c_char, CStr, CString, IntoStringError};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// What to do when reserving an owned copy fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocPolicy {
    /// Abort the process through [`handle_alloc_error`].
    ///
    /// Copies are a few dozen bytes, so recovery is not attempted.
    #[default]
    Abort,
    /// Return [`BridgeError::AllocationFailure`] to the caller.
    Propagate,
}

impl AllocPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Propagate => "propagate",
        }
    }
}

impl std::str::FromStr for AllocPolicy {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "propagate" => Ok(Self::Propagate),
            _ => Err(BridgeError::Config {
                key: "alloc_policy",
                value: s.to_string(),
            }),
        }
    }
}

/// An independently owned, NUL-terminated string with no interior NUL.
///
/// Dropping it releases the buffer. [`OwnedText::into_raw`] hands the buffer
/// to a foreign caller, who must give it back through
/// [`OwnedText::from_raw`] to release it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OwnedText(CString);

impl OwnedText {
    pub fn as_c_str(&self) -> &CStr {
        &self.0
    }

    /// Bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text with invalid UTF-8 replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    pub fn into_string(self) -> std::result::Result<String, IntoStringError> {
        self.0.into_string()
    }

    pub fn into_c_string(self) -> CString {
        self.0
    }

    /// Transfers ownership of the buffer to the caller.
    pub fn into_raw(self) -> *mut c_char {
        self.0.into_raw()
    }

    /// Retakes ownership of a buffer produced by [`OwnedText::into_raw`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`OwnedText::into_raw`] and must not have been
    /// retaken before.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Self {
        Self(CString::from_raw(ptr))
    }
}

impl fmt::Debug for OwnedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for OwnedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl AsRef<CStr> for OwnedText {
    fn as_ref(&self) -> &CStr {
        &self.0
    }
}

impl PartialEq<str> for OwnedText {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for OwnedText {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Copies a loaned native string into a new owned buffer.
pub fn duplicate(loaned: &CStr, policy: AllocPolicy) -> Result<OwnedText> {
    duplicate_with(loaned, policy, |buf, len| buf.try_reserve_exact(len))
}

pub(crate) fn duplicate_with<F>(loaned: &CStr, policy: AllocPolicy, reserve: F) -> Result<OwnedText>
where
    F: FnOnce(&mut Vec<u8>, usize) -> std::result::Result<(), TryReserveError>,
{
    let bytes = loaned.to_bytes_with_nul();
    let mut buf = Vec::new();
    if reserve(&mut buf, bytes.len()).is_err() {
        match policy {
            AllocPolicy::Abort => {
                handle_alloc_error(Layout::array::<u8>(bytes.len()).unwrap_or(Layout::new::<u8>()))
            }
            AllocPolicy::Propagate => {
                return Err(BridgeError::AllocationFailure { len: bytes.len() });
            }
        }
    }
    buf.extend_from_slice(bytes);
    // SAFETY: `bytes` came from a `CStr`, so it ends in the only NUL it holds.
    Ok(OwnedText(unsafe { CString::from_vec_with_nul_unchecked(buf) }))
}
