//! Compiled-in copy of libgamma's error table.

use std::ffi::{CStr, CString};

use super::{ErrorSurface, GroupId};
use crate::codes::{self, ErrorCode};

/// Answers lookups from [`codes::TABLE`] without the native library.
///
/// Group identity starts as libgamma's does before any device access:
/// gid `0` and no name.
#[derive(Debug, Clone, Default)]
pub struct BuiltinSurface {
    group_gid: GroupId,
    group_name: Option<CString>,
}

impl BuiltinSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface reporting a fixed required group.
    pub fn with_group(gid: GroupId, name: Option<CString>) -> Self {
        Self {
            group_gid: gid,
            group_name: name,
        }
    }
}

impl ErrorSurface for BuiltinSurface {
    fn name_of_error(&self, code: ErrorCode) -> Option<&CStr> {
        if code >= 0 || code < codes::ERROR_MIN {
            return None;
        }
        codes::TABLE
            .get((-(code as i64) - 1) as usize)
            .map(|&(_, name)| name)
    }

    fn value_of_error(&self, name: &CStr) -> ErrorCode {
        codes::TABLE
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|&(code, _)| code)
            .unwrap_or(codes::NOT_FOUND)
    }

    fn group_gid(&self) -> GroupId {
        self.group_gid
    }

    fn group_name(&self) -> Option<&CStr> {
        self.group_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        let surface = BuiltinSurface::new();
        assert_eq!(surface.name_of_error(codes::ERRNO_SET).unwrap(), c"LIBGAMMA_ERRNO_SET");
        assert_eq!(
            surface.name_of_error(codes::OUTPUT_INFORMATION_QUERY_FAILED).unwrap(),
            c"LIBGAMMA_OUTPUT_INFORMATION_QUERY_FAILED"
        );
    }

    #[test]
    fn test_unknown_codes_have_no_name() {
        let surface = BuiltinSurface::new();
        for code in [0, 1, 42, codes::ERROR_MIN - 1, i32::MIN, i32::MAX] {
            assert!(surface.name_of_error(code).is_none(), "code {code}");
        }
    }

    #[test]
    fn test_value_lookup_is_exact() {
        let surface = BuiltinSurface::new();
        assert_eq!(surface.value_of_error(c"LIBGAMMA_NO_SUCH_CRTC"), codes::NO_SUCH_CRTC);
        assert_eq!(surface.value_of_error(c"libgamma_no_such_crtc"), 0);
        assert_eq!(surface.value_of_error(c"LIBGAMMA_NO_SUCH_CRTC "), 0);
        assert_eq!(surface.value_of_error(c"LIBGAMMA_"), 0);
        assert_eq!(surface.value_of_error(c""), 0);
    }

    #[test]
    fn test_group_defaults() {
        let surface = BuiltinSurface::new();
        assert_eq!(surface.group_gid(), 0);
        assert!(surface.group_name().is_none());

        let surface = BuiltinSurface::with_group(44, Some(CString::new("video").unwrap()));
        assert_eq!(surface.group_gid(), 44);
        assert_eq!(surface.group_name().unwrap(), c"video");
    }
}
