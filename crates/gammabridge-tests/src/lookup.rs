//! Integration tests for code/name lookups and group identity.

use std::ffi::CString;

use gammabridge_core::{codes, Bridge, BridgeConfig, BuiltinSurface, SurfaceKind};

#[test]
fn every_named_code_round_trips() {
    let bridge = Bridge::new(BuiltinSurface::new());
    for code in codes::ERROR_MIN..0 {
        let name = bridge
            .name_of_error(code)
            .unwrap()
            .unwrap_or_else(|| panic!("code {code} has no name"));
        assert_eq!(bridge.value_of_error(Some(name.as_c_str())), code);
        assert_eq!(bridge.value_of_error_str(Some(&name.to_string())), code);
    }
}

#[test]
fn unknown_codes_are_absent() {
    let bridge = Bridge::new(BuiltinSurface::new());
    for code in [0, 1, 2, 100, codes::ERROR_MIN - 1, -1000, i32::MIN, i32::MAX] {
        assert!(bridge.name_of_error(code).unwrap().is_none(), "code {code}");
    }
}

#[test]
fn absent_and_unknown_names_are_zero() {
    let bridge = Bridge::new(BuiltinSurface::new());
    assert_eq!(bridge.value_of_error(None), 0);
    assert_eq!(bridge.value_of_error_str(None), 0);
    for name in ["", "LIBGAMMA", "LIBGAMMA_ERRNO", "libgamma_errno_set", "EPERM"] {
        assert_eq!(bridge.value_of_error_str(Some(name)), 0, "name {name:?}");
    }
}

#[test]
fn group_identity_is_stable() {
    let bridge = Bridge::new(BuiltinSurface::with_group(
        39,
        Some(CString::new("video").unwrap()),
    ));
    let first = bridge.group_identity().unwrap();
    for _ in 0..10 {
        assert_eq!(bridge.required_group_id(), first.gid);
        assert_eq!(bridge.required_group_name().unwrap(), first.name);
    }
}

#[test]
fn global_bridge_is_consistent() {
    let bridge = Bridge::global();
    assert_eq!(bridge.required_group_id(), bridge.required_group_id());
    assert_eq!(
        bridge.required_group_name().unwrap(),
        bridge.required_group_name().unwrap()
    );
    let name = bridge.name_of_error(codes::DEVICE_REQUIRE_GROUP).unwrap().unwrap();
    assert_eq!(name, "LIBGAMMA_DEVICE_REQUIRE_GROUP");
}

#[test]
fn builtin_config_selects_builtin_surface() {
    let config = BridgeConfig {
        surface: SurfaceKind::Builtin,
        ..BridgeConfig::default()
    };
    let bridge = Bridge::from_config(&config);
    assert_eq!(bridge.surface().kind(), SurfaceKind::Builtin);
    assert_eq!(bridge.value_of_error_str(Some("LIBGAMMA_NOT_CONNECTED")), codes::NOT_CONNECTED);
}
