//! libgamma error codes.
//!
//! Mirrors the values published in `libgamma-error.h`. The bridge itself
//! treats codes as opaque; these constants exist for the compiled-in
//! surface and for callers that want to name a code.

use std::ffi::CStr;

/// Signed libgamma error code. Zero means "no error" and doubles as the
/// "name not found" result of a reverse lookup.
pub type ErrorCode = i32;

/// Returned by reverse lookups that find no match.
pub const NOT_FOUND: ErrorCode = 0;

/// The platform `errno` holds the actual cause.
pub const ERRNO_SET: ErrorCode = -1;
pub const NO_SUCH_ADJUSTMENT_METHOD: ErrorCode = -2;
pub const NO_SUCH_SITE: ErrorCode = -3;
pub const NO_SUCH_PARTITION: ErrorCode = -4;
pub const NO_SUCH_CRTC: ErrorCode = -5;
pub const IMPOSSIBLE_AMOUNT: ErrorCode = -6;
pub const CONNECTOR_DISABLED: ErrorCode = -7;
pub const OPEN_CRTC_FAILED: ErrorCode = -8;
pub const CRTC_INFO_NOT_SUPPORTED: ErrorCode = -9;
pub const GAMMA_RAMP_READ_FAILED: ErrorCode = -10;
pub const GAMMA_RAMP_WRITE_FAILED: ErrorCode = -11;
pub const GAMMA_RAMP_SIZE_CHANGED: ErrorCode = -12;
pub const MIXED_GAMMA_RAMP_SIZE: ErrorCode = -13;
pub const WRONG_GAMMA_RAMP_SIZE: ErrorCode = -14;
pub const SINGLETON_GAMMA_RAMP: ErrorCode = -15;
pub const LIST_CRTCS_FAILED: ErrorCode = -16;
pub const ACQUIRING_MODE_RESOURCES_FAILED: ErrorCode = -17;
pub const NEGATIVE_PARTITION_COUNT: ErrorCode = -18;
pub const NEGATIVE_CRTC_COUNT: ErrorCode = -19;
pub const DEVICE_RESTRICTED: ErrorCode = -20;
pub const DEVICE_ACCESS_FAILED: ErrorCode = -21;
/// Access requires membership of the group reported by `libgamma_group_gid`/`libgamma_group_name`.
pub const DEVICE_REQUIRE_GROUP: ErrorCode = -22;
pub const GRAPHICS_CARD_REMOVED: ErrorCode = -23;
pub const STATE_UNKNOWN: ErrorCode = -24;
pub const CONNECTOR_UNKNOWN: ErrorCode = -25;
pub const CONNECTOR_TYPE_NOT_RECOGNISED: ErrorCode = -26;
pub const SUBPIXEL_ORDER_NOT_RECOGNISED: ErrorCode = -27;
pub const EDID_LENGTH_UNSUPPORTED: ErrorCode = -28;
pub const EDID_WRONG_MAGIC_NUMBER: ErrorCode = -29;
pub const EDID_REVISION_UNSUPPORTED: ErrorCode = -30;
pub const GAMMA_NOT_SPECIFIED: ErrorCode = -31;
pub const EDID_CHECKSUM_ERROR: ErrorCode = -32;
pub const GAMMA_NOT_SPECIFIED_AND_EDID_CHECKSUM_ERROR: ErrorCode = -33;
pub const GAMMA_RAMPS_SIZE_QUERY_FAILED: ErrorCode = -34;
pub const OPEN_PARTITION_FAILED: ErrorCode = -35;
pub const OPEN_SITE_FAILED: ErrorCode = -36;
pub const PROTOCOL_VERSION_QUERY_FAILED: ErrorCode = -37;
pub const PROTOCOL_VERSION_NOT_SUPPORTED: ErrorCode = -38;
pub const LIST_PARTITIONS_FAILED: ErrorCode = -39;
pub const NULL_PARTITION: ErrorCode = -40;
pub const NOT_CONNECTED: ErrorCode = -41;
pub const REPLY_VALUE_EXTRACTION_FAILED: ErrorCode = -42;
pub const EDID_NOT_FOUND: ErrorCode = -43;
pub const LIST_PROPERTIES_FAILED: ErrorCode = -44;
pub const PROPERTY_VALUE_QUERY_FAILED: ErrorCode = -45;
pub const OUTPUT_INFORMATION_QUERY_FAILED: ErrorCode = -46;

/// Lowest (most negative) code libgamma defines.
pub const ERROR_MIN: ErrorCode = OUTPUT_INFORMATION_QUERY_FAILED;

/// Every defined code with its libgamma definition name, ordered from `-1`
/// downwards so that `TABLE[(-code - 1) as usize]` is the entry for `code`.
pub const TABLE: &[(ErrorCode, &CStr)] = &[
    (ERRNO_SET, c"LIBGAMMA_ERRNO_SET"),
    (NO_SUCH_ADJUSTMENT_METHOD, c"LIBGAMMA_NO_SUCH_ADJUSTMENT_METHOD"),
    (NO_SUCH_SITE, c"LIBGAMMA_NO_SUCH_SITE"),
    (NO_SUCH_PARTITION, c"LIBGAMMA_NO_SUCH_PARTITION"),
    (NO_SUCH_CRTC, c"LIBGAMMA_NO_SUCH_CRTC"),
    (IMPOSSIBLE_AMOUNT, c"LIBGAMMA_IMPOSSIBLE_AMOUNT"),
    (CONNECTOR_DISABLED, c"LIBGAMMA_CONNECTOR_DISABLED"),
    (OPEN_CRTC_FAILED, c"LIBGAMMA_OPEN_CRTC_FAILED"),
    (CRTC_INFO_NOT_SUPPORTED, c"LIBGAMMA_CRTC_INFO_NOT_SUPPORTED"),
    (GAMMA_RAMP_READ_FAILED, c"LIBGAMMA_GAMMA_RAMP_READ_FAILED"),
    (GAMMA_RAMP_WRITE_FAILED, c"LIBGAMMA_GAMMA_RAMP_WRITE_FAILED"),
    (GAMMA_RAMP_SIZE_CHANGED, c"LIBGAMMA_GAMMA_RAMP_SIZE_CHANGED"),
    (MIXED_GAMMA_RAMP_SIZE, c"LIBGAMMA_MIXED_GAMMA_RAMP_SIZE"),
    (WRONG_GAMMA_RAMP_SIZE, c"LIBGAMMA_WRONG_GAMMA_RAMP_SIZE"),
    (SINGLETON_GAMMA_RAMP, c"LIBGAMMA_SINGLETON_GAMMA_RAMP"),
    (LIST_CRTCS_FAILED, c"LIBGAMMA_LIST_CRTCS_FAILED"),
    (ACQUIRING_MODE_RESOURCES_FAILED, c"LIBGAMMA_ACQUIRING_MODE_RESOURCES_FAILED"),
    (NEGATIVE_PARTITION_COUNT, c"LIBGAMMA_NEGATIVE_PARTITION_COUNT"),
    (NEGATIVE_CRTC_COUNT, c"LIBGAMMA_NEGATIVE_CRTC_COUNT"),
    (DEVICE_RESTRICTED, c"LIBGAMMA_DEVICE_RESTRICTED"),
    (DEVICE_ACCESS_FAILED, c"LIBGAMMA_DEVICE_ACCESS_FAILED"),
    (DEVICE_REQUIRE_GROUP, c"LIBGAMMA_DEVICE_REQUIRE_GROUP"),
    (GRAPHICS_CARD_REMOVED, c"LIBGAMMA_GRAPHICS_CARD_REMOVED"),
    (STATE_UNKNOWN, c"LIBGAMMA_STATE_UNKNOWN"),
    (CONNECTOR_UNKNOWN, c"LIBGAMMA_CONNECTOR_UNKNOWN"),
    (CONNECTOR_TYPE_NOT_RECOGNISED, c"LIBGAMMA_CONNECTOR_TYPE_NOT_RECOGNISED"),
    (SUBPIXEL_ORDER_NOT_RECOGNISED, c"LIBGAMMA_SUBPIXEL_ORDER_NOT_RECOGNISED"),
    (EDID_LENGTH_UNSUPPORTED, c"LIBGAMMA_EDID_LENGTH_UNSUPPORTED"),
    (EDID_WRONG_MAGIC_NUMBER, c"LIBGAMMA_EDID_WRONG_MAGIC_NUMBER"),
    (EDID_REVISION_UNSUPPORTED, c"LIBGAMMA_EDID_REVISION_UNSUPPORTED"),
    (GAMMA_NOT_SPECIFIED, c"LIBGAMMA_GAMMA_NOT_SPECIFIED"),
    (EDID_CHECKSUM_ERROR, c"LIBGAMMA_EDID_CHECKSUM_ERROR"),
    (GAMMA_NOT_SPECIFIED_AND_EDID_CHECKSUM_ERROR, c"LIBGAMMA_GAMMA_NOT_SPECIFIED_AND_EDID_CHECKSUM_ERROR"),
    (GAMMA_RAMPS_SIZE_QUERY_FAILED, c"LIBGAMMA_GAMMA_RAMPS_SIZE_QUERY_FAILED"),
    (OPEN_PARTITION_FAILED, c"LIBGAMMA_OPEN_PARTITION_FAILED"),
    (OPEN_SITE_FAILED, c"LIBGAMMA_OPEN_SITE_FAILED"),
    (PROTOCOL_VERSION_QUERY_FAILED, c"LIBGAMMA_PROTOCOL_VERSION_QUERY_FAILED"),
    (PROTOCOL_VERSION_NOT_SUPPORTED, c"LIBGAMMA_PROTOCOL_VERSION_NOT_SUPPORTED"),
    (LIST_PARTITIONS_FAILED, c"LIBGAMMA_LIST_PARTITIONS_FAILED"),
    (NULL_PARTITION, c"LIBGAMMA_NULL_PARTITION"),
    (NOT_CONNECTED, c"LIBGAMMA_NOT_CONNECTED"),
    (REPLY_VALUE_EXTRACTION_FAILED, c"LIBGAMMA_REPLY_VALUE_EXTRACTION_FAILED"),
    (EDID_NOT_FOUND, c"LIBGAMMA_EDID_NOT_FOUND"),
    (LIST_PROPERTIES_FAILED, c"LIBGAMMA_LIST_PROPERTIES_FAILED"),
    (PROPERTY_VALUE_QUERY_FAILED, c"LIBGAMMA_PROPERTY_VALUE_QUERY_FAILED"),
    (OUTPUT_INFORMATION_QUERY_FAILED, c"LIBGAMMA_OUTPUT_INFORMATION_QUERY_FAILED"),
];
