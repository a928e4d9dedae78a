//! Key constants for the keyed entries a HAPROXY-HELLO body carries.

pub const SUPPORTED_VERSIONS_KEY: &str = "supported-versions";
pub const MAX_FRAME_SIZE_KEY: &str = "max-frame-size";
pub const CAPABILITIES_KEY: &str = "capabilities";
