/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const VCARD_ROUTE_COMPONENT: &str = "vcard";
pub const VCARD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", VCARD_ROUTE_COMPONENT);

pub const ICAL_ROUTE_COMPONENT: &str = "ical";
pub const ICAL_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", ICAL_ROUTE_COMPONENT);

pub const QR_ROUTE_COMPONENT: &str = "qr";

/// Payload size above which a document is flagged `warn`.
pub const DEFAULT_WARN_THRESHOLD_BYTES: usize = 2500;
/// Size quoted to users as the practical QR compatibility limit.
pub const DEFAULT_COMPATIBILITY_TIP_BYTES: usize = 2900;

/// Bounds for the requested square QR image dimension, in pixels.
pub const QR_MIN_SIZE: u32 = 128;
pub const QR_MAX_SIZE: u32 = 2048;
pub const QR_DEFAULT_SIZE: u32 = 384;

pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_PRODUCT_ID: &str = "-//vCard-QR//Calendar Event Generator//EN";
pub const DEFAULT_UID_DOMAIN: &str = "vcard-qr.local";

/// Suffix appended to the base filename of a downloaded QR image.
pub const QR_IMAGE_SUFFIX: &str = "_qrcode";
pub const QR_IMAGE_EXTENSION: &str = "png";
