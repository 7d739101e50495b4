/// Logistic map parameter. Fixed; the map is chaotic for values near 4.
pub const LOGISTIC_R: f64 = 3.99;

/// The initial chaotic state is `((|seed| % SEED_SPAN) + 1) / SEED_SCALE`,
/// which pins `x0` inside `[0.0001, 0.9999]` and away from the map's fixed
/// points at 0 and 1.
pub const SEED_SPAN: u32 = 9_999;
pub const SEED_SCALE: f64 = 10_000.0;

/// Payload layout: `[length: u32 LE][message bytes][SHA-256 digest]`.
pub const LEN_PREFIX_LEN: usize = 4;
pub const DIGEST_LEN: usize = 32;

/// Upper bound on the message length accepted by the length probe.
/// A prefix outside `(0, MAX_MESSAGE_LEN]` means wrong key or no payload.
pub const MAX_MESSAGE_LEN: u64 = 10_000_000;

/// Carrier geometry: 24-bit pixels, stored B,G,R.
pub const BYTES_PER_PIXEL: usize = 3;

/// PSNR reported for bit-identical frames (MSE = 0).
pub const PSNR_CAP_DB: f64 = 99.0;

/// Advisory key-length window for UI-level validation.
/// The core itself only rejects empty keys.
pub const KEY_LEN_UI_MIN: usize = 4;
pub const KEY_LEN_UI_MAX: usize = 32;
