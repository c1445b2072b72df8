/// License collection name length cap.
pub const MAX_NAME_LEN: usize = 64;
/// License symbol length cap.
pub const MAX_SYMBOL_LEN: usize = 12;
/// Creator circle size cap.
pub const MAX_ALLOCATION_ENTRIES: usize = 100;
/// Allowlist size cap per configuration.
pub const MAX_ALLOWLIST_ADDRESSES: usize = 100;
/// Fixed denominator for the PCO rate payload; the UI percent is encoded as
/// `round(rate_percent * 100)` over this.
pub const RATE_DENOMINATOR: u64 = 10_000;
