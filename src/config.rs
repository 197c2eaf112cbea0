//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, hardware pin assignments, and the reference
//! digit data live here so they can be tuned in one place.

/// Monotonic time in microseconds, as produced by `Instant::as_micros()`.
pub type Micros = u64;

// Match timing

/// Length of the match window: 3 minutes.
pub const MATCH_RUNTIME_US: Micros = 3 * 60 * 1_000_000;

/// Debounce window. A mechanical switch settles within ~25 ms; staying
/// strictly inside that keeps legitimate rapid double presses intact.
pub const DEBOUNCE_DELAY_US: Micros = 24_500;

/// How long a station LED stays lit after an off-sequence press.
pub const FLASH_INTERVAL_US: Micros = 50_000;

/// Poll loop period (ms). Must stay a small fraction of the debounce
/// window so no transition is missed across all ten channels.
pub const POLL_PERIOD_MS: u64 = 2;

// Stations

/// One station per decimal digit, zero through nine.
pub const NUM_BUTTONS: usize = 10;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// degraded to `AnyPin` in `main.rs`.  Adjust for your custom PCB.
//
//   Station    0      1      2      3      4      5      6      7      8      9
//   BUTTON   P0.02  P0.03  P0.04  P0.05  P0.28  P0.29  P0.30  P0.31  P1.10  P1.11
//   LED      P0.13  P0.14  P0.15  P0.16  P0.17  P0.19  P0.20  P0.21  P0.22  P0.23
//
//   Start control  → P0.11
//   Stop control   → P0.12
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Debounce time for the start/stop control buttons (ms).
pub const CONTROL_DEBOUNCE_MS: u64 = 50;

// Reference data

/// The digits of π, most significant first, as an ASCII string.
///
/// 501 digits: the leading 3 plus 500 decimals. At competition pace a
/// 3-minute match consumes a few hundred at most, so the cursor cannot
/// run off the end in a real match.
pub const PI_DIGITS: &str = concat!(
    "3",
    "1415926535897932384626433832795028841971693993751058209749445923078164",
    "0628620899862803482534211706798214808651328230664709384460955058223172",
    "5359408128481117450284102701938521105559644622948954930381964428810975",
    "6659334461284756482337867831652712019091456485669234603486104543266482",
    "1339360726024914127372458700660631558817488152092096282925409171536436",
    "7892590360011330530548820466521384146951941511609433057270365759591953",
    "0921861173819326117931051185480744623799627495673518857527248912279381",
    "8301194912",
);
