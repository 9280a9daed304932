use crate::defines::*;
use crate::errors::Error;

use std::fmt::Write;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Milliseconds since unix epoch, as used by `timestamp` of signed requests.
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Lowercase hex representation of `bytes`.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

pub fn measure_start(start: &mut Instant) {
    *start = Instant::now();
}

/// Print time elapsed since `start` if `print` is true.
pub fn measure_end(start: &Instant, print: bool) {
    if print {
        println!("   (elapsed {:.3}s)", start.elapsed().as_secs_f64());
    }
}

/// Print user-readable message for `e`.
/// User abort is not an error from user's point of view, so it doesn't get
/// the error marker.
pub fn print_error_if_necessary(e: &Error) {
    match e {
        Error::UserAbort => println!("   Cancelled by user"),
        Error::Configuration(_) => {
            println!("❌ {}", e);
            println!();
            println!("💡 Quick fix:");
            println!("   1. Get Testnet API keys from: {}", TESTNET_KEYS_URL);
            println!("   2. Add them to .env file as {} and {}", API_KEY_ENV, API_SECRET_ENV);
        }
        _ => println!("❌ {}", e),
    }
}
