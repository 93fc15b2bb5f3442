//! Identifier Generation
//!
//! Opaque string ids from a millisecond clock. A process-wide monotonic
//! guard keeps ids unique even when several are minted in the same
//! millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Mint a fresh unique id
pub fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(observed) => prev = observed,
        }
    }
}

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's date as YYYY/MM/DD
pub fn today() -> String {
    Utc::now().format("%Y/%m/%d").to_string()
}
