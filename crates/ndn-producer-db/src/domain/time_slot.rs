//! # Time-Slot Quantization
//!
//! Content keys rotate hourly, so every operation on the database first
//! maps its millisecond timestamp to the index of the hour bucket it falls
//! in.

/// Milliseconds in one hour.
pub const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// Map a millisecond-since-epoch timestamp to its hourly bucket index.
///
/// Computes `floor(round(t) / 3_600_000)`: the timestamp is first snapped
/// to the nearest millisecond (absorbing sub-millisecond floating input),
/// then divided into hours, flooring toward negative infinity so
/// pre-epoch timestamps land in negative buckets.
///
/// Pure and total over finite inputs, and monotonic non-decreasing.
/// Non-finite inputs are outside the contract: the float-to-int conversion
/// saturates, so the result is well-defined but meaningless. Callers are
/// expected to pass finite timestamps.
pub fn fixed_time_slot(time_slot_ms: f64) -> i64 {
    (time_slot_ms.round() / MILLISECONDS_PER_HOUR).floor() as i64
}
