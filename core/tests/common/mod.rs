// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use enumerable::Enumerable;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::thread;
use std::time::Duration;
use tracing::Level;

// --- Common Element Types ---
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order {
  pub id: u32,
  pub customer: String,
  pub total_cents: u64,
}

pub fn sample_orders() -> Vec<Order> {
  vec![
    Order { id: 1, customer: "ada".to_string(), total_cents: 1_250 },
    Order { id: 2, customer: "grace".to_string(), total_cents: 99 },
    Order { id: 3, customer: "ada".to_string(), total_cents: 40_000 },
    Order { id: 4, customer: "linus".to_string(), total_cents: 7_500 },
  ]
}

pub fn numbers(range: std::ops::RangeInclusive<i32>) -> Enumerable<i32> {
  range.collect()
}

// --- Common Callback Creators ---

/// Doubles its input, sleeping first when the input equals `slow_value`.
/// Used to force out-of-order completion across workers.
pub fn delayed_double(slow_value: i32, delay: Duration) -> impl Fn(i32) -> i32 + Send + Sync + 'static {
  move |x| {
    if x == slow_value {
      thread::sleep(delay);
    }
    x * 2
  }
}

/// Returns a mapper that counts its invocations in `counter`.
pub fn counting_increment(counter: Arc<AtomicUsize>) -> impl Fn(i32) -> i32 + Send + Sync + 'static {
  move |x| {
    counter.fetch_add(1, Ordering::SeqCst);
    x + 1
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
