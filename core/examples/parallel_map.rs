// enumerable/examples/parallel_map.rs

use enumerable::{transform_parallel, Enumerable, EnumerableResult, Workers};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

fn checksum(block: u32) -> u32 {
  // Stand-in for slow per-element work; odd blocks take longer.
  thread::sleep(Duration::from_millis(if block % 2 == 1 { 30 } else { 5 }));
  block.wrapping_mul(2_654_435_761)
}

fn main() -> EnumerableResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Parallel Map Example ---");

  let blocks: Enumerable<u32> = (0..24).collect();
  let workers = Workers::new(6)?;

  let started = Instant::now();
  let sequential = blocks.map(checksum).to_list();
  info!(elapsed_ms = started.elapsed().as_millis() as u64, "Sequential map done.");

  let started = Instant::now();
  let parallel = blocks.map_parallel(checksum, workers).to_list();
  info!(
    elapsed_ms = started.elapsed().as_millis() as u64,
    workers = workers.get(),
    "Parallel map done."
  );
  assert_eq!(sequential, parallel, "parallel output must keep input order");

  let hex = transform_parallel(&blocks.take(4), |b| format!("{:08x}", checksum(b)), Workers::default());
  info!("First four checksums: {:?}", hex.to_list());

  Ok(())
}
