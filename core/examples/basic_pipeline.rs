// enumerable/examples/basic_pipeline.rs

use enumerable::{transform, Enumerable, EnumerableResult};
use tracing::info;

// 1. Define the element type the pipeline works on
#[derive(Clone, Debug)]
struct Reading {
  sensor: &'static str,
  celsius: f64,
}

fn main() -> EnumerableResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Pipeline Example ---");

  let readings = Enumerable::new(vec![
    Reading { sensor: "boiler", celsius: 81.5 },
    Reading { sensor: "attic", celsius: -3.0 },
    Reading { sensor: "cellar", celsius: 11.25 },
    Reading { sensor: "garage", celsius: 4.0 },
    Reading { sensor: "roof", celsius: -12.5 },
  ]);

  // 2. Chain deferred stages; nothing runs yet
  let calibrated = readings.map(|mut r| {
    r.celsius += 0.5;
    r
  });
  let above_freezing = calibrated.filter(|r| r.celsius > 0.0);
  info!(pending = above_freezing.pending_stages(), "Stages recorded.");

  // 3. Reuse the shared prefix in separate branches
  let last_two = above_freezing.take(-2);
  let coldest_first = calibrated.skip_while(|r| r.celsius > 0.0).take_while(|r| r.celsius < 0.0);

  info!("Last two above freezing: {:?}", last_two.to_list());
  info!("First run of sub-zero readings: {:?}", coldest_first.to_list());

  // 4. Query operators force evaluation
  let warmest = above_freezing.reduce(|a, b| if a.celsius >= b.celsius { a } else { b })?;
  info!(sensor = warmest.sensor, celsius = warmest.celsius, "Warmest reading.");
  info!(any_boiling = calibrated.any(|r| r.celsius >= 100.0), "Boiling check.");

  // 5. Changing the element type evaluates eagerly
  let labels = transform(&above_freezing.reverse(), |r| format!("{}={:.1}C", r.sensor, r.celsius));
  labels.for_each(|label| info!("{}", label));

  Ok(())
}
