// enumerable/examples/error_handling.rs

use anyhow::{anyhow, Context};
use enumerable::{Enumerable, EnumerableError, Sequence, Workers};
use tracing::{error, info};

fn parse_port(raw: String) -> anyhow::Result<String> {
  let port: u16 = raw.parse().with_context(|| format!("'{}' is not a port number", raw))?;
  if port < 1024 {
    return Err(anyhow!("port {} is privileged", port));
  }
  Ok(port.to_string())
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Error Handling Example ---");

  // Reduce has no seed on an empty sequence and reports it instead of defaulting.
  match Enumerable::new(vec![3, 5, 7]).filter(|x| x % 2 == 0).reduce(|a, b| a + b) {
    Err(EnumerableError::EmptySequence) => info!("No even numbers to add up."),
    other => info!("Unexpected: {:?}", other),
  }

  // Non-positive worker counts are rejected up front.
  if let Err(e) = Workers::new(0) {
    error!(error = %e, "Rejected worker count.");
  }

  // Fallible parallel work: every element is still processed, the lowest failing index is reported.
  let ports = Sequence::new(vec!["8080".to_string(), "80".to_string(), "http".to_string()]);
  match ports.try_map_parallel(parse_port, Workers::default()) {
    Ok(parsed) => info!("Parsed ports: {:?}", parsed),
    Err(EnumerableError::Callback { index, source }) => error!(index, error = %source, "Port validation failed."),
    Err(other) => return Err(other.into()),
  }

  let valid = Enumerable::from(ports.clone())
    .skip(-2)
    .to_sequence()
    .try_map_parallel(parse_port, Workers::single())?;
  info!("Valid ports: {:?}", valid);

  Ok(())
}
