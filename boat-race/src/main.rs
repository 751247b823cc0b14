use docopt::Docopt;
use serde::Deserialize;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use boat_race::{run, Config, GROUPS};

const USAGE: &str = "
Boat race: count the button-charge times that beat each record.

Prints one line per race group: the product of the winning-charge counts of its races.

Usage:
  boat-race [options]
  boat-race (-h | --help)

Options:
  -h, --help         Show this screen.
  --method=<method>  Counting method, epsilon or exact [default: epsilon].
  --verify           Check every count against brute-force enumeration.
  -v, --verbose      Log each race's roots and count to stderr.
";

#[derive(Debug, Deserialize)]
struct Args {
  flag_method: String,
  flag_verify: bool,
  flag_verbose: bool,
}

fn main() {
  if let Err(error) = run_with_arguments() {
    eprintln!("boat-race: {}", error);
    process::exit(1);
  }
}

fn run_with_arguments() -> Result<(), failure::Error> {
  let arguments: Args = Docopt::new(USAGE)
    .and_then(|d| d.deserialize())
    .unwrap_or_else(|e| e.exit());

  // RUST_LOG takes precedence over --verbose
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(if arguments.flag_verbose {
      "debug"
    } else {
      "warn"
    })
  });
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let config = Config {
    method: arguments.flag_method.parse()?,
    verify: arguments.flag_verify,
  };
  info!(?config, "boat-race v{}", env!("CARGO_PKG_VERSION"));

  for value in run(&GROUPS, &config)? {
    println!("{}", value);
  }
  Ok(())
}
