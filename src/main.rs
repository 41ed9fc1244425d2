use nbsim::{bench_step, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name under the crate's scenarios/ directory
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 100)]
    steps: u64,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Logger::init(filter).expect("logger is installed once");

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        "running {} bodies for {} steps",
        scenario.ensemble.len(),
        args.steps
    );

    for i in 0..args.steps {
        scenario.step().with_context(|| format!("step {}", i + 1))?;
    }

    info!("done at t = {}", scenario.ensemble.t());
    scenario.ensemble.dump_bodies();

    print!("{}", scenario.ensemble);

    Ok(())
}

struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    fn init(filter: LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(filter))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!(
                "|{}| {} -- {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
