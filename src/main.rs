use bouncesim::{bench_step, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window and print the final state
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Time the stepper on generated scenes and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) {
    let mut contacts = 0;
    for _ in 0..steps {
        contacts += scenario.step_once().contacts;
    }
    info!("headless: {steps} steps, t = {:.3}s, {contacts} contacts", scenario.scene.t);

    for (i, b) in scenario.scene.bodies().iter().enumerate() {
        println!(
            "body {i:3}: x = ({:9.3}, {:9.3}), v = ({:9.3}, {:9.3}), r = {:.1}",
            b.x.x,
            b.x.y,
            b.v.x,
            b.v.y,
            b.radius()
        );
    }
}

#[cfg(feature = "viewer")]
fn run_windowed(scenario: Scenario) {
    bouncesim::run_2d(scenario);
}

#[cfg(not(feature = "viewer"))]
fn run_windowed(scenario: Scenario) {
    log::warn!("built without the `viewer` feature, running headless");
    run_headless(scenario, 600);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;

    if args.headless {
        run_headless(scenario, args.steps);
    } else {
        run_windowed(scenario);
    }

    Ok(())
}
