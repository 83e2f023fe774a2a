use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cislunar::config::{ScenarioConfig, find_site, load_scenario, load_sites};
use cislunar::core::angle::TraversalSense;
use cislunar::core::units::rad_to_deg;
use cislunar::export::snapshot::{self, Anchors, Snapshot, Timings};
use cislunar::transfer::scenario;
use cislunar::transfer::{TransferGeometry, solve_into};
use log::info;

/// Solve the anchored Earth–Moon transfer at a single simulated instant.
#[derive(Parser, Debug)]
#[command(author, version, about = "Anchored Earth-Moon transfer solver")]
struct Cli {
    /// Scenario file (TOML or YAML)
    #[arg(long, default_value = "configs/scenario.toml")]
    scenario: PathBuf,

    /// Site catalog used by --from/--to
    #[arg(long, default_value = "configs/sites.yaml")]
    sites: PathBuf,

    /// Launch site name from the catalog (defaults to the scenario's)
    #[arg(long)]
    from: Option<String>,

    /// Landing site name from the catalog (defaults to the scenario's)
    #[arg(long)]
    to: Option<String>,

    /// Simulated days to advance the scene before solving
    #[arg(long, default_value_t = 0.0)]
    days: f64,

    /// Simulation speed in days per second (clamped to [0, 5])
    #[arg(long)]
    speed: Option<f64>,

    /// Parking-orbit traversal direction
    #[arg(long, value_enum)]
    sense: Option<SenseArg>,

    /// Fixed-point iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Write a JSON snapshot of the solve ('-' for stdout)
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SenseArg {
    Prograde,
    Retrograde,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = load_scenario(&cli.scenario)?;
    apply_site_overrides(&mut config, &cli)?;

    let mut clock = scenario::clock(&config.clock);
    if let Some(speed) = cli.speed {
        clock.set_days_per_second(speed);
    }
    let mut solver = scenario::solver_config(&config.solver);
    if let Some(sense) = cli.sense {
        solver.sense = match sense {
            SenseArg::Prograde => TraversalSense::Prograde,
            SenseArg::Retrograde => TraversalSense::Retrograde,
        };
    }
    if let Some(iterations) = cli.iterations {
        solver.iterations = iterations;
    }

    let mut scene = scenario::scene(&config);
    scene.advance_days(cli.days);
    let inputs = scene.transfer_inputs(&clock);

    let mut geometry = TransferGeometry::for_config(&solver);
    let plan = solve_into(&inputs, &solver, None, &mut geometry);

    println!("=== Anchored Transfer ===");
    println!("Scenario        : {}", config.name);
    println!(
        "Route           : {} -> {}",
        scene.launch.name, scene.landing.name
    );
    println!(
        "Sim time        : {:.3} days (speed {} days/s)",
        scene.elapsed_days(),
        clock.speed_label()
    );
    println!("Ascent          : {:.4} days", plan.ascent_days);
    println!(
        "Parking wait    : {:.4} days, sweep = {:.2} deg",
        plan.wait_days,
        rad_to_deg(plan.sweep)
    );
    println!("Time of flight  : {:.4} days", plan.time_of_flight_days);
    match clock.real_seconds(plan.total_days) {
        Some(seconds) => println!(
            "Total           : {:.4} days ({:.1} s at current speed)",
            plan.total_days, seconds
        ),
        None => println!("Total           : {:.4} days (clock paused)", plan.total_days),
    }
    println!(
        "Burn direction  : {:.2} deg, e = {:.4}, mu = {:.4}",
        rad_to_deg(plan.burn.angle),
        plan.eccentricity,
        plan.mu
    );
    println!(
        "Geometry        : ascent {} pts, parking {} pts, transfer {} pts",
        geometry.ascent.len(),
        geometry.parking.len(),
        geometry.transfer.len()
    );

    if let Some(path) = &cli.snapshot {
        let snap = Snapshot {
            scenario: &config.name,
            launch_site: &scene.launch.name,
            landing_site: &scene.landing.name,
            sim_days: scene.elapsed_days(),
            timings: Timings {
                ascent_days: plan.ascent_days,
                wait_days: plan.wait_days,
                time_of_flight_days: plan.time_of_flight_days,
                total_days: plan.total_days,
                total_real_seconds: clock.real_seconds(plan.total_days),
            },
            anchors: Anchors {
                launch_angle_rad: plan.launch_angle,
                entry_angle_rad: plan.entry_angle,
                burn_angle_rad: plan.burn.angle,
                sweep_rad: plan.sweep,
                sense: match plan.sense {
                    TraversalSense::Prograde => "prograde",
                    TraversalSense::Retrograde => "retrograde",
                },
                mu: plan.mu,
                parking_radius: plan.parking_radius,
                arrival_radius: plan.arrival_radius,
                eccentricity: plan.eccentricity,
            },
            ascent: &geometry.ascent,
            parking: &geometry.parking,
            transfer: &geometry.transfer,
        };
        snapshot::write(path, &snap)?;
        info!("snapshot written to {}", path.display());
    }

    Ok(())
}

fn apply_site_overrides(config: &mut ScenarioConfig, cli: &Cli) -> anyhow::Result<()> {
    if cli.from.is_none() && cli.to.is_none() {
        return Ok(());
    }
    let sites = load_sites(&cli.sites)?;
    if let Some(name) = &cli.from {
        config.launch_site = find_site(&sites, name)?.clone();
    }
    if let Some(name) = &cli.to {
        config.landing_site = find_site(&sites, name)?.clone();
    }
    Ok(())
}
