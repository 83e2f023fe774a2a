use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use cislunar::config::load_scenario;
use cislunar::export::{self, points, timeline};
use cislunar::transfer::scenario;
use cislunar::transfer::{
    BurnDirection, MissionControl, MissionEvent, TransferGeometry, solve_into,
};
use log::{debug, info};

/// Run the frame loop: advance the bodies, drive one mission, and re-solve the transfer every frame.
#[derive(Parser, Debug)]
#[command(author, version, about = "Frame-driven Earth-Moon transfer simulation")]
struct Cli {
    /// Scenario file (TOML or YAML)
    #[arg(long, default_value = "configs/scenario.toml")]
    scenario: PathBuf,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Frames per real second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Simulation speed in days per second (clamped to [0, 5])
    #[arg(long)]
    speed: Option<f64>,

    /// Real time (seconds) at which the mission is launched; omit to never launch
    #[arg(long)]
    launch_at: Option<f64>,

    /// Per-frame timeline CSV ('-' for stdout)
    #[arg(long, default_value = "artifacts/timeline.csv")]
    timeline: PathBuf,

    /// Optional CSV dump of the arc points
    #[arg(long)]
    points: Option<PathBuf>,

    /// Dump arc points every N frames
    #[arg(long, default_value_t = 30)]
    points_every: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.fps <= 0.0 {
        return Err(anyhow!("fps must be positive"));
    }
    let config = load_scenario(&cli.scenario)?;

    let mut clock = scenario::clock(&config.clock);
    if let Some(speed) = cli.speed {
        clock.set_days_per_second(speed);
    }
    let solver = scenario::solver_config(&config.solver);
    let mut scene = scenario::scene(&config);
    let mut missions = MissionControl::new(scenario::stage_durations(&config.mission));

    let mut timeline_out = export::writer_for_path(&cli.timeline)?;
    timeline::write_header(&mut *timeline_out)?;
    let mut points_out = match &cli.points {
        Some(path) => {
            let mut writer = export::writer_for_path(path)?;
            points::write_header(&mut *writer)?;
            Some(writer)
        }
        None => None,
    };

    let dt = 1.0 / cli.fps;
    let mut geometry = TransferGeometry::for_config(&solver);
    let mut previous: Option<BurnDirection> = None;
    let mut launched = false;
    let mut refreshes = 0usize;
    let mut completed = 0usize;

    for frame in 0..cli.frames {
        let now = frame as f64 * dt;
        if frame > 0 {
            scene.advance(dt, &clock);
        }

        let mut events = Vec::new();
        if !launched && cli.launch_at.is_some_and(|t| now >= t) {
            launched = true;
            events.extend(missions.launch(&scene.launch.name, &scene.landing.name, now));
        }
        events.extend(missions.tick(now));
        for event in &events {
            match event {
                MissionEvent::Refresh => refreshes += 1,
                MissionEvent::Completed => completed += 1,
                MissionEvent::Status(text) => info!("[{}] {}", event.topic(), text),
                other => debug!("[{}] {:?}", other.topic(), other),
            }
        }

        let inputs = scene.transfer_inputs(&clock);
        let plan = solve_into(&inputs, &solver, previous, &mut geometry);
        previous = Some(plan.burn);

        timeline::Record {
            frame,
            real_time_s: now,
            sim_days: scene.elapsed_days(),
            days_per_second: clock.days_per_second(),
            stage: missions.stage().label(),
            wait_days: plan.wait_days,
            tof_days: plan.time_of_flight_days,
            total_days: plan.total_days,
            sweep_rad: plan.sweep,
            burn_angle_rad: plan.burn.angle,
            parking_points: geometry.parking.len(),
        }
        .write_to(&mut *timeline_out)?;

        if let Some(writer) = points_out.as_mut() {
            if cli.points_every > 0 && frame % cli.points_every == 0 {
                points::write_arc(&mut **writer, frame, "ascent", &geometry.ascent)?;
                points::write_arc(&mut **writer, frame, "parking", &geometry.parking)?;
                points::write_arc(&mut **writer, frame, "transfer", &geometry.transfer)?;
            }
        }
    }

    timeline_out.flush()?;
    if let Some(mut writer) = points_out {
        writer.flush()?;
    }

    println!("=== Simulation Summary ===");
    println!("Frames          : {}", cli.frames);
    println!("Simulated time  : {:.3} days", scene.elapsed_days());
    println!("Refresh events  : {}", refreshes);
    println!("Missions done   : {}", completed);
    println!("Final stage     : {}", missions.stage());
    Ok(())
}
