//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod timeline {
    //! One CSV row per simulated frame.

    use std::io::{self, Write};

    const HEADER: &str = "frame,real_time_s,sim_days,days_per_second,stage,wait_days,tof_days,total_days,sweep_rad,burn_angle_rad,parking_points";

    /// Write the standard timeline CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the timeline exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub frame: usize,
        pub real_time_s: f64,
        pub sim_days: f64,
        pub days_per_second: f64,
        pub stage: &'a str,
        pub wait_days: f64,
        pub tof_days: f64,
        pub total_days: f64,
        pub sweep_rad: f64,
        pub burn_angle_rad: f64,
        pub parking_points: usize,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.4},{:.6},{:.1},{},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
                self.frame,
                self.real_time_s,
                self.sim_days,
                self.days_per_second,
                self.stage,
                self.wait_days,
                self.tof_days,
                self.total_days,
                self.sweep_rad,
                self.burn_angle_rad,
                self.parking_points,
            )
        }
    }
}

pub mod points {
    //! Flat CSV dump of arc point sequences, one row per point.

    use std::io::{self, Write};

    const HEADER: &str = "frame,arc,index,x,y,z";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Append every point of `arc` under the given label.
    pub fn write_arc(
        writer: &mut dyn Write,
        frame: usize,
        arc: &str,
        points: &[[f64; 3]],
    ) -> io::Result<()> {
        for (index, p) in points.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{:.6},{:.6},{:.6}",
                frame, arc, index, p[0], p[1], p[2]
            )?;
        }
        Ok(())
    }
}

pub mod snapshot {
    //! Pretty-printed JSON snapshot of a single solve.

    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Scalar results of a solve.
    #[derive(Debug, Clone, Serialize)]
    pub struct Timings {
        pub ascent_days: f64,
        pub wait_days: f64,
        pub time_of_flight_days: f64,
        pub total_days: f64,
        /// Real seconds until arrival at the current speed; absent while paused.
        pub total_real_seconds: Option<f64>,
    }

    /// Geometric anchors of a solve.
    #[derive(Debug, Clone, Serialize)]
    pub struct Anchors {
        pub launch_angle_rad: f64,
        pub entry_angle_rad: f64,
        pub burn_angle_rad: f64,
        pub sweep_rad: f64,
        pub sense: &'static str,
        pub mu: f64,
        pub parking_radius: f64,
        pub arrival_radius: f64,
        pub eccentricity: f64,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Snapshot<'a> {
        pub scenario: &'a str,
        pub launch_site: &'a str,
        pub landing_site: &'a str,
        pub sim_days: f64,
        pub timings: Timings,
        pub anchors: Anchors,
        pub ascent: &'a [[f64; 3]],
        pub parking: &'a [[f64; 3]],
        pub transfer: &'a [[f64; 3]],
    }

    /// Write the snapshot to `path` (`-` for stdout).
    pub fn write(path: &Path, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        to_writer_pretty(&mut writer, snapshot)?;
        writeln!(writer)?;
        writer.flush()
    }
}
