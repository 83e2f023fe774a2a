//! Configuration models and loaders for the cislunar transfer scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Full scenario: scene layout, the two sites, solver tunables, clock, and mission pacing.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: String,
    pub clock: ClockConfig,
    pub bodies: BodiesConfig,
    pub launch_site: SiteConfig,
    pub landing_site: SiteConfig,
    pub solver: SolverSettings,
    pub mission: MissionDurations,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "Earth-Moon shuttle".to_string(),
            clock: ClockConfig::default(),
            bodies: BodiesConfig::default(),
            launch_site: SiteConfig {
                name: "CAPE".to_string(),
                latitude_deg: 28.5,
                longitude_deg: -80.6,
                radius: 2.0,
            },
            landing_site: SiteConfig {
                name: "TRANQUILITY".to_string(),
                latitude_deg: 0.67,
                longitude_deg: 23.47,
                radius: 0.5,
            },
            solver: SolverSettings::default(),
            mission: MissionDurations::default(),
        }
    }
}

/// Initial simulation speed.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub days_per_second: f64,
    pub multiplier: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            days_per_second: 0.1,
            multiplier: 1.0,
        }
    }
}

/// Scene layout in scene-distance units, with starting angles in degrees.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BodiesConfig {
    /// Primary's offset from the scene origin before its revolution is applied.
    pub primary_offset: [f64; 3],
    pub secondary_orbit_radius: f64,
    pub primary_revolution_deg: f64,
    pub primary_spin_deg: f64,
    pub secondary_revolution_deg: f64,
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            primary_offset: [30.0, 0.0, 0.0],
            secondary_orbit_radius: 8.0,
            primary_revolution_deg: 0.0,
            primary_spin_deg: 0.0,
            secondary_revolution_deg: 0.0,
        }
    }
}

/// Surface site record, as found in scenarios and site catalogs.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub radius: f64,
}

/// Parking-orbit traversal direction.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SenseConfig {
    Prograde,
    #[default]
    Retrograde,
}

/// Transfer solver tunables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverSettings {
    pub ascent_duration_days: f64,
    pub parking_radius: f64,
    pub ascent_segments: usize,
    pub parking_segments: usize,
    pub transfer_segments: usize,
    pub sense: SenseConfig,
    pub entry_lead_deg: f64,
    pub iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            ascent_duration_days: 0.02,
            parking_radius: 4.0,
            ascent_segments: 24,
            parking_segments: 64,
            transfer_segments: 128,
            sense: SenseConfig::Retrograde,
            entry_lead_deg: 30.0,
            iterations: 3,
        }
    }
}

/// Real-second pacing of the mission lifecycle stages.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MissionDurations {
    pub ascent_s: f64,
    pub park_s: f64,
    pub transfer_s: f64,
    pub arrival_s: f64,
}

impl Default for MissionDurations {
    fn default() -> Self {
        Self {
            ascent_s: 2.0,
            park_s: 1.5,
            transfer_s: 2.5,
            arrival_s: 1.0,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site '{0}' not found in catalog")]
    SiteNotFound(String),
}

/// Load a scenario from a TOML or YAML file (chosen by extension).
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let scenario: ScenarioConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    info!("loaded scenario '{}' from {}", scenario.name, path.display());
    Ok(scenario)
}

/// Load a site catalog: a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    let sites: Vec<SiteConfig> = load_records(path.as_ref())?;
    info!("loaded {} sites from {}", sites.len(), path.as_ref().display());
    Ok(sites)
}

/// Case-insensitive lookup by site name.
pub fn find_site<'a>(sites: &'a [SiteConfig], name: &str) -> Result<&'a SiteConfig, ConfigError> {
    let upper = name.to_uppercase();
    sites
        .iter()
        .find(|site| site.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::SiteNotFound(name.to_string()))
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
