//! Mission lifecycle: idle → ascent → park sweep → transfer → arrival → idle.
//!
//! Stage changes are driven purely by elapsed wall-clock time against fixed
//! per-stage durations. The caller passes `now` explicitly, which keeps the
//! state machine deterministic under test.

use log::{debug, info};

/// Stage of a mission in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStage {
    Idle,
    Ascent,
    ParkSweep,
    Transfer,
    Arrival,
}

impl MissionStage {
    pub fn label(self) -> &'static str {
        match self {
            MissionStage::Idle => "idle",
            MissionStage::Ascent => "ascent",
            MissionStage::ParkSweep => "parkSweep",
            MissionStage::Transfer => "transfer",
            MissionStage::Arrival => "arrival",
        }
    }

    /// Stage entered once this one's time is up.
    pub fn next(self) -> MissionStage {
        match self {
            MissionStage::Idle => MissionStage::Idle,
            MissionStage::Ascent => MissionStage::ParkSweep,
            MissionStage::ParkSweep => MissionStage::Transfer,
            MissionStage::Transfer => MissionStage::Arrival,
            MissionStage::Arrival => MissionStage::Idle,
        }
    }
}

impl std::fmt::Display for MissionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Real-second duration of each active stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageDurations {
    pub ascent_s: f64,
    pub park_s: f64,
    pub transfer_s: f64,
    pub arrival_s: f64,
}

impl StageDurations {
    pub fn for_stage(&self, stage: MissionStage) -> Option<f64> {
        match stage {
            MissionStage::Idle => None,
            MissionStage::Ascent => Some(self.ascent_s),
            MissionStage::ParkSweep => Some(self.park_s),
            MissionStage::Transfer => Some(self.transfer_s),
            MissionStage::Arrival => Some(self.arrival_s),
        }
    }
}

impl Default for StageDurations {
    fn default() -> Self {
        Self {
            ascent_s: 2.0,
            park_s: 1.5,
            transfer_s: 2.5,
            arrival_s: 1.0,
        }
    }
}

/// Notifications produced for UI/status collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionEvent {
    Launch,
    Started,
    /// Transfer geometry should be recomputed now.
    Refresh,
    Status(String),
    Completed,
}

impl MissionEvent {
    /// Channel name the event is published under.
    pub fn topic(&self) -> &'static str {
        match self {
            MissionEvent::Launch => "mission:launch",
            MissionEvent::Started => "mission:started",
            MissionEvent::Refresh => "missions:refresh",
            MissionEvent::Status(_) => "panel:status",
            MissionEvent::Completed => "mission:completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveMission {
    from: String,
    to: String,
    stage: MissionStage,
    stage_started_s: f64,
}

/// Owns at most one mission in flight.
#[derive(Debug, Clone, Default)]
pub struct MissionControl {
    durations: StageDurations,
    active: Option<ActiveMission>,
}

impl MissionControl {
    pub fn new(durations: StageDurations) -> Self {
        Self {
            durations,
            active: None,
        }
    }

    pub fn stage(&self) -> MissionStage {
        self.active
            .as_ref()
            .map_or(MissionStage::Idle, |mission| mission.stage)
    }

    /// Start a mission at `now_s`. Ignored (no events) while another mission is in flight.
    pub fn launch(&mut self, from: &str, to: &str, now_s: f64) -> Vec<MissionEvent> {
        if let Some(active) = &self.active {
            debug!("launch ignored: mission already in {} stage", active.stage);
            return Vec::new();
        }
        info!("mission launched: {from} -> {to}");
        self.active = Some(ActiveMission {
            from: from.to_string(),
            to: to.to_string(),
            stage: MissionStage::Ascent,
            stage_started_s: now_s,
        });
        vec![
            MissionEvent::Launch,
            MissionEvent::Started,
            MissionEvent::Status("Mission started: ascent".to_string()),
        ]
    }

    /// Advance the state machine to `now_s`, returning the events raised on this tick.
    pub fn tick(&mut self, now_s: f64) -> Vec<MissionEvent> {
        let Some(mission) = self.active.as_mut() else {
            return Vec::new();
        };
        let elapsed = now_s - mission.stage_started_s;
        let mut events = vec![MissionEvent::Refresh];

        events.push(MissionEvent::Status(match mission.stage {
            MissionStage::Ascent => format!("Ascent · {elapsed:.1}s"),
            MissionStage::ParkSweep => "Park sweep: aligning".to_string(),
            MissionStage::Transfer => "En route: transfer".to_string(),
            MissionStage::Arrival => "Arriving...".to_string(),
            MissionStage::Idle => String::new(),
        }));

        let limit = self
            .durations
            .for_stage(mission.stage)
            .unwrap_or(f64::INFINITY);
        if elapsed < limit {
            return events;
        }

        let next = mission.stage.next();
        debug!("mission stage {} -> {next}", mission.stage);
        match next {
            MissionStage::Idle => {
                info!("mission complete: {} -> {}", mission.from, mission.to);
                self.active = None;
                events.push(MissionEvent::Status("Mission complete".to_string()));
                events.push(MissionEvent::Completed);
            }
            stage => {
                mission.stage = stage;
                mission.stage_started_s = now_s;
                events.push(MissionEvent::Status(
                    match stage {
                        MissionStage::ParkSweep => "In parking orbit: sweeping for burn",
                        MissionStage::Transfer => "Transfer burn: on trajectory",
                        _ => "Arrival: descent",
                    }
                    .to_string(),
                ));
            }
        }
        events
    }
}
