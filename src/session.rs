//! Headless planning session over JSON lines.
//!
//! Each input line is one [`InputEvent`] in JSON. After every event the
//! current [`MapScene`] is written as one JSON line. Elevation lookups run
//! as tokio tasks and their results are applied between input events.

use std::io::Write;
use std::sync::Arc;

use linkplanner_core::{EventBus, EventFilter};
use linkplanner_designer::{FresnelCalculator, InputEvent, MapScene, MapSurface, PlannerState};
use linkplanner_elevation::{ElevationRequest, ElevationResponse, ElevationService};
use linkplanner_settings::{Config, StyleSettings};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// Pending lookups that may queue up before the session reads them.
const ELEVATION_CHANNEL_CAPACITY: usize = 16;

/// Writes scenes as JSON lines; warnings go to the log.
pub struct JsonLinesSurface<W: Write> {
    out: W,
    error: Option<std::io::Error>,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Surfaces the first write error, if any, and flushes.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_scene(&mut self, scene: &MapScene) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, scene)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> MapSurface for JsonLinesSurface<W> {
    fn render(&mut self, scene: &MapScene) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_scene(scene) {
            tracing::error!("Failed to write scene: {}", e);
            self.error = Some(e);
        }
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub events: usize,
    pub ignored: usize,
    pub scenes: usize,
    pub profiles_applied: usize,
    pub profiles_discarded: usize,
}

/// A planner plus everything needed to drive it from input lines.
pub struct Session {
    state: PlannerState,
    styles: StyleSettings,
    calculator: FresnelCalculator,
    summary: SessionSummary,
}

impl Session {
    pub fn new(config: &Config, elevation: Arc<dyn ElevationService>) -> linkplanner_core::Result<Self> {
        let events = Arc::new(EventBus::new());
        events.subscribe(EventFilter::All, |event| {
            tracing::debug!(target: "linkplanner::events", "[{}] {}", event.category(), event.description());
        });

        Ok(Self {
            state: PlannerState::from_config(config)?.with_event_bus(events),
            styles: config.styles.clone(),
            calculator: FresnelCalculator::new(elevation),
            summary: SessionSummary::default(),
        })
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    fn render(&mut self, surface: &mut impl MapSurface) {
        surface.render(&MapScene::project(&self.state, &self.styles));
        self.summary.scenes += 1;
    }

    /// Parses and applies one input line, then renders.
    ///
    /// Blank and malformed lines are skipped without rendering.
    pub fn handle_line(&mut self, line: &str, surface: &mut impl MapSurface) -> Option<ElevationRequest> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match serde_json::from_str::<InputEvent>(line) {
            Ok(event) => self.handle_event(event, surface),
            Err(e) => {
                tracing::warn!("Skipping malformed input {:?}: {}", line, e);
                self.summary.ignored += 1;
                None
            }
        }
    }

    /// Applies one input event and renders the result.
    pub fn handle_event(&mut self, event: InputEvent, surface: &mut impl MapSurface) -> Option<ElevationRequest> {
        self.summary.events += 1;
        let Some(command) = event.into_command() else {
            self.summary.ignored += 1;
            self.render(surface);
            return None;
        };

        let outcome = self.state.dispatch(command);
        for warning in outcome.warnings() {
            surface.warn(warning);
        }
        self.render(surface);
        outcome.elevation_request
    }

    /// Applies a finished lookup; stale ones are counted and dropped.
    pub fn handle_elevation(&mut self, response: ElevationResponse) -> bool {
        let link_id = response.link_id.clone();
        let range = elevation_range(&response.elevations);

        if self.state.apply_elevation_profile(response) {
            match range {
                Some((min, max)) => tracing::info!(
                    "Elevation profile for link {}: {:.0} m to {:.0} m",
                    link_id,
                    min,
                    max
                ),
                None => tracing::info!("Empty elevation profile for link {}", link_id),
            }
            self.summary.profiles_applied += 1;
            true
        } else {
            self.summary.profiles_discarded += 1;
            false
        }
    }

    /// Reads events until `input` ends, then waits for outstanding lookups.
    pub async fn run<R, S>(mut self, input: R, surface: &mut S) -> anyhow::Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        S: MapSurface,
    {
        let (tx, mut rx) = mpsc::channel::<ElevationResponse>(ELEVATION_CHANNEL_CAPACITY);
        let mut lines = input.lines();
        let mut input_open = true;
        let mut in_flight = 0usize;

        self.render(surface);

        while input_open || in_flight > 0 {
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let line = match line {
                        Ok(Some(line)) => line,
                        Ok(None) => {
                            tracing::debug!("Input closed with {} lookup(s) in flight", in_flight);
                            input_open = false;
                            continue;
                        }
                        // The undecodable line has already been consumed.
                        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                            tracing::warn!("Skipping undecodable input line: {}", e);
                            self.summary.ignored += 1;
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };
                    if let Some(request) = self.handle_line(&line, surface) {
                        in_flight += 1;
                        let calculator = self.calculator.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let response = calculator.resolve(request).await;
                            let _ = tx.send(response).await;
                        });
                    }
                }
                Some(response) = rx.recv(), if in_flight > 0 => {
                    in_flight -= 1;
                    self.handle_elevation(response);
                }
                else => break,
            }
        }

        Ok(self.summary)
    }
}

/// Lowest and highest elevation, or `None` for an empty profile.
fn elevation_range(elevations: &[f64]) -> Option<(f64, f64)> {
    let (first, rest) = elevations.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(lo, hi), e| (lo.min(*e), hi.max(*e))),
    )
}
