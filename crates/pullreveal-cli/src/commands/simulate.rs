use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use pullreveal_core::{
    AppConfig, Direction, ListScrollState, LoadGestureController, Phase, PointerEvent,
    RevealEvent, ScrollSource, ScrollTarget,
};

/// Region extent used by the replay
const EXTENT: i32 = 40;

const FRAME: Duration = Duration::from_millis(16);

/// Frames allowed per transition before the replay gives up
const MAX_FRAMES: usize = 1000;

/// A list too short to scroll in either direction
struct ShortList;

impl ScrollTarget for ShortList {
    fn can_scroll_beyond(&self, _direction: Direction) -> bool {
        false
    }
}

#[derive(Debug, Serialize)]
struct Record {
    t_ms: u64,
    step: &'static str,
    phase: String,
    position: i32,
    loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<RevealEvent>,
}

struct Replay {
    controller: LoadGestureController,
    list: ShortList,
    elapsed: Duration,
    json: bool,
    events: usize,
}

impl Replay {
    fn new(config: &AppConfig, json: bool) -> Self {
        let mut controller = LoadGestureController::new(&config.reveal);
        controller.on_layout(EXTENT, EXTENT);
        Self {
            controller,
            list: ShortList,
            elapsed: Duration::ZERO,
            json,
            events: 0,
        }
    }

    fn emit(&self, step: &'static str, event: Option<RevealEvent>) -> Result<()> {
        let record = Record {
            t_ms: self.elapsed.as_millis() as u64,
            step,
            phase: format!("{:?}", self.controller.phase()),
            position: self.controller.position(),
            loading: self.controller.is_loading(),
            event,
        };
        if self.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            let event = record
                .event
                .map(|e| format!("  -> {:?}", e))
                .unwrap_or_default();
            println!(
                "{:>6}ms  {:<10} {:<26} pos={:>3} loading={}{}",
                record.t_ms, record.step, record.phase, record.position, record.loading, event
            );
        }
        Ok(())
    }

    /// Tick until the running transition finishes
    fn run_transition(&mut self) -> Result<()> {
        for _ in 0..MAX_FRAMES {
            if !self.controller.is_animating() {
                return Ok(());
            }
            let event = self.controller.tick(FRAME);
            self.elapsed += FRAME;
            if event.is_some() {
                self.events += 1;
            }
            self.emit("tick", event)?;
        }
        anyhow::bail!("transition did not finish within {} frames", MAX_FRAMES)
    }

    /// Pull the top region open with a 20 unit drag
    fn drag_top(&mut self) -> Result<()> {
        self.controller
            .on_pointer_event(PointerEvent::Down { y: 0.0 }, &self.list);
        self.controller.on_scroll_state_changed(ListScrollState::Dragging, &self.list);
        self.controller.on_start_nested_scroll(ScrollSource::Touch);
        self.emit("down", None)?;

        self.controller
            .on_pointer_event(PointerEvent::Move { y: 20.0 }, &self.list);
        let mut consumed = 0;
        self.controller
            .on_nested_pre_scroll(-20, &mut consumed, &self.list);
        self.controller.on_scrolled(-20 - consumed);
        self.emit("move", None)?;

        self.controller.on_pointer_event(PointerEvent::Up, &self.list);
        self.controller.on_stop_nested_scroll();
        self.controller.on_scroll_state_changed(ListScrollState::Idle, &self.list);
        self.emit("up", None)
    }
}

pub fn run(config: &AppConfig, start: Option<&str>, json: bool) -> Result<()> {
    let start = start.map(str::parse::<Direction>).transpose()?;
    let mut replay = Replay::new(config, json);
    replay.emit("layout", None)?;

    match start {
        Some(direction) => {
            replay.controller.start_loading(direction);
            replay.emit("start", None)?;
        }
        None => replay.drag_top()?,
    }
    replay.run_transition()?;

    if !matches!(replay.controller.phase(), Phase::Active(_)) {
        tracing::warn!(phase = ?replay.controller.phase(), "No region was revealed");
        return Ok(());
    }

    replay.controller.stop_loading(true);
    replay.emit("stop", None)?;
    replay.run_transition()?;

    tracing::info!(events = replay.events, "Replay finished");
    Ok(())
}
