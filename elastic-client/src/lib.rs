use anyhow::{anyhow, bail, Context, Result};
use elastic_core::{CursorRig, HoverEdge, Magnet, PointerTracker, RegionSet, Vector2D};
use elastic_shared::{Position, PoseFrame, RegionDescriptor, Script, TransitionMessage};
use serde::Serialize;

/// Most sticky regions a script may declare
pub const MAX_REGIONS: usize = 16;

/// One line of replay output
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraceFrame {
    #[serde(flatten)]
    pub pose: PoseFrame,
    /// Offset of each sticky region's element, in script order
    pub magnets: Vec<Position>,
}

/// Replays a pointer script through the follower at a fixed frame cadence
pub struct Replay {
    rig: CursorRig,
    tracker: PointerTracker<MAX_REGIONS>,
    magnets: Vec<Magnet>,
    dt: f32,
    frames_per_sample: u32,
    frame: u64,
}

impl Replay {
    pub fn new(script: &Script, fps: f32, frames_per_sample: u32) -> Result<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            bail!("Frame rate must be a positive number, got {}", fps);
        }
        if frames_per_sample == 0 {
            bail!("At least one frame must be rendered per sample");
        }

        let config = script
            .settings
            .clone()
            .into_config()
            .context("Invalid follower settings")?;
        let magnet_config = script
            .magnet
            .clone()
            .into_config()
            .context("Invalid magnet settings")?;

        let mut regions = RegionSet::new();
        for descriptor in &script.regions {
            regions.add((*descriptor).into()).map_err(|_| {
                anyhow!("At most {} sticky regions are supported", MAX_REGIONS)
            })?;
        }

        let magnets = script
            .regions
            .iter()
            .map(|_| Magnet::new(magnet_config))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Replay ready: {} regions, {} fps, {} frames per sample",
            regions.len(),
            fps,
            frames_per_sample
        );

        Ok(Self {
            rig: CursorRig::new(config)?,
            tracker: PointerTracker::new(regions),
            magnets,
            dt: 1.0 / fps,
            frames_per_sample,
            frame: 0,
        })
    }

    /// Feeds one pointer sample, then renders the frames that follow it.
    pub fn feed(&mut self, sample: Position) -> Result<Vec<TraceFrame>> {
        let point: Vector2D = sample.into();

        match self.tracker.sample(point) {
            HoverEdge::Outside => {}
            HoverEdge::Enter { id, region } => {
                log::debug!("Pointer entered region {} at frame {}", id.0, self.frame);
                self.rig.hover_enter(region);
            }
            HoverEdge::Stay { region, .. } => self.rig.refresh_target(region),
            HoverEdge::Exit { id } => {
                log::debug!("Pointer left region {} at frame {}", id.0, self.frame);
                self.rig.hover_exit();
                self.magnets[id.0].release();
            }
            HoverEdge::Switch { from, to, region } => {
                log::debug!("Pointer moved from region {} to {}", from.0, to.0);
                self.magnets[from.0].release();
                self.rig.hover_enter(region);
            }
        }

        if let Some(id) = self.tracker.hovered() {
            if let Some(region) = self.tracker.regions().get(id) {
                self.magnets[id.0].pointer_move(point, region);
            }
        }

        if let Some(stuck) = self.rig.pointer_move(sample.x, sample.y) {
            let message = TransitionMessage::from(stuck.transition);
            log::debug!("Transition requested: {}", serde_json::to_string(&message)?);
        }

        Ok((0..self.frames_per_sample).map(|_| self.render()).collect())
    }

    /// Renders `frames` more frames without moving the pointer.
    pub fn settle(&mut self, frames: u32) -> Vec<TraceFrame> {
        (0..frames).map(|_| self.render()).collect()
    }

    pub fn run(&mut self, samples: &[Position], settle_frames: u32) -> Result<Vec<TraceFrame>> {
        let mut trace = Vec::new();
        for sample in samples {
            trace.extend(self.feed(*sample)?);
        }
        trace.extend(self.settle(settle_frames));
        Ok(trace)
    }

    fn render(&mut self) -> TraceFrame {
        let state = self.rig.frame(self.dt);
        let dt = self.dt;
        let magnets = self
            .magnets
            .iter_mut()
            .map(|magnet| Position::from(magnet.step(dt)))
            .collect();

        self.frame += 1;
        TraceFrame {
            pose: PoseFrame::from_render(self.frame, &state),
            magnets,
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }
}

/// Built-in script: a horizontal sweep across one button-sized region.
pub fn demo_script() -> Script {
    let samples = (0..=40)
        .map(|i| Position::new(i as f32 * 20.0, 300.0))
        .chain((1..=10).map(|i| Position::new(800.0, 300.0 - i as f32 * 20.0)))
        .collect();

    Script {
        settings: Default::default(),
        magnet: Default::default(),
        regions: vec![RegionDescriptor::from_rect(320.0, 260.0, 160.0, 80.0)],
        samples,
    }
}
