#![cfg_attr(not(feature = "std"), no_std)]

use core::f32::consts::PI;
use core::fmt;

mod math {
    #[cfg(feature = "std")]
    pub fn sqrt(v: f32) -> f32 {
        v.sqrt()
    }

    #[cfg(not(feature = "std"))]
    pub fn sqrt(v: f32) -> f32 {
        libm::sqrtf(v)
    }

    #[cfg(feature = "std")]
    pub fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[cfg(not(feature = "std"))]
    pub fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }

    #[cfg(feature = "std")]
    pub fn sin(v: f32) -> f32 {
        v.sin()
    }

    #[cfg(not(feature = "std"))]
    pub fn sin(v: f32) -> f32 {
        libm::sinf(v)
    }

    #[cfg(feature = "std")]
    pub fn asin(v: f32) -> f32 {
        v.asin()
    }

    #[cfg(not(feature = "std"))]
    pub fn asin(v: f32) -> f32 {
        libm::asinf(v)
    }

    #[cfg(feature = "std")]
    pub fn exp2(v: f32) -> f32 {
        v.exp2()
    }

    #[cfg(not(feature = "std"))]
    pub fn exp2(v: f32) -> f32 {
        libm::exp2f(v)
    }

    pub fn cube(v: f32) -> f32 {
        v * v * v
    }
}

/// A 2D vector used for positions, offsets and velocities in viewport space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }

    /// Moves `t` of the remaining way toward `target`.
    pub fn lerp(&self, target: Vector2D, t: f32) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    /// Heading of the vector in degrees, `atan2(y, x)`. A zero vector yields 0.
    pub fn angle_degrees(&self) -> f32 {
        math::atan2(self.y, self.x) * (180.0 / PI)
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Anisotropic scale applied to the visual element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn uniform(value: f32) -> Self {
        Self { x: value, y: value }
    }
}

/// Values a [`Tween`] can animate
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vector2D {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Interpolate for Scale {
    fn interpolate(self, to: Self, t: f32) -> Self {
        Scale {
            x: self.x.interpolate(to.x, t),
            y: self.y.interpolate(to.y, t),
        }
    }
}

/// Easing curves
pub mod easing {
    use super::math;
    use core::f32::consts::PI;

    const DEFAULT_ELASTIC_PERIOD: f32 = 0.3;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Ease {
        Linear,
        /// Strong ease-out, `1 - (1 - t)^5`
        Power4Out,
        /// Overshooting spring-like ease-out
        ElasticOut { amplitude: f32, period: f32 },
    }

    impl Ease {
        /// Maps linear progress in `[0, 1]` to eased progress. Input is clamped.
        pub fn apply(&self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match *self {
                Ease::Linear => t,
                Ease::Power4Out => {
                    let inv = 1.0 - t;
                    1.0 - inv * inv * inv * inv * inv
                }
                Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            }
        }
    }

    fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let amplitude = if amplitude > 0.0 { amplitude } else { 1.0 };
        let period = if period > 0.0 {
            period
        } else {
            DEFAULT_ELASTIC_PERIOD
        };

        let p1 = amplitude.max(1.0);
        let p2 = period / amplitude.min(1.0);
        let p3 = p2 / (2.0 * PI) * math::asin(1.0 / p1);

        p1 * math::exp2(-10.0 * t) * math::sin((t - p3) * (2.0 * PI) / p2) + 1.0
    }
}

pub use easing::Ease;

/// A one-shot eased transition between two values.
///
/// Runs once over `duration` time units. Hosts replace a tween rather than
/// queueing a second one behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` time units and returns the new value. Negative `dt` counts as zero.
    pub fn step(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = self.ease.apply(self.elapsed / self.duration);
        self.from.interpolate(self.to, progress)
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Geometry of a sticky hover region in viewport space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyRegion {
    pub center: Vector2D,
    pub width: f32,
    pub height: f32,
}

impl StickyRegion {
    pub fn new(center: Vector2D, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Builds a region from a bounding rectangle's top-left corner and size.
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vector2D::new(left + width / 2.0, top + height / 2.0),
            width,
            height,
        }
    }

    pub fn contains(&self, point: Vector2D) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        point.x >= self.center.x - half_w
            && point.x <= self.center.x + half_w
            && point.y >= self.center.y - half_h
            && point.y <= self.center.y + half_h
    }
}

/// Errors reported when validating a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Smoothing factors must lie in (0, 1].
    InvalidSmoothing { field: &'static str, value: f32 },
    /// Durations must be finite and non-negative.
    InvalidDuration { field: &'static str, value: f32 },
    /// Every tuning constant must be a finite number.
    NonFinite { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSmoothing { field, value } => {
                write!(f, "{} must be in (0, 1], got {}", field, value)
            }
            ConfigError::InvalidDuration { field, value } => {
                write!(f, "{} must be finite and non-negative, got {}", field, value)
            }
            ConfigError::NonFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

fn check_smoothing(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSmoothing { field, value })
    }
}

fn check_duration(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { field, value })
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

/// Tuning constants for the elastic follower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerConfig {
    pub initial_position: Vector2D,
    pub position_smoothing: f32,
    pub scale_smoothing: f32,
    /// Baseline magnitude in the free regime
    pub rest_scale: f32,
    /// Baseline magnitude while stuck to a region
    pub stuck_scale: f32,
    /// Fraction of the pointer's offset from the region center kept in the aim
    pub stick_pull: f32,
    pub stuck_distance_factor: f32,
    pub stuck_clamp_x: f32,
    pub stuck_clamp_y: f32,
    pub stuck_gain: f32,
    pub free_speed_factor: f32,
    pub free_clamp_x: f32,
    pub free_clamp_y: f32,
    pub transition_duration: f32,
    pub transition_ease: Ease,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            initial_position: Vector2D::new(-100.0, -100.0),
            position_smoothing: 0.1,
            scale_smoothing: 0.1,
            rest_scale: 1.0,
            stuck_scale: 2.0,
            stick_pull: 0.15,
            stuck_distance_factor: 0.01,
            stuck_clamp_x: 0.6,
            stuck_clamp_y: 0.3,
            stuck_gain: 3.0,
            free_speed_factor: 0.04,
            free_clamp_x: 1.0,
            free_clamp_y: 0.3,
            transition_duration: 0.5,
            transition_ease: Ease::Power4Out,
        }
    }
}

impl FollowerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_smoothing("position_smoothing", self.position_smoothing)?;
        check_smoothing("scale_smoothing", self.scale_smoothing)?;
        check_duration("transition_duration", self.transition_duration)?;

        check_finite("initial_position.x", self.initial_position.x)?;
        check_finite("initial_position.y", self.initial_position.y)?;
        check_finite("rest_scale", self.rest_scale)?;
        check_finite("stuck_scale", self.stuck_scale)?;
        check_finite("stick_pull", self.stick_pull)?;
        check_finite("stuck_distance_factor", self.stuck_distance_factor)?;
        check_finite("stuck_clamp_x", self.stuck_clamp_x)?;
        check_finite("stuck_clamp_y", self.stuck_clamp_y)?;
        check_finite("stuck_gain", self.stuck_gain)?;
        check_finite("free_speed_factor", self.free_speed_factor)?;
        check_finite("free_clamp_x", self.free_clamp_x)?;
        check_finite("free_clamp_y", self.free_clamp_y)
    }
}

/// Rotation and anisotropic scale of the visual element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deformation {
    pub rotation: f32,
    pub scale: Scale,
}

/// Request for an eased scale change, issued while stuck to a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub scale: Scale,
    pub duration: f32,
    pub ease: Ease,
}

/// Output of [`Follower::set_aim`] in the stuck regime.
///
/// `rotation` applies immediately; `transition` replaces any in-flight one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StuckDeformation {
    pub rotation: f32,
    pub transition: TransitionRequest,
}

/// Per-frame output of [`Follower::advance`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translate: Vector2D,
    /// Velocity-driven deformation, present only in the free regime
    pub deformation: Option<Deformation>,
}

#[derive(Debug, Clone, Copy)]
struct PositionState {
    previous: Vector2D,
    current: Vector2D,
    aim: Vector2D,
}

#[derive(Debug, Clone, Copy)]
struct ScaleState {
    current: f32,
    aim: f32,
}

/// The elastic follower: eases toward the pointer and deforms with motion.
///
/// Two regimes:
/// - free: follows the pointer, stretched along the direction of travel
///   each frame by [`advance`](Follower::advance)
/// - stuck: locked near a sticky region's center, deformed by the pointer's
///   offset from that center through a one-shot transition from
///   [`set_aim`](Follower::set_aim)
///
/// `current` values change only in `advance`; aims change only in `set_aim`
/// and the hover handlers.
#[derive(Debug, Clone)]
pub struct Follower {
    config: FollowerConfig,
    position: PositionState,
    scale: ScaleState,
    hover: Option<StickyRegion>,
}

impl Follower {
    pub fn new(config: FollowerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = config.initial_position;

        Ok(Self {
            config,
            position: PositionState {
                previous: start,
                current: start,
                aim: start,
            },
            scale: ScaleState {
                current: config.rest_scale,
                aim: config.rest_scale,
            },
            hover: None,
        })
    }

    pub fn set_aim(&mut self, x: f32, y: f32) -> Option<StuckDeformation> {
        let pointer = Vector2D::new(x, y);

        let Some(region) = self.hover else {
            self.position.aim = pointer;
            self.scale.aim = self.config.rest_scale;
            return None;
        };

        let cfg = &self.config;
        let delta = pointer - region.center;
        self.position.aim = region.center + delta * cfg.stick_pull;
        self.scale.aim = cfg.stuck_scale;

        let dist = delta.magnitude() * cfg.stuck_distance_factor;
        let stretch = math::cube(dist.min(cfg.stuck_clamp_x)) * cfg.stuck_gain;
        let squash = math::cube(dist.min(cfg.stuck_clamp_y)) * cfg.stuck_gain;

        Some(StuckDeformation {
            rotation: delta.angle_degrees(),
            transition: TransitionRequest {
                scale: Scale::new(self.scale.aim + stretch, self.scale.aim - squash),
                duration: cfg.transition_duration,
                ease: cfg.transition_ease,
            },
        })
    }

    /// Locks onto `region`, replacing any region already active.
    pub fn on_hover_enter(&mut self, region: StickyRegion) {
        self.hover = Some(region);
    }

    /// Updates the active region's geometry. Ignored in the free regime.
    pub fn refresh_target(&mut self, region: StickyRegion) {
        if self.hover.is_some() {
            self.hover = Some(region);
        }
    }

    pub fn on_hover_exit(&mut self) {
        self.hover = None;
        self.scale.aim = self.config.rest_scale;
    }

    /// Advances one frame. The step is a fixed fraction of the remaining
    /// distance, so motion speed follows the caller's tick rate.
    pub fn advance(&mut self) -> Pose {
        let cfg = &self.config;

        self.position.current = self
            .position
            .current
            .lerp(self.position.aim, cfg.position_smoothing);
        self.scale.current = self
            .scale
            .current
            .interpolate(self.scale.aim, cfg.scale_smoothing);

        let velocity = self.position.current - self.position.previous;
        self.position.previous = self.position.current;

        let deformation = if self.hover.is_none() {
            let speed = velocity.magnitude() * cfg.free_speed_factor;
            Some(Deformation {
                rotation: velocity.angle_degrees(),
                scale: Scale::new(
                    self.scale.current + speed.min(cfg.free_clamp_x),
                    self.scale.current - speed.min(cfg.free_clamp_y),
                ),
            })
        } else {
            None
        };

        Pose {
            translate: self.position.current,
            deformation,
        }
    }

    pub fn position(&self) -> Vector2D {
        self.position.current
    }

    pub fn previous_position(&self) -> Vector2D {
        self.position.previous
    }

    pub fn aim(&self) -> Vector2D {
        self.position.aim
    }

    pub fn scale(&self) -> f32 {
        self.scale.current
    }

    pub fn scale_aim(&self) -> f32 {
        self.scale.aim
    }

    pub fn is_stuck(&self) -> bool {
        self.hover.is_some()
    }

    pub fn hover_target(&self) -> Option<&StickyRegion> {
        self.hover.as_ref()
    }

    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }
}

/// Everything a renderer needs to draw the follower for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub translate: Vector2D,
    pub rotation: f32,
    pub scale: Scale,
    pub stuck: bool,
}

/// A [`Follower`] together with the displayed deformation and the one-shot
/// scale transition it requests while stuck.
///
/// At most one transition is in flight; a new request replaces it and starts
/// from whatever scale is currently displayed.
#[derive(Debug, Clone)]
pub struct CursorRig {
    follower: Follower,
    display: Deformation,
    transition: Option<Tween<Scale>>,
}

impl CursorRig {
    pub fn new(config: FollowerConfig) -> Result<Self, ConfigError> {
        let follower = Follower::new(config)?;
        Ok(Self {
            display: Deformation {
                rotation: 0.0,
                scale: Scale::uniform(config.rest_scale),
            },
            follower,
            transition: None,
        })
    }

    /// Forwards to [`Follower::set_aim`] and starts any requested transition.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<StuckDeformation> {
        let stuck = self.follower.set_aim(x, y)?;
        self.display.rotation = stuck.rotation;
        let request = stuck.transition;
        self.transition = Some(Tween::new(
            self.display.scale,
            request.scale,
            request.duration,
            request.ease,
        ));
        Some(stuck)
    }

    pub fn hover_enter(&mut self, region: StickyRegion) {
        self.follower.on_hover_enter(region);
    }

    pub fn refresh_target(&mut self, region: StickyRegion) {
        self.follower.refresh_target(region);
    }

    pub fn hover_exit(&mut self) {
        self.follower.on_hover_exit();
        self.transition = None;
    }

    /// Advances the follower one frame and the transition by `dt` time units.
    pub fn frame(&mut self, dt: f32) -> RenderState {
        let pose = self.follower.advance();

        match pose.deformation {
            Some(free) => self.display = free,
            None => {
                if let Some(tween) = self.transition.as_mut() {
                    self.display.scale = tween.step(dt);
                    if tween.is_finished() {
                        self.transition = None;
                    }
                }
            }
        }

        RenderState {
            translate: pose.translate,
            rotation: self.display.rotation,
            scale: self.display.scale,
            stuck: self.follower.is_stuck(),
        }
    }

    pub fn follower(&self) -> &Follower {
        &self.follower
    }

    pub fn transition(&self) -> Option<&Tween<Scale>> {
        self.transition.as_ref()
    }
}

/// Tuning constants for the sticky element's own pull toward the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetConfig {
    pub pull: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            pull: 0.2,
            duration: 1.0,
            ease: Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.3,
            },
        }
    }
}

impl MagnetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("pull", self.pull)?;
        check_duration("duration", self.duration)
    }
}

/// Elastic offset of a sticky element toward the pointer hovering it
#[derive(Debug, Clone)]
pub struct Magnet {
    config: MagnetConfig,
    offset: Vector2D,
    tween: Option<Tween<Vector2D>>,
}

impl Magnet {
    pub fn new(config: MagnetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            offset: Vector2D::zero(),
            tween: None,
        })
    }

    pub fn pointer_move(&mut self, pointer: Vector2D, region: &StickyRegion) {
        let target = (pointer - region.center) * self.config.pull;
        self.retarget(target);
    }

    /// Springs back to the resting offset.
    pub fn release(&mut self) {
        self.retarget(Vector2D::zero());
    }

    fn retarget(&mut self, target: Vector2D) {
        self.tween = Some(Tween::new(
            self.offset,
            target,
            self.config.duration,
            self.config.ease,
        ));
    }

    pub fn step(&mut self, dt: f32) -> Vector2D {
        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.step(dt);
            if tween.is_finished() {
                self.tween = None;
            }
        }
        self.offset
    }

    pub fn offset(&self) -> Vector2D {
        self.offset
    }

    pub fn is_settled(&self) -> bool {
        self.tween.is_none()
    }
}

/// Index of a region inside a [`RegionSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionId(pub usize);

/// Fixed-capacity set of sticky regions for hosts without a DOM
pub struct RegionSet<const N: usize> {
    regions: heapless::Vec<StickyRegion, N>,
}

impl<const N: usize> RegionSet<N> {
    pub fn new() -> Self {
        Self {
            regions: heapless::Vec::new(),
        }
    }

    /// Returns the region back when the set is full.
    pub fn add(&mut self, region: StickyRegion) -> Result<RegionId, StickyRegion> {
        self.regions.push(region)?;
        Ok(RegionId(self.regions.len() - 1))
    }

    pub fn get(&self, id: RegionId) -> Option<&StickyRegion> {
        self.regions.get(id.0)
    }

    pub fn update(&mut self, id: RegionId, region: StickyRegion) -> bool {
        match self.regions.get_mut(id.0) {
            Some(slot) => {
                *slot = region;
                true
            }
            None => false,
        }
    }

    /// Topmost region under `point`; later additions sit on top.
    pub fn hit_test(&self, point: Vector2D) -> Option<(RegionId, &StickyRegion)> {
        self.regions
            .iter()
            .enumerate()
            .rev()
            .find(|(_, region)| region.contains(point))
            .map(|(index, region)| (RegionId(index), region))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<const N: usize> Default for RegionSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hover transition produced by [`PointerTracker::sample`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverEdge {
    Outside,
    Enter { id: RegionId, region: StickyRegion },
    Stay { id: RegionId, region: StickyRegion },
    Exit { id: RegionId },
    Switch {
        from: RegionId,
        to: RegionId,
        region: StickyRegion,
    },
}

/// Turns raw pointer samples into hover enter/exit edges over a [`RegionSet`]
pub struct PointerTracker<const N: usize> {
    regions: RegionSet<N>,
    hovered: Option<RegionId>,
}

impl<const N: usize> PointerTracker<N> {
    pub fn new(regions: RegionSet<N>) -> Self {
        Self {
            regions,
            hovered: None,
        }
    }

    pub fn sample(&mut self, point: Vector2D) -> HoverEdge {
        let hit = self.regions.hit_test(point).map(|(id, region)| (id, *region));

        let edge = match (self.hovered, hit) {
            (None, None) => HoverEdge::Outside,
            (None, Some((id, region))) => HoverEdge::Enter { id, region },
            (Some(id), None) => HoverEdge::Exit { id },
            (Some(from), Some((to, region))) if from == to => HoverEdge::Stay { id: to, region },
            (Some(from), Some((to, region))) => HoverEdge::Switch { from, to, region },
        };

        self.hovered = hit.map(|(id, _)| id);
        edge
    }

    pub fn hovered(&self) -> Option<RegionId> {
        self.hovered
    }

    pub fn regions(&self) -> &RegionSet<N> {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut RegionSet<N> {
        &mut self.regions
    }
}
