//! Movement domain: services the motion controller consumes from the engine.
//!
//! The controller never reaches for globals. Each tick it is handed a
//! [`MotionContext`] bundling the physics queries, the player's rigid body,
//! the input snapshot and the clock. The Bevy adapters live in
//! `systems::bridge`; tests provide in-memory fakes.

use bevy::prelude::*;

/// Collision layers the controller probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeLayer {
    Ground,
    Wall,
}

/// Ray casts against named collision layers.
pub trait PhysicsQuery {
    /// Returns the first collider hit on `layer`, if any.
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        layer: ProbeLayer,
    ) -> Option<Entity>;
}

/// Axis locks applied to the player's rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyConstraints {
    #[default]
    RotationLocked,
    /// Used while stuck to a wall.
    RotationAndVerticalLocked,
    /// Used while input is locked by a conversation or edit mode.
    AllLocked,
}

/// Handle to the player's rigid body.
pub trait RigidBodyHandle {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change in momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    /// Half size of the body's collider.
    fn half_extents(&self) -> Vec2;
    fn set_constraints(&mut self, constraints: BodyConstraints);
    fn friction(&self) -> f32;
    fn set_friction(&mut self, friction: f32);
}

/// Named buttons the controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Dash,
    Drop,
}

pub trait InputSampler {
    /// Raw movement axis, each component in -1..=1.
    fn axis(&self) -> Vec2;
    fn held(&self, action: Action) -> bool;
    fn just_pressed(&self, action: Action) -> bool;
    fn just_released(&self, action: Action) -> bool;
}

/// Monotonic clock.
pub trait Clock {
    /// Seconds since startup.
    fn elapsed_secs(&self) -> f32;
}

impl<T: Default> Clock for Time<T> {
    fn elapsed_secs(&self) -> f32 {
        Time::<T>::elapsed_secs(self)
    }
}

/// Collaborators handed to the controller for a single tick.
pub struct MotionContext<'a> {
    pub physics: &'a dyn PhysicsQuery,
    pub body: &'a mut dyn RigidBodyHandle,
    pub input: &'a dyn InputSampler,
    pub clock: &'a dyn Clock,
}

impl MotionContext<'_> {
    pub fn now(&self) -> f32 {
        self.clock.elapsed_secs()
    }
}
