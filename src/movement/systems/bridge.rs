//! Movement domain: avian2d adapters for the controller's collaborators.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::{GameLayer, Player, PlayerMotion};
use crate::movement::ports::{BodyConstraints, PhysicsQuery, ProbeLayer, RigidBodyHandle};

/// Everything the motion systems need from the player entity.
pub(crate) type PlayerBodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut PlayerMotion,
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut LockedAxes,
        &'static mut Friction,
        &'static ComputedMass,
        &'static Collider,
    ),
    With<Player>,
>;

/// Ray casts through avian's spatial query, ignoring the player's own collider.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    pub query: &'a SpatialQuery<'w, 's>,
    pub exclude: Entity,
}

impl PhysicsQuery for SpatialProbe<'_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        layer: ProbeLayer,
    ) -> Option<Entity> {
        let mask = match layer {
            ProbeLayer::Ground => GameLayer::Ground,
            ProbeLayer::Wall => GameLayer::Wall,
        };
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.exclude]);

        self.query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| hit.entity)
    }
}

/// The player's rigid body as seen by the controller.
pub(crate) struct AvianBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    pub locked_axes: &'a mut LockedAxes,
    pub friction: &'a mut Friction,
    pub mass: &'a ComputedMass,
    pub half_extents: Vec2,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        transform: &'a mut Transform,
        velocity: &'a mut LinearVelocity,
        locked_axes: &'a mut LockedAxes,
        friction: &'a mut Friction,
        mass: &'a ComputedMass,
        collider: &Collider,
    ) -> Self {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };

        Self {
            transform,
            velocity,
            locked_axes,
            friction,
            mass,
            half_extents,
        }
    }
}

impl RigidBodyHandle for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.mass.inverse();
    }

    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    fn set_constraints(&mut self, constraints: BodyConstraints) {
        *self.locked_axes = match constraints {
            BodyConstraints::RotationLocked => LockedAxes::ROTATION_LOCKED,
            BodyConstraints::RotationAndVerticalLocked => {
                LockedAxes::new().lock_rotation().lock_translation_y()
            }
            BodyConstraints::AllLocked => LockedAxes::ALL_LOCKED,
        };
    }

    fn friction(&self) -> f32 {
        self.friction.dynamic_coefficient
    }

    fn set_friction(&mut self, friction: f32) {
        self.friction.dynamic_coefficient = friction;
        self.friction.static_coefficient = friction;
    }
}
