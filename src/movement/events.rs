//! Movement domain: motion transition events and their subscription registry.

use std::collections::HashMap;

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Transition notifications emitted by the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// Fired after every ground, wall or air jump.
    Jump,
    GroundJump,
    AirJump,
    WallHop,
    WallJump,
    WallHit,
    WallSlide,
    WallSlideEnd,
    /// The player touched down on `surface`.
    Landed {
        surface: Entity,
    },
    Glide,
    GlideEnd,
    Dash,
    BouncePad,
}

/// Payload-free discriminant of [`MotionEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionEventKind {
    Jump,
    GroundJump,
    AirJump,
    WallHop,
    WallJump,
    WallHit,
    WallSlide,
    WallSlideEnd,
    Landed,
    Glide,
    GlideEnd,
    Dash,
    BouncePad,
}

impl MotionEvent {
    pub fn kind(&self) -> MotionEventKind {
        match self {
            MotionEvent::Jump => MotionEventKind::Jump,
            MotionEvent::GroundJump => MotionEventKind::GroundJump,
            MotionEvent::AirJump => MotionEventKind::AirJump,
            MotionEvent::WallHop => MotionEventKind::WallHop,
            MotionEvent::WallJump => MotionEventKind::WallJump,
            MotionEvent::WallHit => MotionEventKind::WallHit,
            MotionEvent::WallSlide => MotionEventKind::WallSlide,
            MotionEvent::WallSlideEnd => MotionEventKind::WallSlideEnd,
            MotionEvent::Landed { .. } => MotionEventKind::Landed,
            MotionEvent::Glide => MotionEventKind::Glide,
            MotionEvent::GlideEnd => MotionEventKind::GlideEnd,
            MotionEvent::Dash => MotionEventKind::Dash,
            MotionEvent::BouncePad => MotionEventKind::BouncePad,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], needed to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&MotionEvent) + Send + Sync>;

/// Synchronous publish/subscribe registry keyed by event kind.
/// Subscribers of a kind are invoked in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: HashMap<MotionEventKind, Vec<(SubscriptionId, Subscriber)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        kind: MotionEventKind,
        callback: impl FnMut(&MotionEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.subscribers.values_mut() {
            if let Some(index) = list.iter().position(|(sub_id, _)| *sub_id == id) {
                list.remove(index);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, kind: MotionEventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    pub fn publish(&mut self, event: &MotionEvent) {
        if let Some(list) = self.subscribers.get_mut(&event.kind()) {
            for (_, callback) in list.iter_mut() {
                callback(event);
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total: usize = self.subscribers.values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("subscribers", &total)
            .finish()
    }
}

/// Motion event forwarded into the ECS for sound, camera and environment systems.
#[derive(Debug, Clone, Copy)]
pub struct MotionMessage {
    pub player: Entity,
    pub event: MotionEvent,
}

impl Message for MotionMessage {}
