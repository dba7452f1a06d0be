//! Tricks domain: messages emitted when a trick fires.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::tricks::TrickKind;

/// Fired once per successful trick, for host-side feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrickFired {
    pub player: Entity,
    pub trick: TrickKind,
}

impl Message for TrickFired {}
