//! Tricks domain: per-player trick evaluation on a fixed tick.
//!
//! Five tricks are evaluated for every player each tick, in
//! [`TrickKind::EVALUATION_ORDER`]. Follow-up work (cooldowns, hunger
//! recovery, flight tracking, air curve steering) lives in the
//! [`TrickScheduler`], tagged by owner so it dies with the player.

pub mod air_curve;
pub mod air_refraction;
mod components;
mod context;
mod events;
pub mod fast_straight;
mod scheduler;
mod systems;
pub mod updraft;
pub mod wall_bounce;

pub use components::{CooldownFlag, TrickKind, TrickState};
pub use context::TrickContext;
pub use events::TrickFired;
pub use scheduler::{
    ScheduledTask, TaskHost, TaskId, TaskKind, TaskStep, TaskTarget, TickReport, TrickScheduler,
};
pub use systems::evaluate_trick;

use bevy::prelude::*;

use crate::tricks::systems::{end_sessions, evaluate_tricks, run_trick_tasks, start_sessions};

pub struct TricksPlugin;

impl Plugin for TricksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrickScheduler>()
            .add_message::<TrickFired>()
            .add_systems(
                FixedUpdate,
                (start_sessions, end_sessions, run_trick_tasks, evaluate_tricks).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            FixedUpdate,
            systems::trace_trick_state.after(evaluate_tricks),
        );
    }
}
