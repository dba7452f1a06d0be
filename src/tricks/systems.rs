//! Tricks domain: the fixed-tick driver.
//!
//! Runs in `FixedUpdate`, chained: sessions start and end, scheduled tasks
//! step, then every player is evaluated against the five tricks.

#[cfg(feature = "dev-tools")]
use std::collections::HashMap;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::host::{Hunger, LookRotation, PlayerStatus, TrickPlayer, VoxelWorld};
use crate::settings::{TrickSettings, TrickSettingsStore};
use crate::tricks::{
    TaskHost, TaskTarget, TrickContext, TrickFired, TrickKind, TrickScheduler, TrickState,
    air_curve, air_refraction, fast_straight, updraft, wall_bounce,
};

type TaskOwnerQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static PlayerStatus,
        &'static LookRotation,
        &'static mut Hunger,
        &'static mut LinearVelocity,
        &'static mut TrickState,
    ),
    With<TrickPlayer>,
>;

/// Resolves task owners against live player entities.
struct QueryTaskHost<'q, 'w, 's> {
    players: &'q mut TaskOwnerQuery<'w, 's>,
}

impl TaskHost for QueryTaskHost<'_, '_, '_> {
    fn target(&mut self, owner: Entity) -> Option<TaskTarget<'_>> {
        let (status, look, hunger, velocity, state) = self.players.get_mut(owner).ok()?;
        Some(TaskTarget {
            on_ground: status.on_ground,
            look: *look,
            hunger: hunger.into_inner(),
            velocity: &mut velocity.into_inner().0,
            state: state.into_inner(),
        })
    }
}

/// Runs one trick evaluator. Returns whether it fired.
pub fn evaluate_trick(trick: TrickKind, ctx: &mut TrickContext, settings: &TrickSettings) -> bool {
    match trick {
        TrickKind::WallBounce => wall_bounce::evaluate(ctx, &settings.wall_bounce),
        TrickKind::FastStraight => fast_straight::evaluate(ctx, &settings.fast_straight),
        TrickKind::AirRefraction => air_refraction::evaluate(ctx, &settings.air_refraction),
        TrickKind::Updraft => updraft::evaluate(ctx, &settings.updraft),
        TrickKind::AirCurve => air_curve::evaluate(ctx, &settings.air_curve),
    }
}

pub(crate) fn start_sessions(
    mut commands: Commands,
    mut scheduler: ResMut<TrickScheduler>,
    joined: Query<Entity, Added<TrickPlayer>>,
) {
    for player in &joined {
        let stale = scheduler.cancel_owner(player);
        commands.entity(player).insert(TrickState::default());
        info!("Trick session started: player={}, stale_tasks={}", player, stale);
    }
}

pub(crate) fn end_sessions(
    mut scheduler: ResMut<TrickScheduler>,
    mut left: RemovedComponents<TrickPlayer>,
) {
    for player in left.read() {
        let cancelled = scheduler.cancel_owner(player);
        debug!(
            "Trick session ended: player={}, cancelled_tasks={}",
            player, cancelled
        );
    }
}

pub(crate) fn run_trick_tasks(
    mut scheduler: ResMut<TrickScheduler>,
    mut players: TaskOwnerQuery,
) {
    if scheduler.is_empty() {
        return;
    }
    let mut host = QueryTaskHost {
        players: &mut players,
    };
    let report = scheduler.run_tick(&mut host);
    if report.purged > 0 {
        debug!("Purged {} orphaned trick tasks", report.purged);
    }
}

pub(crate) fn evaluate_tricks(
    store: Res<TrickSettingsStore>,
    world: Res<VoxelWorld>,
    mut scheduler: ResMut<TrickScheduler>,
    mut fired: MessageWriter<TrickFired>,
    mut players: Query<
        (
            Entity,
            &PlayerStatus,
            &LookRotation,
            &Transform,
            &mut Hunger,
            &mut LinearVelocity,
            &mut TrickState,
        ),
        With<TrickPlayer>,
    >,
) {
    let settings = TrickSettings::fetch(&store);

    for (player, status, look, transform, mut hunger, mut velocity, mut state) in &mut players {
        let mut ctx = TrickContext {
            player,
            status: *status,
            look: *look,
            position: transform.translation,
            hunger: &mut *hunger,
            velocity: &mut velocity.0,
            state: &mut *state,
            world: &*world,
            scheduler: &mut *scheduler,
        };

        for trick in TrickKind::EVALUATION_ORDER {
            if evaluate_trick(trick, &mut ctx, &settings) {
                fired.write(TrickFired { player, trick });
            }
        }
    }
}

/// Logs every trick state transition.
#[cfg(feature = "dev-tools")]
pub(crate) fn trace_trick_state(
    mut last_seen: Local<HashMap<Entity, TrickState>>,
    players: Query<(Entity, &TrickState), With<TrickPlayer>>,
) {
    last_seen.retain(|entity, _| players.contains(*entity));

    for (player, state) in &players {
        if last_seen.get(&player) == Some(state) {
            continue;
        }
        debug!("Trick state: player={}, {:?}", player, state);
        last_seen.insert(player, state.clone());
    }
}
