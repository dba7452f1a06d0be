//! Tricks domain: cancellable per-tick follow-up work.
//!
//! Every task is tagged with the player that owns it and the trick that
//! scheduled it. Before stepping, the scheduler resolves the owner through
//! a [`TaskHost`]; tasks whose owner no longer resolves are dropped without
//! touching anything, so a despawned player can never leak work.

use bevy::prelude::*;

use crate::host::velocity::{apply_impulse, clear_velocity};
use crate::host::{Hunger, LookRotation};
use crate::tricks::{CooldownFlag, TrickKind, TrickState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    /// Clears `flag` once `remaining` ticks have passed.
    Cooldown { flag: CooldownFlag, remaining: u32 },
    /// Refills hunger each tick until full.
    HungerRecovery { per_tick: f32 },
    /// Watches a fast-straight flight until landing, counting down the air
    /// refraction wait.
    FastStraightFlight,
    /// Re-aims an air curve glide for `remaining` more ticks.
    AirCurveSteer {
        motion: Vec3,
        horizontal_multiplier: f32,
        remaining: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub owner: Entity,
    pub trick: TrickKind,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStep {
    Continue,
    Finished,
}

/// Mutable view of a task's owner for one step.
pub struct TaskTarget<'a> {
    pub on_ground: bool,
    pub look: LookRotation,
    pub hunger: &'a mut Hunger,
    pub velocity: &'a mut Vec3,
    pub state: &'a mut TrickState,
}

/// Resolves task owners. Returning `None` marks the owner as gone.
pub trait TaskHost {
    fn target(&mut self, owner: Entity) -> Option<TaskTarget<'_>>;
}

/// Outcome of one scheduler tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub stepped: usize,
    pub finished: usize,
    pub purged: usize,
}

#[derive(Resource, Debug, Default)]
pub struct TrickScheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl TrickScheduler {
    /// Registers a task. It first runs on the next scheduler tick.
    pub fn schedule(&mut self, owner: Entity, trick: TrickKind, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            owner,
            trick,
            kind,
        });
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Cancels every task of `trick` owned by `owner`.
    pub fn cancel_trick(&mut self, owner: Entity, trick: TrickKind) -> usize {
        let before = self.tasks.len();
        self.tasks
            .retain(|task| !(task.owner == owner && task.trick == trick));
        before - self.tasks.len()
    }

    /// Cancels everything owned by `owner`.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.owner != owner);
        before - self.tasks.len()
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn tasks_for(&self, owner: Entity) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter().filter(move |task| task.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Steps every task once, in registration order.
    pub fn run_tick(&mut self, host: &mut impl TaskHost) -> TickReport {
        let mut report = TickReport::default();
        let tasks = std::mem::take(&mut self.tasks);
        let mut kept = Vec::with_capacity(tasks.len());

        for mut task in tasks {
            let Some(target) = host.target(task.owner) else {
                debug!(
                    "Dropping {} task {:?} for missing player {}",
                    task.trick.name(),
                    task.id,
                    task.owner
                );
                report.purged += 1;
                continue;
            };

            report.stepped += 1;
            match task.kind.step(target) {
                TaskStep::Continue => kept.push(task),
                TaskStep::Finished => {
                    debug!(
                        "Finished {} task {:?} for player {}",
                        task.trick.name(),
                        task.id,
                        task.owner
                    );
                    report.finished += 1;
                }
            }
        }

        self.tasks = kept;
        report
    }
}

impl TaskKind {
    /// Advances the task by one tick against its owner.
    pub fn step(&mut self, mut target: TaskTarget<'_>) -> TaskStep {
        match self {
            TaskKind::Cooldown { flag, remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    target.state.clear_cooldown(*flag);
                    TaskStep::Finished
                } else {
                    TaskStep::Continue
                }
            }
            TaskKind::HungerRecovery { per_tick } => {
                if target.hunger.is_full() || *per_tick <= 0.0 {
                    return TaskStep::Finished;
                }
                target.hunger.add(*per_tick);
                if target.hunger.is_full() {
                    TaskStep::Finished
                } else {
                    TaskStep::Continue
                }
            }
            TaskKind::FastStraightFlight => {
                if target.on_ground {
                    target.state.land();
                    TaskStep::Finished
                } else {
                    target.state.air_refraction_wait_ticks =
                        target.state.air_refraction_wait_ticks.saturating_sub(1);
                    TaskStep::Continue
                }
            }
            TaskKind::AirCurveSteer {
                motion,
                horizontal_multiplier,
                remaining,
            } => {
                if *remaining == 0 {
                    return TaskStep::Finished;
                }
                let look = target.look.direction().normalize_or_zero();
                let mut next = *motion + Vec3::new(look.x / 2.0, 0.0, look.z / 2.0);
                next.x *= *horizontal_multiplier;
                next.z *= *horizontal_multiplier;
                clear_velocity(target.velocity);
                apply_impulse(target.velocity, next);

                *remaining -= 1;
                if *remaining == 0 {
                    TaskStep::Finished
                } else {
                    TaskStep::Continue
                }
            }
        }
    }
}
