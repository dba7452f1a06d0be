//! Demo domain: a headless stand-in for the voxel game host.
//!
//! Builds a small course, drives one scripted player and integrates its
//! velocity with a toy kinematic step so the tricks have something to push.

use avian3d::prelude::*;
use bevy::prelude::*;
use movement_tricks::host::{
    BlockState, Hunger, LookRotation, PlayerStatus, TrickPlayer, VoxelWorld,
};
use movement_tricks::tricks::TrickFired;

const SPAWN: Vec3 = Vec3::new(0.5, 1.0, 0.5);
const WALK_SPEED: f32 = 0.2;
const JUMP_VELOCITY: f32 = 0.42;
const GRAVITY: f32 = 0.08;
const DRAG: f32 = 0.91;
const TERMINAL_FALL: f32 = -0.9;
const TURN_EVERY_TICKS: u32 = 120;
const JUMP_EVERY_TICKS: u32 = 25;
const DEMO_SECONDS: f32 = 30.0;

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (build_course, spawn_pilot).chain())
            .add_systems(FixedPreUpdate, drive_pilot)
            .add_systems(FixedPostUpdate, integrate_motion)
            .add_systems(Update, (report_tricks, stop_after_demo));
    }
}

/// Scripted input for the demo player.
#[derive(Component, Debug, Default)]
struct Pilot {
    tick: u32,
}

fn build_course(mut world: ResMut<VoxelWorld>) {
    let stone = BlockState::solid("minecraft:stone");
    world.fill(IVec3::new(-8, 0, -4), IVec3::new(8, 0, 24), &stone);
    world.fill(IVec3::new(-8, 1, 22), IVec3::new(8, 4, 22), &stone);
    world.set_block(
        IVec3::new(0, 0, 6),
        BlockState::solid("minecraft:emerald_block"),
    );
    world.set_block(
        IVec3::new(0, 0, 14),
        BlockState::solid("minecraft:diamond_block"),
    );
    world.set_block(
        IVec3::new(3, 1, 10),
        BlockState::non_solid("minecraft:glass_pane"),
    );
    info!("Demo course built: {} blocks", world.len());
}

fn spawn_pilot(mut commands: Commands) {
    commands.spawn((
        TrickPlayer,
        Pilot::default(),
        PlayerStatus {
            on_ground: true,
            sneaking: false,
        },
        LookRotation::default(),
        Hunger::default(),
        Transform::from_translation(SPAWN),
        LinearVelocity(Vec3::ZERO),
    ));
}

fn drive_pilot(
    mut pilots: Query<
        (
            &mut Pilot,
            &mut PlayerStatus,
            &mut LookRotation,
            &mut LinearVelocity,
        ),
        With<TrickPlayer>,
    >,
) {
    for (mut pilot, mut status, mut look, mut velocity) in &mut pilots {
        pilot.tick += 1;

        let turns = pilot.tick / TURN_EVERY_TICKS;
        look.yaw = (turns % 4) as f32 * 90.0;
        // Tuck in the air so wall bounce and fast straight can trigger.
        status.sneaking = !status.on_ground;

        if status.on_ground {
            let walk = look.flat_forward() * WALK_SPEED;
            velocity.x = walk.x;
            velocity.z = walk.z;
            if pilot.tick % JUMP_EVERY_TICKS == 0 {
                velocity.y = JUMP_VELOCITY;
            }
        }
    }
}

fn integrate_motion(
    world: Res<VoxelWorld>,
    mut bodies: Query<
        (&mut Transform, &mut LinearVelocity, &mut PlayerStatus),
        With<TrickPlayer>,
    >,
) {
    let solid = |position: Vec3| world.block_at(position).is_some_and(|block| block.is_solid);

    for (mut transform, mut velocity, mut status) in &mut bodies {
        let v = &mut velocity.0;
        v.y = (v.y - GRAVITY).max(TERMINAL_FALL);

        let mut next = transform.translation + *v;
        if solid(next + Vec3::Y * 0.5) {
            next.x = transform.translation.x;
            next.z = transform.translation.z;
            v.x = 0.0;
            v.z = 0.0;
        }

        status.on_ground = v.y <= 0.0 && solid(next - Vec3::Y * 0.01);
        if status.on_ground {
            next.y = (next.y - 0.01).floor() + 1.0;
            v.y = 0.0;
        }

        v.x *= DRAG;
        v.z *= DRAG;

        if next.y < -16.0 {
            debug!("Pilot fell out of the course, respawning");
            next = SPAWN;
            *v = Vec3::ZERO;
        }
        transform.translation = next;
    }
}

fn report_tricks(mut fired: MessageReader<TrickFired>, players: Query<(&Transform, &Hunger)>) {
    for event in fired.read() {
        let Ok((transform, hunger)) = players.get(event.player) else {
            continue;
        };
        info!(
            "{} at {:.2} (hunger {:.2})",
            event.trick.name(),
            transform.translation,
            hunger.value()
        );
    }
}

fn stop_after_demo(time: Res<Time>, mut exit: MessageWriter<AppExit>) {
    if time.elapsed_secs() > DEMO_SECONDS {
        exit.write(AppExit::Success);
    }
}
