use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roam_anim::{AnimWorldMut, Clip};
use roam_core::{TickContext, WorldMut, WorldView};
use roam_nav::{KinematicAgent, NavAgentWorldMut, NavAgentWorldView, Vec2};
use roam_wander::{tick_wanderers, WanderConfig, WanderController, Waypoints};

#[derive(Default)]
struct BenchWorld {
    agents: BTreeMap<u64, KinematicAgent>,
}

impl BenchWorld {
    fn step_agents(&mut self, dt: f32) {
        for agent in self.agents.values_mut() {
            agent.step(dt);
        }
    }
}

impl WorldView for BenchWorld {
    type Agent = u64;
}

impl WorldMut for BenchWorld {}

impl NavAgentWorldView for BenchWorld {
    fn position(&self, agent: u64) -> Option<Vec2> {
        self.agents.get(&agent).map(|a| a.position())
    }

    fn path_pending(&self, agent: u64) -> bool {
        self.agents.get(&agent).map(|a| a.path_pending()).unwrap_or(false)
    }

    fn remaining_distance(&self, agent: u64) -> f32 {
        self.agents
            .get(&agent)
            .map(|a| a.remaining_distance())
            .unwrap_or(f32::INFINITY)
    }

    fn is_stopped(&self, agent: u64) -> bool {
        self.agents.get(&agent).map(|a| a.is_stopped()).unwrap_or(false)
    }
}

impl NavAgentWorldMut for BenchWorld {
    fn set_destination(&mut self, agent: u64, target: Vec2) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.set_destination(target);
        }
    }

    fn set_stopped(&mut self, agent: u64, stopped: bool) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.set_stopped(stopped);
        }
    }
}

impl AnimWorldMut for BenchWorld {
    fn play(&mut self, _agent: u64, _clip: &Clip) {}
}

fn make_sim(count: usize) -> (BenchWorld, Vec<WanderController<u64>>) {
    let waypoints = Waypoints::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]);

    let mut world = BenchWorld::default();
    let mut controllers = Vec::with_capacity(count);
    for i in 0..count {
        let id = i as u64;
        world
            .agents
            .insert(id, KinematicAgent::new(Vec2::new(5.0, 5.0), 4.0));
        controllers.push(WanderController::new(
            id,
            waypoints.clone(),
            WanderConfig::default(),
        ));
    }
    (world, controllers)
}

fn bench_wander_tick(c: &mut Criterion) {
    let dt = 0.1;
    let mut group = c.benchmark_group("roam-wander/tick");

    for &n in &[1_000usize, 10_000usize] {
        let (mut world, mut controllers) = make_sim(n);
        let activate_ctx = TickContext {
            tick: 0,
            dt_seconds: dt,
            seed: 42,
        };
        for controller in controllers.iter_mut() {
            controller.activate(&activate_ctx, &mut world);
        }

        let mut tick: u64 = 0;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                let ctx = TickContext {
                    tick,
                    dt_seconds: dt,
                    seed: 42,
                };
                tick_wanderers(&ctx, &mut world, &mut controllers);
                world.step_agents(dt);
                black_box(world.position(0));
                tick = tick.wrapping_add(1);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wander_tick);
criterion_main!(benches);
