//! Roam CLI - headless wander scene runner.
//!
//! Single binary that provides:
//! - `roam run` - simulate a wandering scene from a YAML file
//! - `roam init` - write an example scene

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use roam_core::TickContext;
use roam_scene::{SceneConfig, SimWorld};
use roam_wander::{tick_wanderers, WanderController, WanderState};

#[derive(Parser)]
#[command(name = "roam")]
#[command(about = "Headless NPC wander simulator", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene
    Run {
        /// Scene file (YAML)
        #[arg(long, default_value = "scene.yaml")]
        scene: PathBuf,

        /// Number of scheduling ticks to simulate
        #[arg(long, default_value_t = 2_000)]
        ticks: u64,

        /// Pace the loop at the scene's tick rate instead of free-running
        #[arg(long)]
        realtime: bool,
    },

    /// Write an example scene.yaml
    Init {
        /// Where to write the scene
        #[arg(long, default_value = "scene.yaml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Run {
            scene,
            ticks,
            realtime,
        }) => run_scene(&scene, ticks, realtime).await,
        Some(Commands::Init { path }) => init_scene(&path),
        None => {
            println!("Roam - Headless NPC Wander Simulator");
            println!();
            println!("Usage: roam <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run   Run a scene");
            println!("  init  Write an example scene.yaml");
            println!();
            println!("Run 'roam --help' for more information.");
            Ok(())
        }
    }
}

async fn run_scene(scene_path: &PathBuf, ticks: u64, realtime: bool) -> Result<()> {
    let scene = SceneConfig::load(scene_path)?;
    scene
        .validate()
        .with_context(|| format!("Invalid scene {}", scene_path.display()))?;

    tracing::info!(
        scene = %scene_path.display(),
        npcs = scene.npcs.len(),
        waypoints = scene.waypoints.len(),
        "Starting simulation"
    );

    let dt = scene.dt_seconds();
    let waypoints = scene.waypoint_list();
    let config = scene.wander_config();

    let mut world = SimWorld::from_scene(&scene);
    let mut controllers: Vec<WanderController<u64>> = scene
        .npcs
        .iter()
        .map(|npc| WanderController::new(npc.id, waypoints.clone(), config.clone()))
        .collect();

    let activation = TickContext {
        tick: 0,
        dt_seconds: dt,
        seed: scene.seed,
    };
    for controller in controllers.iter_mut() {
        controller.activate(&activation, &mut world);
    }

    for tick in 0..ticks {
        let ctx = TickContext {
            tick,
            dt_seconds: dt,
            seed: scene.seed,
        };
        tick_wanderers(&ctx, &mut world, &mut controllers);
        world.step_agents(dt);

        if realtime {
            tokio::time::sleep(Duration::from_secs_f32(dt)).await;
        }
    }

    println!("Wander Simulation Summary");
    println!("=========================");
    println!();
    println!("Scene: {}", scene_path.display());
    println!("Ticks: {} ({:.1}s simulated)", ticks, ticks as f32 * dt);
    println!();
    for controller in &controllers {
        let id = controller.agent();
        let visits = world
            .plays(id)
            .iter()
            .filter(|clip| clip.name() == scene.pose_clip)
            .count();
        let state = match controller.state() {
            WanderState::Idle => "idle",
            WanderState::Walking { .. } => "walking",
            WanderState::Paused { .. } => "paused",
            WanderState::Inactive => "inactive",
        };
        match world.agent(id) {
            Some(agent) => {
                let pos = agent.position();
                println!(
                    "  npc {:<4} visits: {:<4} state: {:<8} position: ({:.2}, {:.2})",
                    id, visits, state, pos.x, pos.y
                );
            }
            None => println!("  npc {:<4} visits: {:<4} state: {:<8}", id, visits, state),
        }
    }

    Ok(())
}

fn init_scene(path: &PathBuf) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let example = r#"# Roam scene configuration

seed: 7
tick_hz: 30

stopping_distance: 0.5
pause_seconds: 4.0

pose_clip: Pose
walk_clip: Walk

waypoints:
  - [0.0, 0.0]
  - [8.0, 0.0]
  - [8.0, 6.0]
  - [0.0, 6.0]

npcs:
  - id: 1
    spawn: [4.0, 3.0]
    speed: 3.5
"#;
    std::fs::write(path, example)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote example scene to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit the waypoints and npcs to taste");
    println!("  2. Run: roam run --scene {}", path.display());

    Ok(())
}
