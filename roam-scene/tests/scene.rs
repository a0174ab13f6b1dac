use std::io::Write;

use roam_scene::{SceneConfig, SceneError, SimWorld};

fn parse(yaml: &str) -> SceneConfig {
    serde_yaml::from_str(yaml).expect("scene should parse")
}

#[test]
fn minimal_scene_gets_defaults() {
    let scene = parse("seed: 7\n");

    assert_eq!(scene.seed, 7);
    assert_eq!(scene.tick_hz, 30);
    assert_eq!(scene.stopping_distance, 0.5);
    assert_eq!(scene.pause_seconds, 4.0);
    assert_eq!(scene.pose_clip, "Pose");
    assert_eq!(scene.walk_clip, "Walk");
    assert!(scene.waypoints.is_empty());
    assert!(scene.npcs.is_empty());
    assert!(scene.validate().is_ok());
}

#[test]
fn npc_fields_default_individually() {
    let scene = parse(
        "npcs:\n  - id: 3\n    spawn: [1.0, 2.0]\n  - id: 4\n    spawn: [0.0, 0.0]\n    speed: 1.25\n",
    );

    assert_eq!(scene.npcs[0].speed, 3.5);
    assert_eq!(scene.npcs[0].path_latency_ticks, 1);
    assert_eq!(scene.npcs[1].speed, 1.25);
}

#[test]
fn empty_waypoint_list_is_legal() {
    let scene = parse("npcs:\n  - id: 1\n    spawn: [0.0, 0.0]\n");
    assert!(scene.validate().is_ok());
}

#[test]
fn invalid_scenes_are_rejected() {
    let scene = parse("tick_hz: 0\n");
    assert!(matches!(scene.validate(), Err(SceneError::InvalidTickRate)));

    let scene = parse("stopping_distance: -1.0\n");
    assert!(matches!(
        scene.validate(),
        Err(SceneError::InvalidStoppingDistance(_))
    ));

    let scene = parse("waypoints:\n  - [.nan, 0.0]\n");
    assert!(matches!(
        scene.validate(),
        Err(SceneError::NonFiniteWaypoint { index: 0 })
    ));

    let scene = parse(
        "npcs:\n  - id: 1\n    spawn: [0.0, 0.0]\n  - id: 1\n    spawn: [1.0, 1.0]\n",
    );
    assert!(matches!(scene.validate(), Err(SceneError::DuplicateNpcId(1))));

    let scene = parse("npcs:\n  - id: 2\n    spawn: [0.0, 0.0]\n    speed: -2.0\n");
    assert!(matches!(
        scene.validate(),
        Err(SceneError::InvalidSpeed { id: 2, .. })
    ));
}

#[test]
fn load_reads_yaml_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "seed: 11\nwaypoints:\n  - [0.0, 0.0]\n  - [4.0, 2.0]\nnpcs:\n  - id: 1\n    spawn: [2.0, 2.0]\n"
    )
    .expect("write scene");

    let scene = SceneConfig::load(file.path()).expect("load scene");
    assert_eq!(scene.seed, 11);
    assert_eq!(scene.waypoints.len(), 2);

    let waypoints = scene.waypoint_list();
    assert_eq!(waypoints.len(), 2);
    assert_eq!(waypoints.get(1).map(|p| (p.x, p.y)), Some((4.0, 2.0)));
}

#[test]
fn load_fails_with_context_for_missing_files() {
    let err = SceneConfig::load(std::path::Path::new("/does/not/exist.yaml"))
        .expect_err("missing file should fail");
    assert!(err.to_string().contains("Failed to read scene"));
}

#[test]
fn sim_world_spawns_one_agent_per_npc() {
    let scene = parse(
        "npcs:\n  - id: 1\n    spawn: [1.0, 2.0]\n  - id: 9\n    spawn: [3.0, 4.0]\n    speed: 2.0\n",
    );
    let world = SimWorld::from_scene(&scene);

    assert_eq!(world.agent_ids().collect::<Vec<_>>(), vec![1, 9]);
    let agent = world.agent(9).expect("agent 9");
    assert_eq!((agent.position().x, agent.position().y), (3.0, 4.0));
    assert_eq!(agent.speed(), 2.0);
    assert!(world.plays(1).is_empty());
}
