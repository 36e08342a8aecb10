//! Headless simulator integration tests

use dodo::simulator::{run_simulation, SimConfig};
use dodo::{GameConfig, GameError};

#[test]
fn test_walking_right_is_caught() {
    let report = run_simulation(&SimConfig::from_script("right*200")).unwrap();
    assert!(report.game_over);
    assert_eq!(report.frames_run, 33);
    assert_eq!(report.final_level, 1);

    let last = report.records.last().unwrap();
    assert!(last.game_over);
    assert_eq!(last.frame, 33);
}

#[test]
fn test_standing_still_is_safe() {
    let report = run_simulation(&SimConfig::from_script("idle*500")).unwrap();
    assert!(!report.game_over);
    assert_eq!(report.frames_run, 500);
    assert_eq!(report.final_score, 0);
    assert_eq!(report.fruit_remaining, 3);
    assert_eq!(report.level_fruit_value, 120);
    let summary = report.to_string();
    assert!(summary.contains("3 left on this level (worth 120 in all)"));
    assert!(summary.contains("still running"));
}

#[test]
fn test_final_scene_serializes() {
    let report = run_simulation(&SimConfig::from_script("idle*5")).unwrap();
    let json = serde_json::to_value(&report.final_scene).unwrap();
    assert_eq!(json["level"], 1);
    assert_eq!(json["level_name"], "Harbour");
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["fruit"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_bad_script_is_rejected() {
    let err = run_simulation(&SimConfig::from_script("right*x")).unwrap_err();
    assert!(matches!(err, GameError::Script(_)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut game = GameConfig::default();
    game.physics.gravity = 0.0;
    let config = SimConfig {
        game,
        ..SimConfig::from_script("idle")
    };
    assert!(matches!(
        run_simulation(&config),
        Err(GameError::InvalidConfig(_))
    ));
}
