//! Whole-loop scenarios: the shell's view of a play session.

use weed_empire_core::{
    clock::ManualClock,
    command::PlayerCommand,
    config::{GameConfig, PlantingRegion},
    engine::{GameEngine, TEST_EPOCH},
    error::SimError,
    event::GameEvent,
    state::GameState,
    types::MAX_GROWTH,
};

#[test]
fn plant_grow_harvest_replant_sell() {
    let mut engine = GameEngine::build_test("scenario-test".into(), 42);

    engine.plant().unwrap();
    assert_eq!(engine.state().money, 90);
    assert_eq!(engine.state().plants()[0].growth(), 0);

    engine.run_ticks(99).unwrap();
    assert_eq!(engine.state().plants()[0].growth(), 99);
    assert_eq!(engine.harvest().unwrap(), 0);

    engine.tick().unwrap();
    assert_eq!(engine.state().plants()[0].growth(), MAX_GROWTH);
    assert!(engine.state().plants()[0].is_ready());

    assert_eq!(engine.harvest().unwrap(), 5);
    assert!(engine.state().plants().is_empty());

    engine.plant().unwrap();
    engine.run_ticks(100).unwrap();
    let money_before = engine.state().money;
    engine.sell().unwrap();
    assert_eq!(engine.state().money, money_before + 100);
    assert_eq!(engine.state().money, 180);
}

#[test]
fn growth_holds_at_max_over_extra_frames() {
    let mut engine = GameEngine::build_test("overgrow-test".into(), 42);
    engine.plant().unwrap();

    engine.run_ticks(250).unwrap();

    assert_eq!(engine.state().plants()[0].growth(), MAX_GROWTH);
}

#[test]
fn advance_runs_whole_ticks_and_carries_remainder() {
    let mut engine = GameEngine::build_test("advance-test".into(), 42);
    engine.plant().unwrap();

    engine.advance(1.0).unwrap();
    assert_eq!(engine.frame(), 30);
    assert_eq!(engine.state().plants()[0].growth(), 30);

    // 1.5 ticks: one runs, half a tick carries over.
    engine.advance(0.05).unwrap();
    assert_eq!(engine.frame(), 31);

    // The carried half plus 0.6 of a tick completes one more.
    engine.advance(0.02).unwrap();
    assert_eq!(engine.frame(), 32);

    // Nothing for a negative or zero step.
    engine.advance(0.0).unwrap();
    engine.advance(-5.0).unwrap();
    assert_eq!(engine.frame(), 32);
}

#[test]
fn advance_growth_is_independent_of_call_rate() {
    let mut coarse = GameEngine::build_test("coarse-test".into(), 1);
    let mut fine = GameEngine::build_test("fine-test".into(), 1);
    coarse.plant().unwrap();
    fine.plant().unwrap();

    // Two seconds as 4 big steps versus 200 small ones.
    for _ in 0..4 {
        coarse.advance(0.5).unwrap();
    }
    for _ in 0..200 {
        fine.advance(0.01).unwrap();
    }

    assert_eq!(coarse.frame(), 60);
    assert_eq!(fine.frame(), 60);
    assert_eq!(coarse.state().plants(), fine.state().plants());
}

#[test]
fn developer_commands_need_dev_mode() {
    let config = GameConfig::default();
    assert!(!config.dev_mode);
    let state = GameState::new_game(&config, TEST_EPOCH);
    let mut engine = GameEngine::with_state(
        "no-dev-test".into(),
        config,
        state,
        Box::new(ManualClock::starting_at(TEST_EPOCH)),
        42,
    )
    .unwrap();

    let money = engine.apply(PlayerCommand::AddMoney { amount: 1_000_000 });
    let plants = engine.apply(PlayerCommand::AddPlants { count: 10, growth: 100 });

    assert!(matches!(money, Err(SimError::DevModeDisabled { .. })));
    assert!(matches!(plants, Err(SimError::DevModeDisabled { .. })));
    assert_eq!(engine.state().money, 100);
    assert!(engine.state().plants().is_empty());

    // Gameplay still works.
    engine.plant().unwrap();
    assert_eq!(engine.state().money, 90);
}

#[test]
fn dev_panel_grants_match_the_panel_buttons() {
    let mut engine = GameEngine::build_test("dev-panel-test".into(), 42);
    let batch = engine.config.dev_plant_batch;
    let grant = engine.config.dev_money_grant;

    engine
        .apply(PlayerCommand::AddPlants { count: batch, growth: MAX_GROWTH })
        .unwrap();
    engine.apply(PlayerCommand::AddMoney { amount: grant }).unwrap();

    assert_eq!(engine.state().plants().len(), 10);
    assert_eq!(engine.state().ready_count(), 10);
    assert_eq!(engine.state().money, 1_000_100);
}

#[test]
fn negative_money_grant_is_ignored() {
    let mut engine = GameEngine::build_test("negative-grant-test".into(), 42);

    let events = engine.apply(PlayerCommand::AddMoney { amount: -500 }).unwrap();

    assert_eq!(engine.state().money, 100);
    assert!(engine.state().money >= 0);
    assert!(matches!(events.as_slice(), [GameEvent::DevMoneyAdded { amount: 0, .. }]));
}

#[test]
fn engine_rejects_an_empty_planting_region() {
    let config = GameConfig {
        planting_region: PlantingRegion { x_min: 700, x_max: 50, ..PlantingRegion::default() },
        ..GameConfig::default_test()
    };
    let state = GameState::new_game(&config, TEST_EPOCH);

    let engine = GameEngine::with_state(
        "bad-region-test".into(),
        config,
        state,
        Box::new(ManualClock::starting_at(TEST_EPOCH)),
        42,
    );

    assert!(matches!(engine, Err(SimError::Other(_))));
}
