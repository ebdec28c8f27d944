//! Day/night flips, weather resampling, and the rain boost.

use weed_empire_core::{
    command::PlayerCommand,
    engine::GameEngine,
    event::GameEvent,
    weather::Weather,
};

#[test]
fn no_flip_before_day_duration() {
    let mut engine = GameEngine::build_test("short-day-test".into(), 5);

    // 600 frames at 30 per second is 20 seconds.
    let events = engine.run_ticks(600).unwrap();

    assert!(events.is_empty());
    assert!(engine.state().day_cycle.day_time);
    assert_eq!(engine.state().weather, Weather::Sunny);
}

#[test]
fn phase_flips_once_duration_elapses() {
    let mut engine = GameEngine::build_test("flip-test".into(), 5);
    engine.clock_mut().advance(30.0);

    let events = engine.tick().unwrap();

    let state = engine.state();
    assert!(!state.day_cycle.day_time);
    assert_eq!(state.day_cycle.day_start, engine.now());
    assert!(matches!(
        events.as_slice(),
        [GameEvent::PhaseChanged { day_time: false, .. }, GameEvent::WeatherChanged { .. }, ..]
    ));

    // The timer restarted, so the next frame does not flip again.
    assert!(engine.tick().unwrap().is_empty());
}

#[test]
fn night_turns_back_to_day() {
    let mut engine = GameEngine::build_test("night-test".into(), 5);
    engine.clock_mut().advance(30.0);
    engine.tick().unwrap();
    engine.clock_mut().advance(30.0);
    engine.tick().unwrap();

    assert!(engine.state().day_cycle.day_time);
}

#[test]
fn arriving_rain_boosts_immature_plants_once() {
    let mut engine = GameEngine::build_test("rain-test".into(), 9);
    engine
        .apply(PlayerCommand::AddPlants { count: 1, growth: 100 })
        .unwrap();

    let mut saw_rain = false;
    for _ in 0..200 {
        // A fresh seedling and a nearly ripe plant before every flip.
        engine
            .apply(PlayerCommand::AddPlants { count: 1, growth: 0 })
            .unwrap();
        engine
            .apply(PlayerCommand::AddPlants { count: 1, growth: 99 })
            .unwrap();
        let n = engine.state().plants().len();

        engine.clock_mut().advance(30.0);
        let events = engine.tick().unwrap();
        let plants = engine.state().plants();

        if engine.state().weather == Weather::Rainy {
            saw_rain = true;
            assert!(events.iter().any(|e| matches!(e, GameEvent::RainBoost { amount: 2, .. })));
            // Seedling: +2 rain, +1 growth.
            assert_eq!(plants[n - 2].growth(), 3);
            assert_eq!(plants[n - 1].growth(), 100);
            assert_eq!(plants[0].growth(), 100);

            // Rain does not keep boosting on later frames.
            engine.tick().unwrap();
            assert_eq!(engine.state().plants()[n - 2].growth(), 4);
            break;
        }

        assert!(!events.iter().any(|e| matches!(e, GameEvent::RainBoost { .. })));
        assert_eq!(plants[n - 2].growth(), 1);
    }
    assert!(saw_rain, "200 weather draws never produced rain");
}
