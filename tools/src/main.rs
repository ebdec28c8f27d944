//! empire-runner: headless shell for the Weed Empire simulation.
//!
//! Usage:
//!   empire-runner --ticks 3000 --save game_save.json
//!   empire-runner --ipc-mode --dev --realtime
//!
//! Batch mode runs an auto-player for --ticks frames, prints the HUD and
//! saves. IPC mode reads one JSON command per stdin line and answers each
//! with one JSON state line; only the quit command saves.

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use weed_empire_core::{
    achievement,
    clock::{Clock, ManualClock, SystemClock},
    command::PlayerCommand,
    config::GameConfig,
    engine::GameEngine,
    event::GameEvent,
    notification::NotificationBoard,
    store::SaveStore,
    types::{Frame, Growth, Money, MAX_GROWTH},
};

/// The auto-player stops buying seedlings past this many plants.
const AUTO_PLAYER_FIELD_SIZE: usize = 24;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Plant,
    Harvest,
    Sell,
    Upgrade,
    Tick { count: u64 },
    Advance { seconds: f64 },
    /// Fields left out fall back to the dev panel's button values.
    AddPlants {
        #[serde(default)]
        count:  Option<u32>,
        #[serde(default)]
        growth: Option<Growth>,
    },
    AddMoney {
        #[serde(default)]
        amount: Option<Money>,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct PlantView {
    x:      i32,
    y:      i32,
    growth: Growth,
    ready:  bool,
}

#[derive(serde::Serialize)]
struct UiState {
    frame:          Frame,
    money:          Money,
    weed_plants:    usize,
    ready_plants:   usize,
    plant_cost:     Money,
    harvest_amount: Money,
    sell_price:     Money,
    upgrade_cost:   Money,
    upgrade_level:  u32,
    weather:        String,
    time:           &'static str,
    achievements:   Vec<String>,
    plants:         Vec<PlantView>,
    popup:          Option<String>,
    sounds:         Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error:          Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", default_seed());
    let ticks = parse_arg(&args, "--ticks", 3000u64);
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let realtime = has_flag(&args, "--realtime");

    let mut config = match arg_value(&args, "--config") {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if has_flag(&args, "--dev") {
        config.dev_mode = true;
    }
    if let Some(path) = arg_value(&args, "--save") {
        config.save_path = path.to_string();
    }

    if !ipc_mode {
        println!("Weed Empire: empire-runner");
        println!("  seed:      {seed}");
        println!("  ticks:     {ticks}");
        println!("  save:      {}", config.save_path);
        println!("  dev mode:  {}", config.dev_mode);
        println!();
    }

    let clock: Box<dyn Clock> = if realtime {
        Box::new(SystemClock)
    } else {
        Box::new(ManualClock::from_system())
    };
    let store = SaveStore::open(&config.save_path);
    let session_id = uuid::Uuid::new_v4().to_string();
    let mut engine = GameEngine::build(session_id, config, clock, seed, &store)?;

    if ipc_mode {
        run_ipc_loop(&mut engine, &store)?;
    } else {
        run_auto_player(&mut engine, ticks)?;
        print_summary(&engine);
        engine.save(&store)?;
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut GameEngine, store: &SaveStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut board = NotificationBoard::new(engine.config.popup_duration_secs);

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            log::warn!("stdin closed without quit; progress not saved");
            break;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let result = match cmd {
            IpcCommand::Quit => {
                engine.save(store)?;
                break;
            }
            IpcCommand::GetState => Ok(vec![]),
            IpcCommand::Plant => engine.apply(PlayerCommand::Plant),
            IpcCommand::Harvest => engine.apply(PlayerCommand::Harvest),
            IpcCommand::Sell => engine.apply(PlayerCommand::Sell),
            IpcCommand::Upgrade => engine.apply(PlayerCommand::Upgrade),
            IpcCommand::Tick { count } => engine.run_ticks(count),
            IpcCommand::Advance { seconds } => engine.advance(seconds),
            IpcCommand::AddPlants { count, growth } => {
                let count = count.unwrap_or(engine.config.dev_plant_batch);
                let growth = growth.unwrap_or(MAX_GROWTH);
                engine.apply(PlayerCommand::AddPlants { count, growth })
            }
            IpcCommand::AddMoney { amount } => {
                let amount = amount.unwrap_or(engine.config.dev_money_grant);
                engine.apply(PlayerCommand::AddMoney { amount })
            }
        };

        let state = match result {
            Ok(events) => build_ui_state(engine, &mut board, &events, None),
            Err(e) => build_ui_state(engine, &mut board, &[], Some(e.to_string())),
        };
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Greedy player: sell whatever is ready, upgrade when affordable,
/// otherwise keep the field planted.
fn run_auto_player(engine: &mut GameEngine, ticks: u64) -> Result<()> {
    for _ in 0..ticks {
        let state = engine.state();
        if state.ready_count() > 0 {
            engine.sell()?;
        }
        let state = engine.state();
        if state.can_afford(state.economy.upgrade_cost) {
            engine.upgrade()?;
        } else if state.plants().len() < AUTO_PLAYER_FIELD_SIZE
            && state.can_afford(state.economy.plant_cost)
        {
            engine.plant()?;
        }
        engine.tick()?;
    }
    Ok(())
}

fn build_ui_state(
    engine: &GameEngine,
    board: &mut NotificationBoard,
    events: &[GameEvent],
    error: Option<String>,
) -> UiState {
    let now = engine.now();
    let mut sounds = Vec::new();
    for notification in events.iter().filter_map(GameEvent::notification) {
        sounds.extend(notification.sound_cue());
        board.show(notification, now);
    }

    let state = engine.state();
    UiState {
        frame:          engine.frame(),
        money:          state.money,
        weed_plants:    state.plants().len(),
        ready_plants:   state.ready_count(),
        plant_cost:     state.economy.plant_cost,
        harvest_amount: state.economy.harvest_amount,
        sell_price:     state.economy.sell_price,
        upgrade_cost:   state.economy.upgrade_cost,
        upgrade_level:  state.economy.upgrade_level,
        weather:        state.weather.to_string(),
        time:           state.day_cycle.label(),
        achievements:   state.achievements.iter().map(str::to_string).collect(),
        plants: state
            .plants()
            .iter()
            .map(|p| PlantView {
                x:      p.position().x,
                y:      p.position().y,
                growth: p.growth(),
                ready:  p.is_ready(),
            })
            .collect(),
        popup: board.current(now).map(|n| n.message()),
        sounds,
        error,
    }
}

fn print_summary(engine: &GameEngine) {
    let state = engine.state();
    let log = engine.event_log();
    let count = |event_type: &str| log.iter().filter(|e| e.event_type == event_type).count();

    println!("=== FARM ===");
    println!("  Money:              ${}", state.money);
    println!("  Weed Plants:        {}", state.plants().len());
    println!("  Plant Cost:         ${}", state.economy.plant_cost);
    println!("  Harvest Amount:     {} grams per plant", state.economy.harvest_amount);
    println!("  Sell Price:         ${} per gram", state.economy.sell_price);
    println!("  Upgrade Cost:       ${}", state.economy.upgrade_cost);
    println!("  Farm Upgrade Level: {}", state.economy.upgrade_level);
    println!("  Weather:            {}", state.weather);
    println!("  Time:               {}", state.day_cycle.label());
    println!();
    println!("=== SESSION ===");
    println!("  session:        {}", engine.session_id);
    println!("  seed:           {}", engine.seed());
    println!("  frames run:     {}", engine.frame());
    println!("  plantings:      {}", count("planted"));
    println!("  sales:          {}", count("sold"));
    println!("  upgrades:       {}", count("upgraded"));
    println!("  weather shifts: {}", count("weather_changed"));
    if state.achievements.is_empty() {
        println!("  achievements:   (none yet)");
    } else {
        for id in state.achievements.iter() {
            match achievement::describe(id) {
                Some(description) => println!("  achievement:    {id} ({description})"),
                None => println!("  achievement:    {id}"),
            }
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn default_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}
