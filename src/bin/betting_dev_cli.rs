// src/bin/betting_dev_cli.rs
//
// Dev-CLI: гоняет раздачи случайными легальными действиями, печатает
// ленту событий (через log) и итоговое состояние стола в JSON.
//
// Запуск:
//   RUST_LOG=info cargo run --bin betting_dev_cli -- [путь к конфигу JSON] [кол-во раздач]

use std::cell::RefCell;
use std::rc::Rc;

use holdem_betting::api::build_table_view;
use holdem_betting::domain::TableConfig;
use holdem_betting::engine::{BettingEngine, EngineError, EngineEvent, EventKind};
use holdem_betting::infra::{play_out_hand, DeterministicRng};

const PLAYER_NAMES: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];
const DEFAULT_HANDS: u32 = 50;
const SEED: u64 = 42;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] не удалось прочитать конфиг {path}: {e}");
                std::process::exit(2);
            }
        },
        None => TableConfig::default(),
    };
    let hands: u32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HANDS);

    if let Err(e) = run(config, hands) {
        eprintln!("[CLI] ошибка движка: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: &str) -> Result<TableConfig, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

fn run(config: TableConfig, hands: u32) -> Result<(), EngineError> {
    let mut engine = BettingEngine::new(&PLAYER_NAMES, config)?;
    let mut rng = DeterministicRng::from_seed(SEED);

    // Счётчики событий – через подписку, как это делал бы UI.
    let counters = Rc::new(RefCell::new([0u64; 3]));
    for (slot, kind) in [EventKind::TurnFinished, EventKind::RoundFinished, EventKind::HandFinished]
        .into_iter()
        .enumerate()
    {
        let counters = Rc::clone(&counters);
        engine.subscribe(kind, move |engine: &mut BettingEngine, event: &EngineEvent| {
            counters.borrow_mut()[slot] += 1;
            if let EngineEvent::HandFinished { round } = event {
                log::info!("[CLI] раздача #{} закончена на {}", engine.hand_number(), round);
            }
        });
    }

    let total_before = engine.total_chips();
    let mut played = 0u32;

    for _ in 0..hands {
        match engine.start_new_hand() {
            Ok(()) => {}
            Err(EngineError::NotEnoughPlayers) => {
                println!("[CLI] за столом остался один игрок – стоп.");
                break;
            }
            Err(e) => return Err(e),
        }

        let outcome = play_out_hand(&mut engine, &mut rng)?;
        played += 1;
        log::debug!(
            "[CLI] действий {}, раундов {}, банк {}",
            outcome.actions,
            outcome.rounds_played,
            outcome.total_pot
        );
    }

    let [turns, rounds, finished] = *counters.borrow();
    println!();
    println!("================ ИТОГ =================");
    println!("Сыграно раздач: {played}");
    println!("События: ходов {turns}, раундов {rounds}, раздач {finished}");
    println!(
        "Фишек на столе: было {}, стало {}",
        total_before,
        engine.total_chips()
    );

    match serde_json::to_string_pretty(&build_table_view(&engine)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[CLI] не удалось сериализовать стол: {e}"),
    }

    Ok(())
}
