//! End-to-end games at the table.

use ants::core::ResetLatch;
use ants::rendering::AssetBank;
use ants::rules::{FileStore, GameConfig, GameResult, MemoryStore, Seat};
use ants::shared::Player;
use ants::ui::{Buttons, PadSource};
use ants::{Table, TableEvent, TurnOutcome};

fn fast_config(seed: u64) -> GameConfig {
    let mut config = GameConfig::default();
    config.seed = seed;
    config.turn_limit = 200;
    config.pacing.deal_delay = 0;
    config.pacing.turn_start_delay = 0;
    config.pacing.move_delay = 0;
    config.pacing.draw_delay = 0;
    config
}

fn table(config: GameConfig) -> Table {
    Table::new(
        config,
        AssetBank::procedural().unwrap(),
        Box::new(MemoryStore::new()),
    )
    .unwrap()
}

/// Holds nothing, and raises the reset latch after a number of frames.
struct ResetAfter {
    frames: u32,
    latch: ResetLatch,
}

impl PadSource for ResetAfter {
    fn poll(&mut self) -> Option<[Buttons; 2]> {
        if self.frames == 0 {
            self.latch.raise();
        } else {
            self.frames -= 1;
        }
        Some([Buttons::NONE; 2])
    }
}

#[test]
fn test_computer_game_fits_every_vblank() {
    for seed in 0..4 {
        let mut table = table(fast_config(seed));
        let result = table.play_game().unwrap();
        assert!(result.is_some(), "seed {seed} did not finish");

        let stats = table.stats();
        assert!(stats.within_budget(), "seed {seed}: {stats}");
        assert_eq!(table.vdp().back().visible_sprites(), 0);
    }
}

#[test]
fn test_default_pacing_delays() {
    let mut quick = table(fast_config(9));
    quick.start_game();
    quick.take_turn().unwrap();

    let mut config = fast_config(9);
    config.pacing = GameConfig::default().pacing;
    let mut paced = table(config);
    paced.start_game();
    paced.take_turn().unwrap();

    // Two deal delays, then turn start, move and draw delays.
    let waited = paced.stats().frames - quick.stats().frames;
    assert_eq!(waited, 60 + 60 + 60 + 30 + 30);
}

#[test]
fn test_same_seed_same_events() {
    let record = |seed| {
        let mut table = table(fast_config(seed));
        let events = table.events();
        table.start_game();
        let mut moves = Vec::new();
        for _ in 0..40 {
            let outcome = table.take_turn().unwrap();
            moves.extend(events.drain().into_iter().filter_map(|e| match e {
                TableEvent::MovePlayed(record) => Some(record),
                _ => None,
            }));
            if outcome != TurnOutcome::Continue {
                break;
            }
        }
        moves
    };
    assert_eq!(record(77), record(77));
}

#[test]
fn test_reset_while_waiting_for_human() {
    let mut config = fast_config(3);
    config.players.one = Seat::Human;
    let mut table = table(config);
    table.start_game();
    table.set_pads(Box::new(ResetAfter {
        frames: 10,
        latch: table.reset_latch(),
    }));

    assert_eq!(table.take_turn().unwrap(), TurnOutcome::Reset);
    assert!(table.events().drain().contains(&TableEvent::Reset));
    assert_eq!(table.vdp().back().visible_sprites(), 0);

    // A new game starts from a clean table.
    table.start_game();
    assert_eq!(table.game().turn(), 0);
    assert!(table.game().hand(Player::One).iter().all(Option::is_some));
}

#[test]
fn test_wins_persist_across_tables() {
    let dir = std::env::temp_dir().join(format!("ants_table_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ants.sav");
    let _ = std::fs::remove_file(&path);

    let mut config = fast_config(5);
    config.victory.castle = 31;

    let mut first = Table::new(
        config.clone(),
        AssetBank::procedural().unwrap(),
        Box::new(FileStore::new(&path)),
    )
    .unwrap();
    let Some(GameResult::Won(winner)) = first.play_game().unwrap() else {
        panic!("expected a winner");
    };

    let second = Table::new(
        config,
        AssetBank::procedural().unwrap(),
        Box::new(FileStore::new(&path)),
    )
    .unwrap();
    assert_eq!(second.settings().wins(winner), 1);
    assert_eq!(second.settings().wins(winner.other()), 0);

    std::fs::remove_dir_all(&dir).unwrap();
}
