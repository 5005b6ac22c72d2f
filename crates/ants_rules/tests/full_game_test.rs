//! Complete games driven by the computer on both sides.

use ants_rules::{ai, Dealer, GameConfig, GameResult, GameState, MemoryStore, Settings, MAX_RESOURCE};
use ants_shared::constants::HAND_SIZE;
use ants_shared::{Field, Player};

fn play(config: &GameConfig) -> GameState {
    let mut dealer = Dealer::new(config.seed);
    let mut game = GameState::new(config);
    for player in Player::ALL {
        for slot in 0..HAND_SIZE {
            game.deal(player, slot, dealer.deal());
        }
    }

    let mut player = Player::Two;
    let mut produce = false;
    while !game.is_over() {
        player = player.other();
        game.begin_turn(player, produce);
        let action = ai::choose_move(&game, player).unwrap();
        game.apply_move(action).unwrap();
        assert_eq!(game.empty_slot(), Some(action.slot()));
        game.fill_empty_slot(dealer.deal());
        assert!(game.hand(player).iter().all(Option::is_some));
        game.end_turn();
        produce = true;

        for p in Player::ALL {
            assert!(game.resources(p).values().iter().all(|&v| v <= MAX_RESOURCE));
        }
    }
    game
}

#[test]
fn test_games_terminate_with_a_valid_result() {
    for seed in 0..20 {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        let game = play(&config);
        match game.result().unwrap() {
            GameResult::Won(winner) => {
                let own = game.resources(winner)[Field::Castle];
                let enemy = game.resources(winner.other())[Field::Castle];
                assert!(own >= config.victory.castle || enemy == 0, "seed {seed}");
            }
            GameResult::TurnLimit => assert_eq!(game.turn(), config.turn_limit),
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig {
        seed: 1234,
        ..GameConfig::default()
    };
    let a = play(&config);
    let b = play(&config);
    assert_eq!(a.turn(), b.turn());
    assert_eq!(a.result(), b.result());
    assert_eq!(a.panel_values(), b.panel_values());
}

#[test]
fn test_short_turn_limit() {
    let config = GameConfig {
        turn_limit: 3,
        ..GameConfig::default()
    };
    let game = play(&config);
    assert!(game.turn() <= 3);
}

#[test]
fn test_winner_recorded_in_settings() {
    let mut store = MemoryStore::new();
    for seed in 0..5 {
        let game = play(&GameConfig {
            seed,
            ..GameConfig::default()
        });
        let mut settings = Settings::load_or_default(&mut store).unwrap();
        if let Some(GameResult::Won(winner)) = game.result() {
            settings.record_win(winner);
        }
        settings.save(&mut store).unwrap();
    }
    let settings = Settings::load_or_default(&mut store).unwrap();
    assert!(settings.wins(Player::One) + settings.wins(Player::Two) <= 5);
    assert!(store.blob().is_some());
}
