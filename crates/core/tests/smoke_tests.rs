use shogun_core::components::Ai;
use shogun_core::{Action, Game, GameConfig, Impossible, MessageTone, WELCOME_MESSAGE};

#[test]
fn new_games_start_consistent_for_many_seeds() {
    for seed in 0..25 {
        let game = Game::new(seed, GameConfig::default()).expect("default config is valid");
        let state = game.state();

        state.check_invariants().expect("fresh floors are consistent");
        assert_eq!(state.floor_number, 1);
        assert!(state.map.downstairs.is_some(), "seed {seed} has no staircase");
        assert!(state.map.is_visible(state.player().pos));
        assert_eq!(game.messages().messages()[0].text, WELCOME_MESSAGE);
        for actor in state.actors.values().filter(|actor| actor.id != state.player_id) {
            assert!(matches!(actor.ai, Some(Ai::Hostile { .. })));
        }
    }
}

#[test]
fn player_descends_from_the_staircase() {
    let seed = 31_337;
    let game = Game::new(seed, GameConfig::default()).expect("default config is valid");
    let mut state = game.into_state();
    let stairs = state.map.downstairs.expect("playable floor");
    state.player_mut().pos = stairs;
    let mut game = Game::from_state(state, seed, GameConfig::default()).expect("state is valid");

    let report = game.handle_player_action(Action::TakeStairs).expect("standing on stairs");

    assert!(report.descended);
    assert_eq!(game.state().floor_number, 2);
    assert_eq!(game.state().player().inventory.len(), 3);
    assert_eq!(game.messages().last().map(|m| m.tone), Some(MessageTone::Descend));
    game.state().check_invariants().expect("new floor is consistent");
}

#[test]
fn long_wait_session_never_breaks_invariants() {
    let mut game = Game::new(2_024, GameConfig::default()).expect("default config is valid");
    for _ in 0..200 {
        match game.handle_player_action(Action::Wait) {
            Ok(_) => {}
            Err(refusal) => {
                assert_eq!(refusal, Impossible::new("You are dead."));
                break;
            }
        }
        game.state().check_invariants().expect("waiting keeps state consistent");
    }
}
