use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use shogun_core::{Action, Direction, Game, GameConfig, LevelUpChoice};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> Option<T> {
    if slice.is_empty() {
        return None;
    }
    let p = rng.next_u64() as usize % slice.len();
    Some(slice[p].clone())
}

fn random_action(game: &Game, rng: &mut ChaCha8Rng) -> Action {
    let state = game.state();
    let carried = state.player().inventory.items().to_vec();
    let targets: Vec<_> = state
        .living_actors()
        .filter(|actor| actor.id != state.player_id && state.map.is_visible(actor.pos))
        .map(|actor| actor.pos)
        .collect();

    let roll = rng.next_u64() % 20;
    let direction = choose(rng, &Direction::ALL).unwrap_or(Direction::North);
    let (dx, dy) = direction.delta();
    match roll {
        0..=11 => Action::Bump { dx, dy },
        12 => Action::PickUp,
        13 => Action::Wait,
        14 => Action::TakeStairs,
        15..=17 => match choose(rng, &carried) {
            Some(item) => Action::UseItem { item, target: choose(rng, &targets) },
            None => Action::Wait,
        },
        18 => choose(rng, &carried).map_or(Action::Wait, |item| Action::Equip { item }),
        _ => choose(rng, &carried).map_or(Action::Wait, |item| Action::Drop { item }),
    }
}

fn run_fuzz_simulation(map_seed: u64, choice_seed: u64, max_turns: u32) -> Result<(), String> {
    let mut game = Game::new(map_seed, GameConfig::default()).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);

    for _ in 0..max_turns {
        if !game.is_player_alive() {
            break;
        }
        if game.level_up_pending() {
            let choice = choose(
                &mut rng,
                &[LevelUpChoice::Constitution, LevelUpChoice::Strength, LevelUpChoice::Agility],
            )
            .unwrap_or(LevelUpChoice::Strength);
            game.level_up(choice).map_err(|err| format!("pending level-up refused: {err}"))?;
        }

        let turn_before = game.state().turn;
        let action = random_action(&game, &mut rng);
        match game.handle_player_action(action) {
            Ok(report) if report.turn != turn_before + 1 => {
                let turn = report.turn;
                return Err(format!("turn counter jumped to {turn} on map_seed {map_seed}"));
            }
            Err(_) if game.state().turn != turn_before => {
                return Err(format!(
                    "refused {action:?} still advanced the turn on map_seed {map_seed}"
                ));
            }
            _ => {}
        }

        game.state()
            .check_invariants()
            .map_err(|violation| format!("Invariant failed on map_seed {map_seed}: {violation}"))?;
    }

    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(16));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, choice_seed)| {
            run_fuzz_simulation(map_seed, choice_seed, 400).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
