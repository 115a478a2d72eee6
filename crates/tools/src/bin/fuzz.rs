use anyhow::{Result, bail};
use clap::Parser;
use game_core::{Action, Direction, Game, GameConfig, LevelUpChoice};
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
}

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

    let (dx, dy) = choose(rng, &Direction::ALL).unwrap_or(Direction::North).delta();
    match rng.next_u64() % 20 {
        // Bias to movement and melee
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

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut game = Game::new(args.seed, GameConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut refused = 0u32;

    for _ in 0..args.turns {
        if !game.is_player_alive() {
            let state = game.state();
            println!("Player died on floor {} after {} turns", state.floor_number, state.turn);
            break;
        }
        if game.level_up_pending() {
            let choice = choose(
                &mut rng,
                &[LevelUpChoice::Constitution, LevelUpChoice::Strength, LevelUpChoice::Agility],
            )
            .unwrap_or(LevelUpChoice::Constitution);
            game.level_up(choice)?;
        }

        let action = random_action(&game, &mut rng);
        if let Err(impossible) = game.handle_player_action(action) {
            debug!("{action:?} refused: {impossible}");
            refused += 1;
        }

        if let Err(violation) = game.state().check_invariants() {
            bail!("Invariant failed at turn {}: {violation}", game.state().turn);
        }
    }

    info!("final snapshot hash {:#018x}", game.snapshot_hash());
    println!(
        "Fuzzing completed successfully: floor {}, turn {}, {refused} refused actions.",
        game.state().floor_number,
        game.state().turn
    );
    Ok(())
}
