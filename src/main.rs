use distle::cli::{AiInterface, Cli, CliInterface, display_summary, parse_cli};
use distle::dictionary::resolve_dictionary;
use distle::error::GameError;
use distle::game_state::{DistleGame, GameInterface, GameResult};
use distle::info_log;
use distle::logging::init_logging;
use distle::solver::DistlePlayer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn rng_for(seed: Option<u64>, offset: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_entropy(),
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let dictionary = resolve_dictionary(cli.dictionary_path.as_deref())?;
    info_log!("Loaded {} words", dictionary.len());

    let mut game = DistleGame::new(dictionary, rng_for(cli.seed, 0))?;
    let mut interface: Box<dyn GameInterface> = if cli.ai {
        let player = DistlePlayer::new(rng_for(cli.seed, 1));
        Box::new(AiInterface::new(player, cli.verbose))
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let mut won = 0;
    let mut played = 0;
    for _ in 0..cli.games {
        let outcome = game.new_game(cli.secret.as_deref(), cli.max_guesses, interface.as_mut())?;
        played += 1;
        if outcome.won() {
            won += 1;
        }
        info_log!(
            "Game {played}: {:?} after {} guesses (secret '{}')",
            outcome.result,
            outcome.guesses_used,
            outcome.secret
        );
        if outcome.result == GameResult::Abandoned {
            break;
        }
    }
    display_summary(won, played);
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("distle: {e}");
            ExitCode::FAILURE
        }
    }
}
