use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use broadside::cli::{describe_shot, fleet_status_lines, legend, side_by_side, Glyphs};
use broadside::player::{wait_for_enter, LineInput};
use broadside::{
    init_logging, ConsoleShooter, GameConfig, Outcome, RandomShooter, ShotSource, Side,
    TurnEngine, TurnEvent, Visibility, BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS,
    DEFAULT_TURN_LIMIT,
};

type Engine = TurnEngine<BOARD_SIZE>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Draw boards with plain ASCII symbols instead of emoji.
    #[arg(long, global = true)]
    ascii: bool,
}

#[derive(Args, Clone, Copy)]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_TURN_LIMIT, help = "Rounds before the game stops without a winner")]
    turn_limit: u32,
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS, help = "Random tries per ship when placing fleets")]
    placement_attempts: usize,
}

impl MatchArgs {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_turn_limit(self.turn_limit)
            .with_placement_attempts(self.placement_attempts)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two computer players fight it out.
    Auto {
        #[command(flatten)]
        game: MatchArgs,
        #[arg(long, default_value_t = 250, help = "Pause between rounds in milliseconds")]
        delay_ms: u64,
    },
    /// Play against the computer.
    Solo {
        #[command(flatten)]
        game: MatchArgs,
    },
    /// Two players taking turns at the same terminal.
    Hotseat {
        #[command(flatten)]
        game: MatchArgs,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Auto,
    Solo,
    Hotseat,
}

/// Renders events for one game mode.
struct Presenter {
    mode: Mode,
    names: [&'static str; 2],
    glyphs: Glyphs,
    delay: Duration,
}

impl Presenter {
    fn name(&self, side: Side) -> &'static str {
        match side {
            Side::A => self.names[0],
            Side::B => self.names[1],
        }
    }

    /// `side`'s own fleet next to what it knows of the opponent.
    fn show_view(&self, engine: &Engine, side: Side) {
        let own = engine.view(side, Visibility::Owner);
        let target = engine.view(side.opponent(), Visibility::Opponent);
        println!();
        let titles = (
            format!("{} - FLEET", self.name(side).to_uppercase()),
            format!("{} - TARGET", self.name(side).to_uppercase()),
        );
        for line in side_by_side(&titles.0, &own, &titles.1, &target, &self.glyphs) {
            println!("{}", line);
        }
        println!();
        println!("{}'s ships:", self.name(side));
        for line in fleet_status_lines(&own, &self.glyphs) {
            println!("{}", line);
        }
        println!("{}", legend(&self.glyphs));
    }

    /// Both fleets uncovered, for spectators.
    fn show_both(&self, engine: &Engine) {
        let a = engine.view(Side::A, Visibility::Owner);
        let b = engine.view(Side::B, Visibility::Owner);
        println!();
        for line in side_by_side(self.names[0], &a, self.names[1], &b, &self.glyphs) {
            println!("{}", line);
        }
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[H");
    }

    fn intro(&self, engine: &Engine) {
        match self.mode {
            Mode::Auto => self.show_both(engine),
            Mode::Solo => self.show_view(engine, Side::A),
            Mode::Hotseat => {
                self.clear_screen();
                println!("{}'s turn", self.name(Side::A));
                self.show_view(engine, Side::A);
            }
        }
    }

    fn observe(&self, event: &TurnEvent, engine: &Engine) {
        let report = match event {
            TurnEvent::Shot(report) => report,
            TurnEvent::Finished(outcome) => return self.finish(*outcome, engine),
        };
        println!("{}", describe_shot(self.name(report.shooter), report));
        let game_over = engine.board(report.shooter.opponent()).all_sunk();
        match self.mode {
            Mode::Auto => {
                if report.shooter == Side::B || game_over {
                    println!("--- turn {} ---", report.turn);
                    self.show_both(engine);
                    thread::sleep(self.delay);
                }
            }
            Mode::Solo => {
                if report.shooter == Side::B || game_over {
                    self.show_view(engine, Side::A);
                }
            }
            Mode::Hotseat => self.show_view(engine, report.shooter),
        }
    }

    /// Runs between turns. Returns `false` when the players stop the match.
    fn hand_off(&self, next: Side, engine: &Engine, pause: &mut impl LineInput) -> bool {
        let message = match (self.mode, next) {
            (Mode::Auto, _) => return true,
            (Mode::Solo, Side::B) => "\nPress Enter for the computer's turn...".to_string(),
            (Mode::Solo, Side::A) => "\nPress Enter to continue to the next turn...".to_string(),
            (Mode::Hotseat, _) => format!("\nPress Enter for {}'s turn...", self.name(next)),
        };
        match wait_for_enter(pause, &mut io::stdout(), &message) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                warn!("terminal i/o failed during hand-off: {}", e);
                return false;
            }
        }
        if self.mode == Mode::Hotseat {
            // the previous player's fleet leaves the screen before the next one shows
            self.clear_screen();
            println!("{}'s turn", self.name(next));
            self.show_view(engine, next);
        }
        true
    }

    fn finish(&self, outcome: Outcome, engine: &Engine) {
        println!();
        match outcome {
            Outcome::Winner(side) => {
                println!("{} wins in {} turns!", self.name(side), engine.turn());
            }
            Outcome::TurnLimitReached => {
                println!(
                    "Game stopped after {} turns with no winner.",
                    engine.config().turn_limit
                );
            }
            Outcome::Cancelled => println!("Game cancelled."),
        }
    }
}

fn seeded_rng(seed: Option<u64>, salt: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(salt)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn setup(game: &MatchArgs) -> anyhow::Result<Engine> {
    if let Some(s) = game.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = seeded_rng(game.seed, 0);
    let engine = Engine::with_random_fleets(game.config(), &mut rng)
        .context("could not set up the fleets, no game was started")?;
    Ok(engine)
}

fn play<A, B>(mut engine: Engine, side_a: &mut A, side_b: &mut B, presenter: &Presenter) -> Outcome
where
    A: ShotSource<BOARD_SIZE> + ?Sized,
    B: ShotSource<BOARD_SIZE> + ?Sized,
{
    presenter.intro(&engine);
    let mut pause = io::stdin();
    let outcome = engine.run_with_hand_off(
        side_a,
        side_b,
        |event, engine| presenter.observe(event, engine),
        |next, engine| presenter.hand_off(next, engine, &mut pause),
    );
    info!(
        "shots taken: {} = {}, {} = {}",
        presenter.name(Side::A),
        engine.shots_taken(Side::A),
        presenter.name(Side::B),
        engine.shots_taken(Side::B)
    );
    outcome
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let glyphs = if cli.ascii { Glyphs::ASCII } else { Glyphs::EMOJI };

    match cli.command {
        Commands::Auto { game, delay_ms } => {
            println!("Starting computer vs computer game...");
            let engine = setup(&game)?;
            let presenter = Presenter {
                mode: Mode::Auto,
                names: ["Computer 1", "Computer 2"],
                glyphs,
                delay: Duration::from_millis(delay_ms),
            };
            let mut ai1 = RandomShooter::with_label(seeded_rng(game.seed, 1), "computer 1");
            let mut ai2 = RandomShooter::with_label(seeded_rng(game.seed, 2), "computer 2");
            play(engine, &mut ai1, &mut ai2, &presenter);
        }
        Commands::Solo { game } => {
            println!("Starting single player game against the computer...");
            println!("Type a column letter and a row number (e.g., A5), or 'quit' to leave.");
            let engine = setup(&game)?;
            let presenter = Presenter {
                mode: Mode::Solo,
                names: ["You", "Computer"],
                glyphs,
                delay: Duration::ZERO,
            };
            let mut human = ConsoleShooter::stdio("You");
            let mut ai = RandomShooter::with_label(seeded_rng(game.seed, 1), "computer");
            play(engine, &mut human, &mut ai, &presenter);
        }
        Commands::Hotseat { game } => {
            println!("Starting two player game...");
            println!("Type a column letter and a row number (e.g., A5), or 'quit' to leave.");
            let engine = setup(&game)?;
            let presenter = Presenter {
                mode: Mode::Hotseat,
                names: ["Player 1", "Player 2"],
                glyphs,
                delay: Duration::ZERO,
            };
            let mut p1 = ConsoleShooter::stdio("Player 1");
            let mut p2 = ConsoleShooter::stdio("Player 2");
            play(engine, &mut p1, &mut p2, &presenter);
        }
    }
    Ok(())
}
