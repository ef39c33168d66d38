#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use sea_battle::{
    init_logging, ConsoleObserver, InteractiveCombatant, LineInput, Match, MatchStatus,
    NullObserver, RandomCombatant, Side, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Simulate a computer vs. computer match.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    SEA BATTLE     ");
    println!("-------------------");
    println!(" Enter two numbers ");
    println!(" X - row   number  ");
    println!(" Y - column number ");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let mut observer = ConsoleObserver;
            let human = InteractiveCombatant::new(LineInput::stdin());
            let computer = RandomCombatant::new(BOARD_SIZE);
            let mut game = Match::new(
                &mut rng,
                Box::new(human),
                Box::new(computer),
                &mut observer,
            );
            game.board_mut(Side::B).set_hidden(true);

            greet();
            while game.status() == MatchStatus::InProgress {
                println!("{}", "-".repeat(20));
                println!("Your board:");
                println!("{}", game.board(Side::A));
                println!("{}", "-".repeat(20));
                println!("Computer's board:");
                println!("{}", game.board(Side::B));
                println!("{}", "-".repeat(20));
                match game.current_side() {
                    Side::A => println!("Your turn!"),
                    Side::B => println!("Computer's turn!"),
                }
                game.step(&mut rng, &mut observer);
            }
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let mut observer = NullObserver;
            let p1 = RandomCombatant::new(BOARD_SIZE);
            let p2 = RandomCombatant::new(BOARD_SIZE);
            let mut game = Match::new(&mut rng, Box::new(p1), Box::new(p2), &mut observer);

            let mut steps = 0u32;
            let winner = loop {
                steps += 1;
                if let MatchStatus::Won(winner) = game.step(&mut rng, &mut observer) {
                    break winner;
                }
            };
            println!("{:?} wins after {} steps", winner, steps);
        }
    }
    Ok(())
}
