use clap::Parser;
use durak::Game;
use durak_cli::{render_outcome, render_turn, seat_players, Args, GameHeader, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_to {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let players = seat_players(args.players, args.autoplay, args.deck);
    let mut game = Game::new(args.deck, players, &mut rng)?;
    let header = GameHeader {
        seed,
        deck: args.deck,
        trump: game.trump(),
        players: game.players().iter().map(|p| p.name.clone()).collect(),
    };

    println!("Trump suit is: {}", game.trump());
    let outcome = game.run(|record| {
        for line in render_turn(record, args.deck) {
            println!("{}", line);
        }
        if let Some(rec) = recorder.as_mut() {
            rec.store_turn(record);
        }
    });
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            for message in durak_cli::error_chain(&err) {
                error!("{}", message);
            }
            std::process::exit(1);
        }
    };
    for line in render_outcome(&result) {
        println!("{}", line);
    }

    if let Some(rec) = recorder.as_mut() {
        let path = rec.write_game_recording(header, &result)?;
        info!(path = %path.display(), "Recorded game");
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
