use anyhow::Context;
use broadside::{
    init_logging, place_fleet, GameConfig, RandomShooter, Side, StandardBoard, TurnEngine, FLEET,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed_a> <seed_b>", args[0]);
        std::process::exit(1);
    }
    let seed_a: u64 = args[1].parse().context("seed_a must be an unsigned integer")?;
    let seed_b: u64 = args[2].parse().context("seed_b must be an unsigned integer")?;

    let config = GameConfig::default();
    let mut rng_a = SmallRng::seed_from_u64(seed_a);
    let mut rng_b = SmallRng::seed_from_u64(seed_b);

    // each side lays out its own fleet with its own generator
    let mut board_a = StandardBoard::new();
    let mut board_b = StandardBoard::new();
    place_fleet(&mut board_a, &FLEET, &mut rng_a, config.placement_attempts)?;
    place_fleet(&mut board_b, &FLEET, &mut rng_b, config.placement_attempts)?;

    let mut engine = TurnEngine::new(board_a, board_b, config)?;
    let mut ai_a = RandomShooter::with_label(rng_a, "A");
    let mut ai_b = RandomShooter::with_label(rng_b, "B");
    let outcome = engine.run(&mut ai_a, &mut ai_b, |_, _| {});

    let side = |side: Side| {
        let target = engine.board(side.opponent());
        json!({
            "shots": engine.shots_taken(side),
            "hits": target.hits().count_ones(),
            "ships_remaining": engine.board(side).ships_remaining(),
        })
    };

    let result = json!({
        "winner": outcome.winner().map(|s| s.to_string()),
        "outcome": outcome,
        "turns": engine.turn(),
        "a": side(Side::A),
        "b": side(Side::B),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
