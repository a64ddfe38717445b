use log::{error, info};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tictactoe::{Session, SessionArgs};

fn main() {
    env_logger::init();

    let mut session = Session::new(SessionArgs::from_env());
    info!("Created game with uuid: {}", session.game_id());
    session.on_game_end(|event| info!("Game ended: {}", event.outcome));

    let mut rng = match std::env::var("TICTACTOE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
    {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    while !session.is_frozen() {
        let Some(&index) = session.board().vacant_indices().choose(&mut rng) else {
            break;
        };
        let player = session.current_player();
        match session.play(index) {
            Ok(state) => info!("{} took field {}, {}", player, index, state),
            Err(e) => {
                error!("Move on field {} was rejected: {}", index, e);
                break;
            }
        }
    }

    println!("{}\n\n{}", session.board(), session.status_message());

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize game data: {}", e),
    }
}
