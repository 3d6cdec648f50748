//! Neon Arcade entry point
//!
//! Headless demo run: charges into a couple of games with a scripted
//! player, then prints the wallet and the hall of fame. The real front end
//! drives [`neon_arcade::Arcade`] from its own render loop.

use std::time::{SystemTime, UNIX_EPOCH};

use neon_arcade::consts::FRAME_DT;
use neon_arcade::sim::{FrameInput, GridDir, InputAdapter, Key, RawEvent, SessionStatus};
use neon_arcade::{Arcade, GameId, Wallet};

fn main() {
    env_logger::init();

    let master_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("neon arcade starting (seed {master_seed})");

    // New players start with 200 credits
    let mut arcade = Arcade::new(Wallet::new(200), master_seed);

    play_snake(&mut arcade);
    play_dodger(&mut arcade);

    let wallet = arcade.economy();
    println!(
        "\nwallet: {} credits | {} played, {} won, {} lost",
        wallet.balance, wallet.matches_played, wallet.wins, wallet.losses
    );
    match arcade.highscores().to_json() {
        Ok(json) => println!("hall of fame: {json}"),
        Err(err) => log::error!("leaderboard serialization failed: {err}"),
    }
}

/// Walk the snake to its first food, then bail out
fn play_snake(arcade: &mut Arcade<Wallet>) {
    if let Err(err) = arcade.launch(GameId::Snake) {
        log::error!("{err}");
        return;
    }

    let turn = |dir| FrameInput {
        turn: Some(dir),
        ..Default::default()
    };

    // Start at (10,10), food at (15,15): five steps right, five down
    arcade.frame(FRAME_DT, &turn(GridDir::Right));
    for _ in 0..29 {
        arcade.frame(FRAME_DT, &FrameInput::default());
    }
    arcade.frame(FRAME_DT, &turn(GridDir::Down));
    for _ in 0..29 {
        arcade.frame(FRAME_DT, &FrameInput::default());
    }

    println!(
        "{}: score {}",
        GameId::Snake,
        arcade.score().unwrap_or(0)
    );
    arcade.exit();
}

/// Hold a line in the dodger until something hits us (or a minute passes)
fn play_dodger(arcade: &mut Arcade<Wallet>) {
    if let Err(err) = arcade.launch(GameId::Dodger) {
        log::error!("{err}");
        return;
    }

    let mut adapter = InputAdapter::new();
    let mut frames = 0u32;
    while arcade.status() == Some(SessionStatus::Playing) && frames < 3600 {
        // Weave: drift left for a second, then right
        if frames % 60 == 0 {
            if (frames / 60) % 2 == 0 {
                adapter.push(RawEvent::KeyUp(Key::Right));
                adapter.push(RawEvent::KeyDown(Key::Left));
            } else {
                adapter.push(RawEvent::KeyUp(Key::Left));
                adapter.push(RawEvent::KeyDown(Key::Right));
            }
        }
        arcade.frame(FRAME_DT, &adapter.frame_input());
        frames += 1;
    }
    adapter.reset();

    println!(
        "{}: score {} after {frames} frames",
        GameId::Dodger,
        arcade.score().unwrap_or(0)
    );
    arcade.exit();
}
