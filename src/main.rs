//! Petdash main entry point.
//!
//! A virtual-pet dashboard client written in Rust using:
//! - **raylib** for windowing and sprite-sheet rendering
//! - **bevy_ecs** for entity-component-system architecture
//! - **ureq** on a background thread for talking to the dashboard server
//!
//! The window shows one animated pet whose activity (standing or running)
//! and satiation level are owned by the server: a periodic poll pulls the
//! authoritative state, and pressing SPACE feeds the pet and refreshes the
//! state immediately.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and network thread
//! 2. Load the breed's sprite sheet and spawn the pet entity
//! 3. Each frame: update time and input, run the schedule (poll timer,
//!    network message apply, animation), then render
//! 4. On window close, shut down and join the network thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --sprite-id 1 --variant husky/one
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use crate::events::net::NetCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::net::{NetBridge, NetConfig, setup_net, shutdown_net};
use crate::resources::registry::BreedRegistry;
use crate::resources::texturestore::TextureStore;
use crate::systems::animation::advance_animation;
use crate::systems::input::read_input;
use crate::systems::net::{
    apply_net_messages, poll_net_messages, poll_status_timer, send_feed_requests,
    update_bevy_chart_messages, update_bevy_net_messages,
};
use crate::systems::render::render_pass;
use crate::systems::time::update_world_time;

/// Virtual pet dashboard
#[derive(Parser)]
#[command(version, about = "Renders one fostered pet and keeps it in sync with the server")]
struct Cli {
    /// Server-side id of the pet to display.
    #[arg(long)]
    sprite_id: i64,

    /// Breed variant identifier, e.g. husky/one.
    #[arg(long, default_value = "husky/one")]
    variant: String,

    /// Override the server base URL from the config file.
    #[arg(long)]
    server_url: Option<String>,

    /// CSRF token to attach to feed requests.
    #[arg(long)]
    csrf_token: Option<String>,

    /// Path to the INI config file (default: ./config.ini).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load breed sheet geometry from a JSON file instead of the built-in
    /// table.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Path to the sprite sheet image (default derived from the variant).
    #[arg(long)]
    sheet: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // missing file: keep defaults
    if let Some(url) = &cli.server_url {
        config.base_url = url.trim_end_matches('/').to_string();
    }

    let registry = match &cli.registry {
        Some(path) => match BreedRegistry::load_from_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => BreedRegistry::default(),
    };

    let sheet_path = cli.sheet.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "./assets/sprites/{}.png",
            cli.variant.replace('/', "_")
        ))
    });

    log::info!(
        "Starting petdash for sprite {} ({})",
        cli.sprite_id,
        cli.variant
    );

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Pet Dashboard")
        .build();
    rl.set_target_fps(config.target_fps);

    let sheet_tex = rl
        .load_texture(&thread, &sheet_path.to_string_lossy())
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to load sprite sheet {:?}: {e}", sheet_path);
            std::process::exit(1);
        });
    let mut textures = TextureStore::new();
    textures.insert("pet-sheet", sheet_tex);

    // --------------- ECS world + resources ---------------
    let mut world = game::build_world(registry, &config);
    setup_net(
        &mut world,
        NetConfig {
            base_url: config.base_url.clone(),
            sprite_id: cli.sprite_id,
            csrf_token: cli.csrf_token.clone(),
            timeout_secs: config.timeout_secs,
        },
    );
    game::spawn_pet(
        &mut world,
        cli.sprite_id,
        &cli.variant,
        "pet-sheet",
        config.window_width as f32,
        config.window_height as f32,
    );

    // Sync with the server right away instead of waiting a full poll
    // interval.
    let _ = world.resource::<NetBridge>().tx_cmd.send(NetCmd::FetchStatus);

    let mut update = Schedule::default();
    update.add_systems(poll_status_timer);
    update.add_systems(send_feed_requests);
    update.add_systems(
        // Net messages must drain, become visible, and apply in order.
        (
            poll_net_messages,
            update_bevy_net_messages,
            apply_net_messages,
            update_bevy_chart_messages,
        )
            .chain(),
    );
    update.add_systems(advance_animation.after(apply_net_messages));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        read_input(&rl, &mut world);

        update.run(&mut world);

        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::RAYWHITE);
            render_pass(&mut world, &mut d, &textures);
        }

        world.clear_trackers();
    }

    shutdown_net(&mut world);
}
