use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use wb_core::World;
use wb_game::{
    AccessPolicy, GameConfig, GameSession, HELP_TEXT, JsonFileStore, StartReport, WinCheck,
};

const SEPARATOR_WIDTH: usize = 50;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn banner(title: &str) {
    println!("\n{}", separator());
    println!("{}", title.bold());
    println!("{}", separator());
}

fn prompt(reader: &mut impl BufRead, text: &str) -> Result<Option<String>, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run(
    world_path: &Path,
    save_path: &Path,
    username: Option<&str>,
    seed: Option<u64>,
    save_on_quit: bool,
) -> Result<(), String> {
    let world = World::from_path(world_path).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let username = match username {
        Some(u) => u.to_string(),
        None => prompt(&mut reader, "Please enter your username: ")?
            .ok_or("no username provided")?,
    };
    if username.is_empty() {
        return Err("username must not be empty".to_string());
    }

    let mut config = GameConfig::default().with_save_on_quit(save_on_quit);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let store = JsonFileStore::new(save_path);
    let (mut session, report) =
        GameSession::start(world, username.clone(), config, AccessPolicy::default(), store)
            .map_err(|e| format!("failed to start session: {e}"))?;

    match &report {
        StartReport::Resumed { items } => {
            banner("SAVE LOADED");
            println!(
                "Welcome back, {username}! Resuming from {} with {items} items.",
                session.location()
            );
        }
        StartReport::FreshAfterWin => {
            banner("SAVE LOADED");
            println!(
                "Welcome back, {username}! Since you've already discovered the secrets, \
                 you'll start at a new location."
            );
        }
        StartReport::NewExplorer => {
            println!(
                "Welcome, new explorer {username}! Starting at {}.",
                session.location()
            );
        }
    }

    println!("\nWelcome to the Wallbound Adventure Game:");
    println!(
        "Your mission: Explore the world, find Grisha's journals, \
         and discover the truth in Eren's Basement."
    );

    if report == StartReport::NewExplorer {
        banner("HOW TO PLAY");
        println!("{HELP_TEXT}");
    } else {
        println!("Type \"help\" for available commands.");
    }

    banner("STARTING LOCATION");
    println!("{}", session.display_location().map_err(|e| e.to_string())?);

    loop {
        match session.check_win().map_err(|e| e.to_string())? {
            WinCheck::Won(text) => {
                banner("YOU WON AND FIND THE TRUTH!");
                println!("{text}");
                break;
            }
            WinCheck::Partial(text) => {
                banner("PARTIAL DISCOVERY");
                println!("{text}");
            }
            WinCheck::Playing => {}
        }

        let Some(input) = prompt(&mut reader, "\nWhat would you like to do? ")? else {
            break; // EOF ends the session like quit, without saving
        };

        match session.process(&input) {
            Ok(turn) => {
                banner(&turn.heading);
                println!("{}", turn.text);
                if turn.quit {
                    break;
                }
            }
            Err(e) => {
                println!("{}", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
