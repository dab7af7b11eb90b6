use std::sync::Arc;

use colored::Colorize;

use super::{Input, TerminalController, TerminalView, controller};
use crate::{config, controller::Field, info, utils, warning};

const HELP: &[(&str, &str)] = &[
    ("name <text>", "set the playlist name"),
    ("desc <text>", "set the playlist description"),
    ("create", "create the playlist"),
    ("search <query>", "search tracks"),
    ("add <number|uri>", "add a search result or a track URI"),
    ("finish", "finish the playlist"),
    ("help", "show this help"),
    ("quit", "leave the session"),
];

fn print_help() {
    for (command, description) in HELP {
        println!("  {} {}", format!("{:<18}", command).bold(), description);
    }
}

/// Interactive front end.
///
/// Create, search and add run in the background, so a search can go out
/// while a playlist is still being created. Finish runs in the foreground
/// because its confirmation reads the next line.
pub async fn session() {
    let input = Input::stdin();
    let controller: Arc<TerminalController> =
        Arc::new(controller(TerminalView::new(Some(Arc::clone(&input)))));

    info!("Talking to the playlist server at {}", config::server_url());
    print_help();

    while let Some(line) = input.next_line().await {
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        match command {
            "" => continue,
            "name" => controller.view().set(Field::PlaylistName, argument),
            "desc" => controller.view().set(Field::PlaylistDescription, argument),
            "create" => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    let _ = controller.create_playlist().await;
                });
            }
            "search" => {
                controller.view().set(Field::SearchQuery, argument);
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    let _ = controller.search().await;
                });
            }
            "add" => match utils::resolve_track_ref(argument, &controller.view().uris()) {
                Some(track_uri) => {
                    let controller = Arc::clone(&controller);
                    tokio::spawn(async move {
                        let _ = controller.add_to_playlist(&track_uri).await;
                    });
                }
                None if argument.is_empty() => warning!("Usage: add <number|uri>"),
                None => warning!("No such search result: '{}'", argument),
            },
            "finish" => {
                if let Err(e) = controller.finish().await {
                    warning!("Finish failed: {}", e);
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => warning!("Unknown command '{}'. Type help for a list.", other),
        }
    }
}
