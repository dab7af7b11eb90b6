//! # CLI Module
//!
//! The command-line layer of the playlist builder. It has two halves:
//!
//! - **Server side**: [`auth`] logs in to Spotify, [`serve`] runs the playlist
//!   server the front end talks to.
//! - **Front end**: [`create`], [`search`], [`add`] and [`finish`] run a single
//!   interaction flow each, [`session`] runs them interactively against the
//!   same view so search results can be added by their number.
//!
//! ## Usage Patterns
//!
//! ```bash
//! playlist-builder auth                      # Log in once, token is cached
//! playlist-builder serve                     # Keep running in another terminal
//! playlist-builder create --name "Road Trip" # Start a playlist
//! playlist-builder search daft punk          # Look for tracks
//! playlist-builder add spotify:track:0DiWol3AO6WpXZgp0goxAV
//! playlist-builder finish --yes
//! playlist-builder session                   # All of the above, interactively
//! ```
//!
//! Front-end commands report through the terminal view; their return values
//! only decide the exit code.

mod auth;
mod input;
mod playlist;
mod search;
mod serve;
mod session;
mod view;

pub use auth::auth;
pub use input::Input;
pub use playlist::{add, create, finish};
pub use search::search;
pub use serve::serve;
pub use session::session;
pub use view::TerminalView;

use crate::{client::HttpBackend, config, controller::Controller, error};

pub type TerminalController = Controller<HttpBackend, TerminalView>;

fn controller(view: TerminalView) -> TerminalController {
    match HttpBackend::new(config::server_url()) {
        Ok(backend) => Controller::new(backend, view),
        Err(e) => error!("Invalid playlist server URL: {}", e),
    }
}
