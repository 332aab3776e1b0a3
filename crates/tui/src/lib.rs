//! # Ramen Menu Browser TUI Library
//!
//! Terminal user interface for browsing a ramen menu served by a local HTTP
//! API. Built on Ratatui with an Elm-style core: pure state updates in
//! [`app`], side effects executed at the runtime boundary.
//!
//! ## Key Features
//!
//! - One-shot collection load on startup, rendered as selectable tiles
//! - Per-item detail fetch on activation with a fixed error snapshot on
//!   failure
//! - Local append form whose drafts never touch the network
//! - Asynchronous, uncoordinated fetches (last response wins)
//!
//! ## Architecture
//!
//! Each pane (collection, detail, form) is a separate component that handles
//! its own key events and rendering. Components report `Effect`s; the runtime
//! turns them into spawned fetches whose results come back as `Msg`s.

mod app;
mod cmd;
mod runtime;
mod theme;
mod ui;

use anyhow::Result;
use ramen_api::MenuClient;

/// Runs the main TUI application loop.
///
/// Initializes the terminal interface, issues the one-shot collection load,
/// and runs the event loop that handles user input, fetch completions, and
/// rendering until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures (raw mode, alternate screen)
/// or event loop runtime errors. Fetch failures are not errors at this level;
/// they degrade into on-screen messages.
pub async fn run(client: MenuClient) -> Result<()> {
    runtime::run_app(client).await
}
