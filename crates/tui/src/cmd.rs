//! # Effect Execution Layer
//!
//! This module translates high-level application effects (`Effect`) into
//! spawned fetch tasks and is the boundary where the pure state management of
//! the app meets the network.
//!
//! ## Design
//! - [`run_from_effects`] spawns one tokio task per fetch effect; each task
//!   resolves to the [`Msg`] that carries its outcome back into
//!   [`crate::app::App::update`].
//! - Fetches are not coordinated with each other. Two overlapping detail
//!   fetches race and the detail pane reflects whichever response arrives
//!   last; no request is cancelled or retried.
//!
//! State updates stay pure; this layer owns the side effects.

use futures_util::stream::FuturesUnordered;
use ramen_api::MenuClient;
use tokio::task::{JoinHandle, spawn};

use crate::app::{Effect, Msg};

/// Spawn a fetch task for every network effect in the batch.
///
/// `Effect::Quit` is handled by the runtime before this point; anything else
/// reaching here is a read against the remote source. Failures are carried as
/// display strings in the resulting `Msg` (the diagnostic text already names
/// the endpoint, and the per-item message names the id).
pub fn run_from_effects(client: &MenuClient, effects: Vec<Effect>, pending: &mut FuturesUnordered<JoinHandle<Msg>>) {
    for effect in effects {
        match effect {
            Effect::LoadCollection => {
                let client = client.clone();
                pending.push(spawn(async move {
                    let result = client.list_items().await.map_err(|error| error.to_string());
                    Msg::CollectionLoaded(result)
                }));
            }
            Effect::FetchItem(id) => {
                let client = client.clone();
                pending.push(spawn(async move {
                    let result = client.get_item(&id).await.map_err(|error| error.to_string());
                    Msg::ItemLoaded { id, result }
                }));
            }
            Effect::Quit => {}
        }
    }
}
