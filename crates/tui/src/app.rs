//! Application state and logic for the ramen menu TUI.
//!
//! This module contains the main application state and the pure update
//! function that drives it. All state transitions happen here, decoupled from
//! the terminal, so the browse/detail/append behavior can be tested without a
//! running event loop.

use ramen_types::{DraftItem, ItemFields, ItemId, MenuItem, RemoteItem};
use ratatui::widgets::ListState;

use crate::ui::components::text_input::TextInputState;

/// Static message shown in the collection pane when the menu cannot be
/// loaded. The underlying diagnostic goes to the log, not the screen.
pub const COLLECTION_LOAD_FAILED: &str = "Could not load the menu. Is the server running?";

/// Fixed name-slot text for the detail pane's error snapshot.
pub const DETAIL_LOAD_FAILED: &str = "Could not load this item";

/// Image reference shown in the detail pane's error snapshot.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The selectable menu tiles
    #[default]
    Collection,
    /// The append form
    Form,
}

/// Messages that can be sent to update the application state.
///
/// These are the system events produced by completed fetches and the
/// runtime's housekeeping; direct key handling lives in the components.
#[derive(Debug, Clone)]
pub enum Msg {
    /// The collection fetch finished. `Err` carries the diagnostic for the log.
    CollectionLoaded(Result<Vec<RemoteItem>, String>),
    /// A single-item fetch finished.
    ItemLoaded {
        id: ItemId,
        result: Result<RemoteItem, String>,
    },
    /// Periodic UI tick (throbber animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that state changes ask the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full collection from the remote source
    LoadCollection,
    /// Fetch one item by identifier
    FetchItem(ItemId),
    /// Leave the application
    Quit,
}

/// Outcome of the collection loader's single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollectionStatus {
    /// Initial fetch still in flight
    #[default]
    Loading,
    /// Tiles reflect the last successful load (plus any local drafts)
    Loaded,
    /// The load failed; the pane shows this single message
    Failed(String),
}

/// One selectable tile in the collection pane.
///
/// Wraps a [`MenuItem`]; whether the tile can be activated for a detail
/// lookup is decided by matching on the item's variant.
#[derive(Debug, Clone)]
pub struct Tile {
    pub item: MenuItem,
}

impl Tile {
    pub fn label(&self) -> &str {
        &self.item.fields().name
    }

    pub fn image(&self) -> &str {
        &self.item.fields().image
    }

    pub fn id(&self) -> Option<&ItemId> {
        self.item.id()
    }
}

/// State of the collection pane.
#[derive(Debug, Default)]
pub struct CollectionState {
    pub tiles: Vec<Tile>,
    pub status: CollectionStatus,
    pub list_state: ListState,
}

impl CollectionState {
    /// Replace the pane's entire content with freshly loaded items, in
    /// server-provided order. Wholesale rebuild: any previous tiles,
    /// including local drafts, are discarded.
    pub fn rebuild(&mut self, items: Vec<RemoteItem>) {
        self.tiles = items.into_iter().map(|item| Tile { item: item.into() }).collect();
        self.status = CollectionStatus::Loaded;
        self.list_state = ListState::default();
        if !self.tiles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Replace the pane's entire content with a single failure message.
    pub fn fail(&mut self, message: &str) {
        self.tiles.clear();
        self.status = CollectionStatus::Failed(message.to_string());
        self.list_state = ListState::default();
    }

    /// Append one inert draft tile. No status change, no network.
    pub fn append_draft(&mut self, draft: DraftItem) {
        self.tiles.push(Tile { item: draft.into() });
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(self.tiles.len() - 1));
        }
    }

    pub fn selected(&self) -> Option<&Tile> {
        self.list_state.selected().and_then(|idx| self.tiles.get(idx))
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.tiles.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.tiles.len() as isize - 1) as usize;
        self.list_state.select(Some(next));
    }
}

/// The detail pane: five display slots bound to at most one item at a time,
/// plus the derived accessible text for the image slot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub image: String,
    pub image_alt: String,
    pub name: String,
    pub restaurant: String,
    pub rating: String,
    pub comment: String,
}

impl DetailState {
    /// Fill all five slots in place from an item's fields.
    ///
    /// Presenting nothing is a logged no-op: the previous content stays on
    /// screen (accepted, documented staleness rather than a silent clear).
    pub fn present(&mut self, fields: Option<&ItemFields>) {
        let Some(fields) = fields else {
            tracing::debug!("detail presenter invoked without an item; keeping previous content");
            return;
        };
        self.image = fields.image.clone();
        self.image_alt = fields.image_alt();
        self.name = fields.name.clone();
        self.restaurant = fields.restaurant.clone();
        self.rating = fields.rating.clone();
        self.comment = fields.comment.clone();
    }

    /// Force the fixed error snapshot: static name text, cleared secondary
    /// slots, placeholder image reference.
    pub fn present_error(&mut self) {
        self.image = PLACEHOLDER_IMAGE.to_string();
        self.image_alt.clear();
        self.name = DETAIL_LOAD_FAILED.to_string();
        self.restaurant.clear();
        self.rating.clear();
        self.comment.clear();
    }

    pub fn is_empty(&self) -> bool {
        self == &DetailState::default()
    }
}

/// One labeled input row of the append form.
#[derive(Debug, Default)]
pub struct FormField {
    pub label: &'static str,
    pub input: TextInputState,
}

/// State of the append form: five named text fields and a focused row.
#[derive(Debug)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Default for FormState {
    fn default() -> Self {
        let fields = ["name", "restaurant", "image", "rating", "comment"]
            .into_iter()
            .map(|label| FormField {
                label,
                input: TextInputState::new(),
            })
            .collect();
        Self { fields, focused: 0 }
    }
}

impl FormState {
    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    pub fn focused_field_mut(&mut self) -> &mut FormField {
        let idx = self.focused;
        &mut self.fields[idx]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Read all field values verbatim into a draft item, then reset the form.
    ///
    /// No trimming, no coercion, no validation: an untouched field yields the
    /// empty string. This path cannot fail.
    pub fn take_draft(&mut self) -> DraftItem {
        let value = |label: &str| -> String {
            self.fields
                .iter()
                .find(|field| field.label == label)
                .map(|field| field.input.input().to_string())
                .unwrap_or_default()
        };
        let fields = ItemFields {
            name: value("name"),
            restaurant: value("restaurant"),
            image: value("image"),
            rating: value("rating"),
            comment: value("comment"),
        };
        for field in &mut self.fields {
            field.input.clear();
        }
        self.focused = 0;
        DraftItem { fields }
    }
}

/// The main application state containing all pane data.
#[derive(Debug, Default)]
pub struct App {
    /// Which pane receives keyboard input
    pub focus: Focus,
    /// Selectable menu tiles
    pub collection: CollectionState,
    /// The five detail slots
    pub detail: DetailState,
    /// The append form
    pub form: FormState,
    /// Number of fetches currently in flight (runtime-maintained)
    pub in_flight: usize,
    /// Animation frame for the fetch throbber
    pub throbber_idx: usize,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a message to the state, returning any follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::CollectionLoaded(Ok(items)) => {
                tracing::debug!(count = items.len(), "collection loaded");
                self.collection.rebuild(items.clone());
            }
            Msg::CollectionLoaded(Err(diagnostic)) => {
                tracing::warn!(%diagnostic, "collection load failed");
                self.collection.fail(COLLECTION_LOAD_FAILED);
            }
            Msg::ItemLoaded { id, result: Ok(item) } => {
                tracing::debug!(%id, "item loaded");
                self.detail.present(Some(&item.fields));
            }
            Msg::ItemLoaded {
                id,
                result: Err(diagnostic),
            } => {
                tracing::warn!(%id, %diagnostic, "item load failed");
                self.detail.present_error();
            }
            Msg::Tick => {
                if self.in_flight > 0 {
                    self.throbber_idx = self.throbber_idx.wrapping_add(1);
                }
            }
            Msg::Resize(..) => {}
        }
        Vec::new()
    }

    /// Activate the selected tile.
    ///
    /// Remote tiles trigger a detail fetch. Draft tiles have no identifier,
    /// so there is nothing to fetch: log and leave the detail pane untouched.
    pub fn activate_selected(&mut self) -> Vec<Effect> {
        let Some(tile) = self.collection.selected() else {
            return Vec::new();
        };
        match &tile.item {
            MenuItem::Remote(item) => vec![Effect::FetchItem(item.id.clone())],
            MenuItem::Draft(_) => {
                tracing::debug!("activated a draft tile without an identifier; ignoring");
                Vec::new()
            }
        }
    }

    /// Submit the append form: construct a draft from the field values and
    /// append one inert tile. Never contacts the remote source.
    pub fn submit_form(&mut self) {
        let draft = self.form.take_draft();
        self.collection.append_draft(draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramen_types::ItemId;

    fn remote(id: &str, name: &str, image: &str) -> RemoteItem {
        RemoteItem {
            id: ItemId::from(id),
            fields: ItemFields {
                name: name.into(),
                image: image.into(),
                ..Default::default()
            },
        }
    }

    fn shoyu() -> RemoteItem {
        RemoteItem {
            id: ItemId::from("1"),
            fields: ItemFields {
                name: "Shoyu".into(),
                restaurant: "A".into(),
                image: "a.jpg".into(),
                rating: "8".into(),
                comment: "good".into(),
            },
        }
    }

    fn type_into(app: &mut App, label: &str, text: &str) {
        let field = app
            .form
            .fields
            .iter_mut()
            .find(|field| field.label == label)
            .expect("known form field");
        for c in text.chars() {
            field.input.insert_char(c);
        }
    }

    #[test]
    fn collection_load_renders_every_item_in_server_order() {
        let mut app = App::new();
        let items = vec![remote("2", "Miso", "b.jpg"), remote("1", "Shoyu", "a.jpg")];
        let effects = app.update(&Msg::CollectionLoaded(Ok(items)));

        assert!(effects.is_empty());
        assert_eq!(app.collection.status, CollectionStatus::Loaded);
        assert_eq!(app.collection.tiles.len(), 2);
        assert_eq!(app.collection.tiles[0].label(), "Miso");
        assert_eq!(app.collection.tiles[0].image(), "b.jpg");
        assert_eq!(app.collection.tiles[0].id().map(ItemId::as_str), Some("2"));
        assert_eq!(app.collection.tiles[1].label(), "Shoyu");
        assert_eq!(app.collection.tiles[1].id().map(ItemId::as_str), Some("1"));
    }

    #[test]
    fn collection_reload_discards_previous_tiles_and_drafts() {
        let mut app = App::new();
        app.update(&Msg::CollectionLoaded(Ok(vec![remote("1", "Shoyu", "a.jpg")])));
        type_into(&mut app, "name", "Miso");
        app.submit_form();
        assert_eq!(app.collection.tiles.len(), 2);

        app.update(&Msg::CollectionLoaded(Ok(vec![remote("9", "Shio", "c.jpg")])));
        assert_eq!(app.collection.tiles.len(), 1);
        assert_eq!(app.collection.tiles[0].label(), "Shio");
    }

    #[test]
    fn item_load_fills_all_five_detail_slots() {
        let mut app = App::new();
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("1"),
            result: Ok(shoyu()),
        });

        assert_eq!(app.detail.name, "Shoyu");
        assert_eq!(app.detail.restaurant, "A");
        assert_eq!(app.detail.rating, "8");
        assert_eq!(app.detail.comment, "good");
        assert_eq!(app.detail.image, "a.jpg");
        assert_eq!(app.detail.image_alt, "Image of Shoyu");
    }

    #[test]
    fn append_adds_exactly_one_inert_tile_and_clears_the_form() {
        let mut app = App::new();
        app.update(&Msg::CollectionLoaded(Ok(vec![remote("1", "Shoyu", "a.jpg")])));
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("1"),
            result: Ok(shoyu()),
        });
        let detail_before = app.detail.clone();

        type_into(&mut app, "name", "Miso");
        type_into(&mut app, "image", "b.jpg");
        app.submit_form();

        assert_eq!(app.collection.tiles.len(), 2);
        let draft = &app.collection.tiles[1];
        assert_eq!(draft.label(), "Miso");
        assert_eq!(draft.image(), "b.jpg");
        assert_eq!(draft.id(), None);
        assert_eq!(draft.item.fields().restaurant, "");
        for field in &app.form.fields {
            assert_eq!(field.input.input(), "");
        }

        // Activating the draft produces no fetch and no detail change.
        app.collection.list_state.select(Some(1));
        let effects = app.activate_selected();
        assert!(effects.is_empty());
        assert_eq!(app.detail, detail_before);
    }

    #[test]
    fn form_values_are_taken_verbatim_without_trimming() {
        let mut app = App::new();
        type_into(&mut app, "name", "  Miso  ");
        type_into(&mut app, "rating", "not a number");
        app.submit_form();

        let fields = app.collection.tiles[0].item.fields();
        assert_eq!(fields.name, "  Miso  ");
        assert_eq!(fields.rating, "not a number");
    }

    #[test]
    fn failed_collection_load_leaves_a_single_message_and_zero_tiles() {
        let mut app = App::new();
        app.update(&Msg::CollectionLoaded(Ok(vec![remote("1", "Shoyu", "a.jpg")])));
        app.update(&Msg::CollectionLoaded(Err("connection refused".into())));

        assert_eq!(
            app.collection.status,
            CollectionStatus::Failed(COLLECTION_LOAD_FAILED.to_string())
        );
        assert!(app.collection.tiles.is_empty());
        assert!(app.collection.selected().is_none());
    }

    #[test]
    fn failed_item_load_forces_the_error_snapshot() {
        let mut app = App::new();
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("1"),
            result: Ok(shoyu()),
        });
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("404"),
            result: Err("status 404".into()),
        });

        assert_eq!(app.detail.name, DETAIL_LOAD_FAILED);
        assert_eq!(app.detail.image, PLACEHOLDER_IMAGE);
        assert_eq!(app.detail.restaurant, "");
        assert_eq!(app.detail.rating, "");
        assert_eq!(app.detail.comment, "");
    }

    #[test]
    fn activating_a_remote_tile_requests_its_detail_fetch() {
        let mut app = App::new();
        app.update(&Msg::CollectionLoaded(Ok(vec![remote("1", "Shoyu", "a.jpg")])));
        let effects = app.activate_selected();
        assert_eq!(effects, vec![Effect::FetchItem(ItemId::from("1"))]);
    }

    #[test]
    fn presenting_nothing_keeps_the_previous_detail_content() {
        let mut app = App::new();
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("1"),
            result: Ok(shoyu()),
        });
        let before = app.detail.clone();
        app.detail.present(None);
        assert_eq!(app.detail, before);
    }

    #[test]
    fn overlapping_item_loads_resolve_last_response_wins() {
        let mut app = App::new();
        let mut second = shoyu();
        second.id = ItemId::from("2");
        second.fields.name = "Tonkotsu".into();

        app.update(&Msg::ItemLoaded {
            id: ItemId::from("1"),
            result: Ok(shoyu()),
        });
        app.update(&Msg::ItemLoaded {
            id: ItemId::from("2"),
            result: Ok(second),
        });
        assert_eq!(app.detail.name, "Tonkotsu");
    }
}
