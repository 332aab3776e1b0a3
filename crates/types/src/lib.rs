use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Opaque identifier assigned to an item by the remote source.
///
/// The wire format is loose about the identifier's JSON type (json-server
/// style backends emit numbers, others emit strings), so decoding accepts
/// both and normalizes to text. An identifier is never empty: an item record
/// without a usable `id` fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdRepr {
            Text(String),
            Number(serde_json::Number),
        }

        let raw = match IdRepr::deserialize(deserializer)? {
            IdRepr::Text(text) => text,
            IdRepr::Number(number) => number.to_string(),
        };
        if raw.is_empty() {
            return Err(de::Error::custom("item id must not be empty"));
        }
        Ok(ItemId(raw))
    }
}

/// The five display attributes of a menu entry.
///
/// All values are free text displayed verbatim. Fields absent from a wire
/// record default to the empty string; `rating` additionally accepts a JSON
/// number and keeps its textual rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Display label for the entry
    #[serde(default)]
    pub name: String,
    /// Secondary label: where the dish is served
    #[serde(default)]
    pub restaurant: String,
    /// Reference (URL) to the entry's visual asset
    #[serde(default)]
    pub image: String,
    /// Score, numeric or textual, shown verbatim
    #[serde(default, deserialize_with = "text_or_number")]
    pub rating: String,
    /// Free-text remark
    #[serde(default)]
    pub comment: String,
}

impl ItemFields {
    /// Accessible text for the detail image slot.
    pub fn image_alt(&self) -> String {
        format!("Image of {}", self.name)
    }
}

/// A menu entry as returned by the remote source. Always carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
}

/// A menu entry appended locally through the form. Never has an id, is never
/// eligible for a detail lookup, and is lost on the next collection load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem {
    pub fields: ItemFields,
}

/// One menu entry, tagged by provenance.
///
/// The variant replaces the original null-check on the identifier: whether an
/// entry can be activated for a detail lookup is decided by matching on this
/// enum, not by inspecting an optional id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Remote(RemoteItem),
    Draft(DraftItem),
}

impl MenuItem {
    pub fn fields(&self) -> &ItemFields {
        match self {
            MenuItem::Remote(item) => &item.fields,
            MenuItem::Draft(item) => &item.fields,
        }
    }

    /// Identifier for remote items; drafts have none by construction.
    pub fn id(&self) -> Option<&ItemId> {
        match self {
            MenuItem::Remote(item) => Some(&item.id),
            MenuItem::Draft(_) => None,
        }
    }
}

impl From<RemoteItem> for MenuItem {
    fn from(item: RemoteItem) -> Self {
        MenuItem::Remote(item)
    }
}

impl From<DraftItem> for MenuItem {
    fn from(item: DraftItem) -> Self {
        MenuItem::Draft(item)
    }
}

/// Decode a value that may arrive as a JSON string or number into text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_item_decodes_numeric_id_and_rating() {
        let json = r#"{
            "id": 1,
            "name": "Shoyu",
            "restaurant": "A",
            "image": "a.jpg",
            "rating": 8,
            "comment": "good"
        }"#;

        let item: RemoteItem = serde_json::from_str(json).expect("deserialize RemoteItem");
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.fields.name, "Shoyu");
        assert_eq!(item.fields.restaurant, "A");
        assert_eq!(item.fields.image, "a.jpg");
        assert_eq!(item.fields.rating, "8");
        assert_eq!(item.fields.comment, "good");
    }

    #[test]
    fn remote_item_decodes_string_id_and_rating() {
        let json = r#"{"id": "abc-42", "name": "Tonkotsu", "rating": "9.5"}"#;
        let item: RemoteItem = serde_json::from_str(json).expect("deserialize RemoteItem");
        assert_eq!(item.id.as_str(), "abc-42");
        assert_eq!(item.fields.rating, "9.5");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{"id": 7, "name": "Miso"}"#;
        let item: RemoteItem = serde_json::from_str(json).expect("deserialize RemoteItem");
        assert_eq!(item.fields.restaurant, "");
        assert_eq!(item.fields.image, "");
        assert_eq!(item.fields.rating, "");
        assert_eq!(item.fields.comment, "");
    }

    #[test]
    fn missing_id_fails_decode() {
        let json = r#"{"name": "Shio"}"#;
        let result: Result<RemoteItem, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn null_id_fails_decode() {
        let json = r#"{"id": null, "name": "Shio"}"#;
        let result: Result<RemoteItem, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn activation_eligibility_is_a_match_on_the_variant() {
        let remote: MenuItem = RemoteItem {
            id: ItemId::from("3"),
            fields: ItemFields::default(),
        }
        .into();
        let draft: MenuItem = DraftItem {
            fields: ItemFields::default(),
        }
        .into();

        assert_eq!(remote.id().map(ItemId::as_str), Some("3"));
        assert_eq!(draft.id(), None);
    }

    #[test]
    fn image_alt_is_derived_from_name() {
        let fields = ItemFields {
            name: "Shoyu".into(),
            ..Default::default()
        };
        assert_eq!(fields.image_alt(), "Image of Shoyu");
    }
}
