//! Feed items
//!
//! Items arrive as `{"style": <int>, "itemBean": {...}}`. The style
//! discriminant selects the card variant; each variant owns its payload shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Style discriminant for the picture grid card
pub const STYLE_PICTURE_GRID: u32 = 1;
/// Style discriminant for the large picture card
pub const STYLE_LARGE_PICTURE: u32 = 2;
/// Style discriminant for the thumbnail card
pub const STYLE_THUMBNAIL: u32 = 5;

/// Payload of a style 1 card: title above a row of pictures
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureGridBean {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pic_list: Vec<String>,
    #[serde(default)]
    pub sub_info: Vec<String>,
}

/// Payload of a style 2 card: title above one wide picture
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LargePictureBean {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pic_url: String,
    #[serde(default)]
    pub sub_info: Vec<String>,
}

/// Payload of a style 5 card: title beside a thumbnail
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailBean {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pic_url: String,
    #[serde(default)]
    pub sub_info: Vec<String>,
}

/// A single feed entry, immutable once fetched
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub enum Item {
    PictureGrid(PictureGridBean),
    LargePicture(LargePictureBean),
    Thumbnail(ThumbnailBean),
    /// Style the host has no card for; payload kept untouched
    Other { style: u32, payload: Value },
}

/// Recycling pool tag handed to the host view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemType(pub u32);

impl Item {
    /// Wire discriminant of this item
    pub fn style(&self) -> u32 {
        match self {
            Item::PictureGrid(_) => STYLE_PICTURE_GRID,
            Item::LargePicture(_) => STYLE_LARGE_PICTURE,
            Item::Thumbnail(_) => STYLE_THUMBNAIL,
            Item::Other { style, .. } => *style,
        }
    }

    pub fn item_type(&self) -> ItemType {
        ItemType(self.style())
    }

    /// Title text, if the variant carries one
    pub fn title(&self) -> &str {
        match self {
            Item::PictureGrid(bean) => &bean.title,
            Item::LargePicture(bean) => &bean.title,
            Item::Thumbnail(bean) => &bean.title,
            Item::Other { payload, .. } => payload
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn sub_info(&self) -> &[String] {
        match self {
            Item::PictureGrid(bean) => &bean.sub_info,
            Item::LargePicture(bean) => &bean.sub_info,
            Item::Thumbnail(bean) => &bean.sub_info,
            Item::Other { .. } => &[],
        }
    }
}

/// Wire shape shared by every style
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawItem {
    pub style: u32,
    #[serde(rename = "itemBean", default)]
    pub item_bean: Value,
}

impl TryFrom<RawItem> for Item {
    type Error = serde_json::Error;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        // A missing bean reads as an empty one
        let bean = || match &raw.item_bean {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };

        let item = match raw.style {
            STYLE_PICTURE_GRID => Item::PictureGrid(serde_json::from_value(bean())?),
            STYLE_LARGE_PICTURE => Item::LargePicture(serde_json::from_value(bean())?),
            STYLE_THUMBNAIL => Item::Thumbnail(serde_json::from_value(bean())?),
            style => Item::Other {
                style,
                payload: raw.item_bean,
            },
        };
        Ok(item)
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        let style = item.style();
        let item_bean = match item {
            Item::PictureGrid(bean) => serde_json::to_value(bean),
            Item::LargePicture(bean) => serde_json::to_value(bean),
            Item::Thumbnail(bean) => serde_json::to_value(bean),
            Item::Other { payload, .. } => Ok(payload),
        }
        .unwrap_or(Value::Null);

        RawItem { style, item_bean }
    }
}

/// Stable key the host view uses to track a row
pub fn item_key(index: usize) -> String {
    format!("row-{}", index)
}
