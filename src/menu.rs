//! Custom dbusmenu item types and property keys.
//!
//! The menu side attaches these type tags to otherwise generic menu items
//! to request specialized rendering (a volume slider, a transport bar,
//! track metadata). The property keys carry the displayed data for items
//! of the matching type.

use std::fmt;

pub const SLIDER_MENUITEM_TYPE: &str = "x-canonical-ido-slider-item";

pub const TRANSPORT_MENUITEM_TYPE: &str = "x-canonical-transport-bar";
pub const TRANSPORT_MENUITEM_STATE: &str = "x-canonical-transport-state";

pub const METADATA_MENUITEM_TYPE: &str = "x-canonical-metadata-menu-item";
pub const METADATA_MENUITEM_TEXT_ARTIST: &str = "x-canonical-metadata-text-artist";
pub const METADATA_MENUITEM_TEXT_PIECE: &str = "x-canonical-metadata-text-piece";
pub const METADATA_MENUITEM_TEXT_CONTAINER: &str = "x-canonical-metadata-text-container";
pub const METADATA_MENUITEM_IMAGE_PATH: &str = "x-canonical-metadata-image";

/// The custom item types, one variant per type tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MenuItemType {
    Slider,
    Transport,
    Metadata,
}

impl MenuItemType {
    pub const ALL: [MenuItemType; 3] = [
        MenuItemType::Slider,
        MenuItemType::Transport,
        MenuItemType::Metadata,
    ];

    /// The type tag attached to menu items of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemType::Slider => SLIDER_MENUITEM_TYPE,
            MenuItemType::Transport => TRANSPORT_MENUITEM_TYPE,
            MenuItemType::Metadata => METADATA_MENUITEM_TYPE,
        }
    }

    /// Look a received type tag back up, for renderer dispatch.
    pub fn from_type(tag: &str) -> Option<MenuItemType> {
        MenuItemType::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// The custom property keys defined for items of this type. The
    /// slider carries no custom keys; its value travels in the standard
    /// dbusmenu properties.
    pub fn property_keys(self) -> &'static [&'static str] {
        match self {
            MenuItemType::Slider => &[],
            MenuItemType::Transport => &[TRANSPORT_MENUITEM_STATE],
            MenuItemType::Metadata => &[
                METADATA_MENUITEM_TEXT_ARTIST,
                METADATA_MENUITEM_TEXT_PIECE,
                METADATA_MENUITEM_TEXT_CONTAINER,
                METADATA_MENUITEM_IMAGE_PATH,
            ],
        }
    }
}

impl fmt::Display for MenuItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
