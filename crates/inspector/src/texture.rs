use derive_more::Display;
use serde::{Deserialize, Serialize};
use tree_model::{ColumnHeader, ColumnTable, SortKey};

use crate::record::TableRecord;

/// Import type of a texture asset
///
/// Discriminants follow the editor's own numbering, which is also the
/// order the type column sorts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum TextureType {
    #[default]
    #[display(fmt = "Default")]
    Default = 0,

    #[display(fmt = "NormalMap")]
    NormalMap = 1,

    #[serde(rename = "GUI")]
    #[display(fmt = "GUI")]
    Gui = 2,

    #[display(fmt = "Cookie")]
    Cookie = 4,

    #[display(fmt = "Lightmap")]
    Lightmap = 6,

    #[display(fmt = "Cursor")]
    Cursor = 7,

    #[display(fmt = "Sprite")]
    Sprite = 8,

    #[display(fmt = "SingleChannel")]
    SingleChannel = 10,

    #[display(fmt = "Shadowmask")]
    Shadowmask = 11,

    #[display(fmt = "DirectionalLightmap")]
    DirectionalLightmap = 12,
}

impl TextureType {
    /// Numeric value used for ordering
    pub fn ordinal(self) -> i64 {
        self as i64
    }
}

/// Import settings of one texture asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRecord {
    /// Asset path, used to select the asset when the row is selected
    pub path: String,
    /// Asset name
    pub name: String,
    /// Import type
    #[serde(rename = "type", default)]
    pub texture_type: TextureType,
    /// Maximum imported size in pixels
    pub max_size: u32,
    /// Name of the compression setting
    #[serde(rename = "compression")]
    pub compression_name: String,
    /// Whether crunch compression is enabled
    #[serde(rename = "crunch", default)]
    pub has_crunch_compression: bool,
    /// Crunch compression quality (0-100)
    #[serde(default)]
    pub crunch_quality: u8,
}

impl TextureRecord {
    pub const NAME_COLUMN: usize = 0;
    pub const TYPE_COLUMN: usize = 1;
    pub const MAX_SIZE_COLUMN: usize = 2;
    pub const COMPRESSION_COLUMN: usize = 3;
    pub const CRUNCH_COLUMN: usize = 4;
    pub const CRUNCH_QUALITY_COLUMN: usize = 5;

    /// Sort key on the crunch flag
    ///
    /// The default table sorts the crunch column by quality, like the
    /// quality column next to it. Install this key with
    /// [`ColumnTable::set_key`] to sort that column by the flag it shows.
    pub fn crunch_flag_key(&self) -> SortKey<'_> {
        SortKey::Bool(self.has_crunch_compression)
    }

    fn name_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.name)
    }

    fn type_key(&self) -> SortKey<'_> {
        SortKey::Int(self.texture_type.ordinal())
    }

    fn max_size_key(&self) -> SortKey<'_> {
        SortKey::Int(i64::from(self.max_size))
    }

    fn compression_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.compression_name)
    }

    fn crunch_quality_key(&self) -> SortKey<'_> {
        SortKey::Int(i64::from(self.crunch_quality))
    }
}

impl TableRecord for TextureRecord {
    fn default_headers() -> Vec<ColumnHeader> {
        vec![
            ColumnHeader::new("Texture", 250, 150),
            ColumnHeader::new("Type", 100, 80),
            ColumnHeader::new("Max Size", 80, 60),
            ColumnHeader::new("Compression", 120, 100),
            ColumnHeader::new("Crunch", 60, 60),
            ColumnHeader::new("Crunch Quality", 100, 80),
        ]
    }

    fn column_table() -> ColumnTable<Self> {
        // Column 4 shows the crunch flag but sorts by quality, same as column 5
        ColumnTable::new()
            .with_column(Self::name_key)
            .with_column(Self::type_key)
            .with_column(Self::max_size_key)
            .with_column(Self::compression_key)
            .with_column(Self::crunch_quality_key)
            .with_column(Self::crunch_quality_key)
    }

    fn cell_text(&self, column: usize) -> Option<String> {
        let text = match column {
            Self::NAME_COLUMN => self.name.clone(),
            Self::TYPE_COLUMN => self.texture_type.to_string(),
            Self::MAX_SIZE_COLUMN => self.max_size.to_string(),
            Self::COMPRESSION_COLUMN => self.compression_name.clone(),
            Self::CRUNCH_COLUMN => {
                if self.has_crunch_compression {
                    "yes".to_string()
                } else {
                    "no".to_string()
                }
            }
            Self::CRUNCH_QUALITY_COLUMN => self.crunch_quality.to_string(),
            _ => return None,
        };
        Some(text)
    }

    fn label(&self) -> &str {
        &self.name
    }
}
