use derive_more::Display;
use serde::{Deserialize, Serialize};
use tree_model::{ColumnHeader, ColumnTable, SortKey};

use crate::record::TableRecord;

/// Separator between platform and game in a profile name
const NAME_SEPARATOR: &str = " - ";

/// Shown when a profile has no scenes
const NO_SCENE: &str = "(none)";

/// Opaque reference to a build profile owned by the host
///
/// The table never interprets it; it is handed back to the caller when the
/// profile's action cell is activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
#[display(fmt = "{}", _0)]
pub struct ProfileHandle(pub String);

/// A build profile as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSource {
    /// Profile name, usually "Platform - Game"
    pub name: String,
    /// Scene paths included in the build, in build order
    #[serde(default)]
    pub scenes: Vec<String>,
    /// Whether this is the active profile
    #[serde(default)]
    pub active: bool,
    /// Host reference used to run the profile
    #[serde(default)]
    pub handle: Option<ProfileHandle>,
}

/// One row of the build profile table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ProfileSource")]
pub struct BuildProfileRecord {
    /// Full profile name
    pub profile_name: String,
    /// Platform part of the name
    pub platform_name: String,
    /// Game part of the name, empty if the name has no separator
    pub game_name: String,
    /// Whether this is the active profile
    pub is_active: bool,
    /// Number of scenes in the build
    pub scene_count: usize,
    /// File name of the first scene, without extension
    pub first_scene: String,
    /// Host reference used to run the profile
    pub handle: Option<ProfileHandle>,
}

/// Split a profile name into platform and game name
///
/// `"Web - Independence"` gives `("Web", "Independence")`. A name without
/// the `" - "` separator is all platform, with an empty game name. Only the
/// first two parts are used.
pub fn split_profile_name(name: &str) -> (&str, &str) {
    let mut parts = name.split(NAME_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(platform), Some(game)) => (platform.trim(), game.trim()),
        _ => (name, ""),
    }
}

/// Display name of the first scene of a build
///
/// This is the file name without directories or extension, or `"(none)"`
/// when there are no scenes. Both `/` and `\` separate directories, and
/// everything from the last `.` of the file name on is the extension, so a
/// path ending in a separator or a name like `.unity` gives an empty name.
pub fn first_scene_name<S: AsRef<str>>(scenes: &[S]) -> String {
    match scenes.first() {
        Some(path) => file_stem(path.as_ref()).to_string(),
        None => NO_SCENE.to_string(),
    }
}

fn file_stem(path: &str) -> &str {
    let file_name = path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path);
    match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    }
}

impl BuildProfileRecord {
    pub const PROFILE_NAME_COLUMN: usize = 0;
    pub const PLATFORM_COLUMN: usize = 1;
    pub const GAME_NAME_COLUMN: usize = 2;
    pub const FIRST_SCENE_COLUMN: usize = 3;
    pub const ACTIVE_COLUMN: usize = 4;
    pub const SCENE_COUNT_COLUMN: usize = 5;
    pub const BUILD_AND_RUN_COLUMN: usize = 6;

    /// Create a record from a profile name and its scene paths
    pub fn new<S: AsRef<str>>(
        profile_name: impl Into<String>,
        scenes: &[S],
        is_active: bool,
        handle: Option<ProfileHandle>,
    ) -> Self {
        let profile_name = profile_name.into();
        let (platform, game) = split_profile_name(&profile_name);

        Self {
            platform_name: platform.to_string(),
            game_name: game.to_string(),
            is_active,
            scene_count: scenes.len(),
            first_scene: first_scene_name(scenes),
            handle,
            profile_name,
        }
    }

    /// Host reference to hand back when the profile's action is triggered
    pub fn handle(&self) -> Option<&ProfileHandle> {
        self.handle.as_ref()
    }

    fn profile_name_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.profile_name)
    }

    fn platform_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.platform_name)
    }

    fn game_name_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.game_name)
    }

    fn first_scene_key(&self) -> SortKey<'_> {
        SortKey::Text(&self.first_scene)
    }

    fn active_key(&self) -> SortKey<'_> {
        SortKey::Bool(self.is_active)
    }

    fn scene_count_key(&self) -> SortKey<'_> {
        SortKey::Int(self.scene_count as i64)
    }
}

impl From<ProfileSource> for BuildProfileRecord {
    fn from(source: ProfileSource) -> Self {
        Self::new(source.name, &source.scenes, source.active, source.handle)
    }
}

impl TableRecord for BuildProfileRecord {
    const ACTION_COLUMN: Option<usize> = Some(Self::BUILD_AND_RUN_COLUMN);

    fn default_headers() -> Vec<ColumnHeader> {
        vec![
            ColumnHeader::new("Profile Name", 200, 150),
            ColumnHeader::new("Platform", 100, 80),
            ColumnHeader::new("Game Name", 120, 100),
            ColumnHeader::new("First Scene", 80, 60),
            ColumnHeader::new("Active", 60, 60),
            ColumnHeader::new("Scenes", 80, 60),
            ColumnHeader::new("Build & Run", 100, 90).unsortable(),
        ]
    }

    fn column_table() -> ColumnTable<Self> {
        ColumnTable::new()
            .with_column(Self::profile_name_key)
            .with_column(Self::platform_key)
            .with_column(Self::game_name_key)
            .with_column(Self::first_scene_key)
            .with_column(Self::active_key)
            .with_column(Self::scene_count_key)
            .with_unsorted_column()
    }

    fn cell_text(&self, column: usize) -> Option<String> {
        let text = match column {
            Self::PROFILE_NAME_COLUMN => self.profile_name.clone(),
            Self::PLATFORM_COLUMN => self.platform_name.clone(),
            Self::GAME_NAME_COLUMN => self.game_name.clone(),
            Self::FIRST_SCENE_COLUMN => self.first_scene.clone(),
            Self::ACTIVE_COLUMN => {
                let active = if self.is_active { "Yes" } else { "No" };
                active.to_string()
            }
            Self::SCENE_COUNT_COLUMN => self.scene_count.to_string(),
            Self::BUILD_AND_RUN_COLUMN => "Build & Run".to_string(),
            _ => return None,
        };
        Some(text)
    }

    fn label(&self) -> &str {
        &self.profile_name
    }
}
