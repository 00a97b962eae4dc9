// Inspection tables for texture import settings and build profiles
// This crate provides the record shapes, their column tables and the table controller

mod build_profile;
mod config;
mod record;
mod render;
mod snapshot;
mod table;
mod texture;

pub use build_profile::{
    first_scene_name, split_profile_name, BuildProfileRecord, ProfileHandle, ProfileSource,
};
pub use config::{InitialSort, TableConfig};
pub use record::TableRecord;
pub use render::render_table;
pub use snapshot::{load_records, records_from_json};
pub use table::TableView;
pub use texture::{TextureRecord, TextureType};
