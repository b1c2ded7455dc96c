//! Literal translation patches, one per locale

/// Built-in patch table
mod table;
/// Locale and patch set types
mod types;

pub use table::{
    PATCH_TABLE,
    PatchTable,
    patch_set,
};
pub use types::{
    Locale,
    PARENT_SECTION,
    PatchSet,
    SectionOverride,
};
