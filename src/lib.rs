//! locale-patcher
//!
//! フロントエンドのロケール JSON ファイルに固定の翻訳（`parent` セクションと
//! `common` の上書き）を適用するツール

pub mod cli;
pub mod config;
pub mod document;
pub mod patch;
pub mod patcher;

#[cfg(test)]
mod test_utils;

pub use document::{
    LocaleDocument,
    PatchError,
};
pub use patch::{
    Locale,
    PATCH_TABLE,
    PatchSet,
    patch_set,
};
pub use patcher::{
    PatchOutcome,
    Patcher,
    apply_patch,
    apply_patch_with,
};
