//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use crate::patch::Locale;
use crate::patcher::Patcher;

/// テスト用のロケールファイルを作成する
///
/// 親ディレクトリ（`localesDir`）がなければ作成する。
///
/// # Returns
/// 作成したファイルのパス
pub(crate) fn write_locale(patcher: &Patcher, locale: Locale, content: &str) -> PathBuf {
    let path = patcher.locale_path(locale);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// ファイルを JSON として読み込む
pub(crate) fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
