//! Adds the `parent` section and `common` overrides to `ru.json` and `uz.json`.

use std::process::ExitCode;

use locale_patcher::cli::{
    self,
    UPDATE_ALL_TRANSLATIONS,
};

fn main() -> ExitCode {
    cli::main(&UPDATE_ALL_TRANSLATIONS)
}
