//! Adds the `parent` section and `common` overrides to `en.json`.

use std::process::ExitCode;

use locale_patcher::cli::{
    self,
    UPDATE_TRANSLATIONS,
};

fn main() -> ExitCode {
    cli::main(&UPDATE_TRANSLATIONS)
}
