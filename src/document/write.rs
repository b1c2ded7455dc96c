//! Writing rewritten documents back to disk

use std::ffi::OsString;
use std::fs::{
    self,
    File,
    OpenOptions,
};
use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

/// How a rewritten document replaces the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteMode {
    /// Write a synced sibling temp file, then rename it over the target.
    ///
    /// Symlinks are followed and the target's permissions are kept.
    #[default]
    Atomic,
    /// Truncate and rewrite the target directly. A crash mid-write can leave
    /// a truncated file.
    InPlace,
}

/// Write `content` to `path` using `mode`.
///
/// # Errors
/// Returns the underlying I/O error; in atomic mode the target is left as it
/// was.
pub fn write_document(path: &Path, content: &[u8], mode: WriteMode) -> io::Result<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::InPlace => fs::write(path, content),
    }
}

/// Temporary sibling used by atomic writes (`en.json` → `en.json.<pid>.tmp`).
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// The file a write to `path` must end up in: symlinks resolved, or `path`
/// itself when nothing exists there yet.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = resolve_target(path)?;
    let temp_path = temp_path_for(&target);

    // create_new: never reuse a file we did not create.
    let file = OpenOptions::new().write(true).create_new(true).open(&temp_path)?;

    let result = fill_temp_file(file, &target, content)
        .and_then(|()| fs::rename(&temp_path, &target));
    if result.is_err() {
        discard_temp_file(&temp_path);
        return result;
    }

    sync_parent_dir(&target);
    Ok(())
}

fn fill_temp_file(mut file: File, target: &Path, content: &[u8]) -> io::Result<()> {
    file.write_all(content)?;
    match fs::metadata(target) {
        Ok(metadata) => file.set_permissions(metadata.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    file.sync_all()
}

/// Persist the rename itself. Failure only weakens durability, so it is logged.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    let Some(dir) = target.parent() else { return };
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        tracing::warn!("Failed to sync directory {:?}: {}", dir, e);
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}

fn discard_temp_file(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove temporary file {:?}: {}", temp_path, e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case(WriteMode::Atomic)]
    #[case(WriteMode::InPlace)]
    fn write_replaces_content(#[case] mode: WriteMode) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "{\"old\": true, \"padding\": \"xxxxxxxxxxxxxxxx\"}").unwrap();

        write_document(&path, b"{}", mode).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[rstest]
    fn atomic_write_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ru.json");

        write_document(&path, "{\"a\": \"б\"}".as_bytes(), WriteMode::Atomic).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\": \"б\"}");
        assert!(!temp_path_for(&fs::canonicalize(&path).unwrap()).exists());
    }

    #[rstest]
    fn atomic_write_failure_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails on every platform.
        let path = temp_dir.path().join("uz.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let result = write_document(&path, b"{}", WriteMode::Atomic);

        assert!(result.is_err());
        assert!(path.join("keep").exists());
        assert!(!temp_path_for(&fs::canonicalize(&path).unwrap()).exists());
    }

    #[rstest]
    fn atomic_write_never_touches_an_existing_temp_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "{}").unwrap();
        let foreign = temp_path_for(&fs::canonicalize(&path).unwrap());
        fs::write(&foreign, "user data").unwrap();

        let result = write_document(&path, b"{\"new\": 1}", WriteMode::Atomic);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&foreign).unwrap(), "user data");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[rstest]
    fn atomic_write_leaves_plain_tmp_sibling_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        let sibling = temp_dir.path().join("en.json.tmp");
        fs::write(&sibling, "keep me").unwrap();

        write_document(&path, b"{}", WriteMode::Atomic).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
    }

    #[rstest]
    fn temp_path_is_unique_per_process() {
        let path = Path::new("frontend/src/locales/en.json");

        assert_eq!(
            temp_path_for(path),
            PathBuf::from(format!("frontend/src/locales/en.json.{}.tmp", std::process::id()))
        );
    }

    #[cfg(unix)]
    #[rstest]
    #[case(WriteMode::Atomic)]
    #[case(WriteMode::InPlace)]
    fn write_keeps_permissions(#[case] mode: WriteMode) {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        write_document(&path, b"{\"a\": 1}", mode).unwrap();

        let permissions = fs::metadata(&path).unwrap().permissions();
        assert_eq!(permissions.mode() & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[rstest]
    #[case(WriteMode::Atomic)]
    #[case(WriteMode::InPlace)]
    fn write_goes_through_symlink(#[case] mode: WriteMode) {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("en.json");
        fs::write(&real, "{}").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_document(&link, b"{\"a\": 1}", mode).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "{\"a\": 1}");
    }

    #[rstest]
    fn write_mode_uses_camel_case_names() {
        assert_eq!(serde_json::to_string(&WriteMode::InPlace).unwrap(), "\"inPlace\"");
        assert_eq!(serde_json::from_str::<WriteMode>("\"atomic\"").unwrap(), WriteMode::Atomic);
    }
}
