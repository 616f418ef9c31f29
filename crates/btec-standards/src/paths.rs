//! Reference table path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use btec_model::QualificationType;

/// Environment variable for overriding the reference table directory.
pub const TABLES_ENV_VAR: &str = "BTEC_TABLES_DIR";

/// Directory of the bundled 2010 BTEC Nationals tables, relative to the standards root.
pub const BTEC_NATIONALS_2010: &str = "btec_nationals_2010";

/// Get the reference table directory.
///
/// Resolution order:
/// 1. `explicit` (the `--tables-dir` flag)
/// 2. `BTEC_TABLES_DIR` environment variable
/// 3. `standards/btec_nationals_2010/` relative to the workspace root
pub fn resolve_tables_dir(explicit: Option<&Path>) -> PathBuf {
    tables_dir_from(explicit, std::env::var_os(TABLES_ENV_VAR))
}

/// The bundled tables shipped with the workspace.
pub fn bundled_tables_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../standards")
        .join(BTEC_NATIONALS_2010)
}

/// Apply the resolution order to an already-read environment value.
/// An empty variable counts as unset.
pub fn tables_dir_from(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match env_value {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => bundled_tables_dir(),
    }
}

/// CSV file holding the table for `qualification`.
///
/// The file name comes from the enum's fixed identifier, never from caller text.
pub fn table_path(root: &Path, qualification: QualificationType) -> PathBuf {
    root.join(format!("{}.csv", qualification.as_str()))
}
