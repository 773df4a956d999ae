use std::path::PathBuf;

use serde::Serialize;

/// The three absolute, normalized paths the external bundler is pointed at.
/// Computed once at configuration time; immutable afterwards. Field names
/// serialize in the camelCase spelling of the external contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLayout {
  pub root: PathBuf,
  pub entry_file: PathBuf,
  pub out_dir: PathBuf,
}
