pub mod asset_filenames;
pub mod filename_template;
pub mod normalized_bundler_options;

use std::path::PathBuf;

use crate::AssetFilenames;

/// Raw configuration as the user wrote it. Everything is optional here;
/// `normalize_options` decides what is required and what defaults apply.
#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  pub anchor: Option<PathBuf>,
  pub root: Option<Vec<String>>,
  pub input: Option<Vec<String>>,

  // --- Output
  pub out_dir: Option<Vec<String>>,
  pub empty_out_dir: Option<bool>,
  pub entry_filenames: Option<String>,
  pub chunk_filenames: Option<String>,
  pub asset_filenames: Option<AssetFilenames>,
}
