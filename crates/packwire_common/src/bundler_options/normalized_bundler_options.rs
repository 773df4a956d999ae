use crate::{AssetFilenames, FilenameTemplate, PreRenderedAsset, ProjectLayout};

/// The defaulted, non-optional form of `BundlerOptions`. This is the value
/// handed to the external bundler; it is never mutated afterwards.
#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub layout: ProjectLayout,

  // --- Output
  pub empty_out_dir: bool,
  pub entry_filenames: String,
  pub chunk_filenames: String,
  pub asset_filenames: AssetFilenames,
}

impl NormalizedBundlerOptions {
  pub fn entry_filename_template(&self) -> FilenameTemplate {
    FilenameTemplate::new(self.entry_filenames.clone())
  }

  pub fn chunk_filename_template(&self) -> FilenameTemplate {
    FilenameTemplate::new(self.chunk_filenames.clone())
  }

  pub fn asset_filename_template(&self, asset: &PreRenderedAsset) -> FilenameTemplate {
    FilenameTemplate::new(self.asset_filenames.call(asset))
  }
}
