use packwire_common::{
  BundlerOptions, FileNameRenderOptions, NormalizedBundlerOptions, PreRenderedAsset, ProjectLayout,
};
use packwire_error::ConfigResult;
use packwire_utils::{path_ext::PathExt, sanitize_file_name::sanitize_file_name};
use sugar_path::SugarPath;

use crate::{SharedOptions, utils::normalize_options::normalize_options};

/// The resolved configuration handed to the external bundler: normalized
/// once, queried per emitted file afterwards.
pub struct BuildConfig {
  options: SharedOptions,
}

impl BuildConfig {
  pub fn new(raw_options: BundlerOptions) -> ConfigResult<Self> {
    Ok(Self { options: SharedOptions::new(normalize_options(raw_options)?) })
  }

  pub fn options(&self) -> &NormalizedBundlerOptions {
    &self.options
  }

  pub fn layout(&self) -> &ProjectLayout {
    &self.options.layout
  }

  /// The `[name]` of the entry chunk, derived from the entry file. An
  /// `index` entry is named after its directory.
  pub fn entry_name(&self) -> String {
    sanitize_file_name(&self.options.layout.entry_file.representative_file_name())
  }

  pub fn filename_for_entry(&self, name: &str) -> String {
    self
      .options
      .entry_filename_template()
      .render(&FileNameRenderOptions { name: Some(name), extname: None })
  }

  pub fn filename_for_chunk(&self, name: &str) -> String {
    self
      .options
      .chunk_filename_template()
      .render(&FileNameRenderOptions { name: Some(name), extname: None })
  }

  pub fn filename_for_asset(&self, asset: &PreRenderedAsset) -> String {
    self.options.asset_filename_template(asset).render(&FileNameRenderOptions {
      name: Some(asset.base_name()),
      extname: asset.extname(),
    })
  }

  /// Where an emitted file lands on disk, as a slash-separated absolute
  /// path under `out_dir`.
  pub fn absolute_filename_for(&self, filename: &str) -> String {
    filename.absolutize_with(self.options.layout.out_dir.as_path()).expect_to_slash()
  }
}
