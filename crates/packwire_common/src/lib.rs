mod bundler_options;
mod types;

pub use bundler_options::{
  BundlerOptions, asset_filenames::AssetFilenames,
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  normalized_bundler_options::NormalizedBundlerOptions,
};

pub use crate::types::{pre_rendered_asset::PreRenderedAsset, project_layout::ProjectLayout};
