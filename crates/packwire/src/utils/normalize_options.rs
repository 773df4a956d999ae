use std::sync::Arc;

use anyhow::anyhow;
use packwire_common::{AssetFilenames, BundlerOptions, NormalizedBundlerOptions, PreRenderedAsset};
use packwire_error::ConfigResult;

use crate::utils::{
  asset_naming::{ASSET_CSS_FILENAMES, ASSET_DEFAULT_FILENAMES, SCRIPT_FILENAMES},
  resolve_layout::resolve_layout,
};

pub fn normalize_options(mut raw_options: BundlerOptions) -> ConfigResult<NormalizedBundlerOptions> {
  let mut missing: Vec<anyhow::Error> = Vec::new();

  let anchor = raw_options.anchor.take();
  if anchor.is_none() {
    missing.push(anyhow!(
      "`anchor` is required: relative paths resolve against the configuration source location, not the working directory"
    ));
  }
  let root = take_segments(&mut raw_options.root, "root", &mut missing);
  let out_dir = take_segments(&mut raw_options.out_dir, "out_dir", &mut missing);
  let input = take_segments(&mut raw_options.input, "input", &mut missing);

  let (Some(anchor), Some(root), Some(out_dir), Some(input)) = (anchor, root, out_dir, input)
  else {
    return Err(missing.into());
  };

  let layout = resolve_layout(&anchor, &root, &out_dir, &input)?;

  Ok(NormalizedBundlerOptions {
    layout,
    empty_out_dir: raw_options.empty_out_dir.unwrap_or(false),
    entry_filenames: raw_options.entry_filenames.unwrap_or_else(|| SCRIPT_FILENAMES.to_string()),
    chunk_filenames: raw_options.chunk_filenames.unwrap_or_else(|| SCRIPT_FILENAMES.to_string()),
    asset_filenames: raw_options.asset_filenames.unwrap_or_else(default_asset_filenames),
  })
}

fn take_segments(
  slot: &mut Option<Vec<String>>,
  field: &str,
  missing: &mut Vec<anyhow::Error>,
) -> Option<Vec<String>> {
  let segments = slot.take();
  if segments.is_none() {
    missing.push(anyhow!("`{field}` is required"));
  }
  segments
}

fn default_asset_filenames() -> AssetFilenames {
  AssetFilenames::Fn(Arc::new(|asset: &PreRenderedAsset| {
    if asset.extname() == Some(".css") {
      ASSET_CSS_FILENAMES.to_string()
    } else {
      ASSET_DEFAULT_FILENAMES.to_string()
    }
  }))
}
