use packwire_common::{FileNameRenderOptions, FilenameTemplate};

pub const SCRIPT_FILENAMES: &str = "assets/[name].js";
pub const ASSET_CSS_FILENAMES: &str = "assets/[name].css";
pub const ASSET_DEFAULT_FILENAMES: &str = "assets/[name][extname]";

/// Template for an emitted asset. Exactly `.css` (case-sensitive) picks the
/// stylesheet template; anything else, an empty extension included, keeps
/// the asset's own extension.
pub fn asset_filename_template(extname: &str) -> &'static str {
  if extname == ".css" { ASSET_CSS_FILENAMES } else { ASSET_DEFAULT_FILENAMES }
}

pub fn name_asset(name: &str, extname: &str) -> String {
  FilenameTemplate::from(asset_filename_template(extname))
    .render(&FileNameRenderOptions { name: Some(name), extname: Some(extname) })
}

/// Entry points and code-split chunks always emit as `.js`, whatever the
/// source module's extension was.
pub fn name_entry_or_chunk(name: &str) -> String {
  FilenameTemplate::from(SCRIPT_FILENAMES)
    .render(&FileNameRenderOptions { name: Some(name), extname: None })
}
