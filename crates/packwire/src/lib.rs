mod config;
mod utils;

pub use crate::{
  config::BuildConfig,
  utils::{
    asset_naming::{name_asset, name_entry_or_chunk},
    normalize_options::normalize_options,
    resolve_layout::resolve_layout,
  },
};
pub use packwire_common::*;
pub use packwire_error::{ConfigError, ConfigResult};

pub(crate) type SharedOptions = std::sync::Arc<packwire_common::NormalizedBundlerOptions>;
