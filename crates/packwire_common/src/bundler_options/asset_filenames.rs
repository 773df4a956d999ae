use std::fmt;
use std::sync::Arc;

use crate::PreRenderedAsset;

type AssetFilenamesFn = dyn Fn(&PreRenderedAsset) -> String + Send + Sync;

/// The `asset_filenames` slot of the output contract: either a static
/// template string, or a function picking a template per asset descriptor.
#[derive(Clone)]
pub enum AssetFilenames {
  Template(String),
  Fn(Arc<AssetFilenamesFn>),
}

impl AssetFilenames {
  pub fn call(&self, asset: &PreRenderedAsset) -> String {
    match self {
      Self::Template(template) => template.clone(),
      Self::Fn(func) => func(asset),
    }
  }
}

impl fmt::Debug for AssetFilenames {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
      Self::Fn(_) => f.debug_tuple("Fn").field(&"..").finish(),
    }
  }
}

impl From<String> for AssetFilenames {
  fn from(template: String) -> Self {
    Self::Template(template)
  }
}

impl From<&str> for AssetFilenames {
  fn from(template: &str) -> Self {
    Self::Template(template.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn static_template_ignores_the_asset() {
    let slot = AssetFilenames::from("assets/[name][extname]");
    let asset = PreRenderedAsset::new("logo.png".into());
    assert_eq!(slot.call(&asset), "assets/[name][extname]");
  }

  #[test]
  fn function_slot_sees_the_descriptor() {
    let slot = AssetFilenames::Fn(Arc::new(|asset: &PreRenderedAsset| {
      format!("assets/{}", asset.name)
    }));
    let asset = PreRenderedAsset::new("style.css".into());
    assert_eq!(slot.call(&asset), "assets/style.css");
  }
}
