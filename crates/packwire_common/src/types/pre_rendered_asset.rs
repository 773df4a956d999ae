use arcstr::ArcStr;

/// What the external bundler tells us about an asset before it is written:
/// its logical filename, from which the extension is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRenderedAsset {
  pub name: ArcStr,
}

impl PreRenderedAsset {
  pub fn new(name: ArcStr) -> Self {
    Self { name }
  }

  /// The extension including the leading dot. Dotless names and dotfiles
  /// like `.env` have none.
  pub fn extname(&self) -> Option<&str> {
    let name = self.name.as_str();
    name.rfind('.').filter(|idx| *idx > 0).map(|idx| &name[idx..])
  }

  /// The logical name with the extension stripped, the `[name]` of the
  /// output template.
  pub fn base_name(&self) -> &str {
    let name = self.name.as_str();
    self.extname().map_or(name, |extname| &name[..name.len() - extname.len()])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn splits_name_and_extension() {
    let asset = PreRenderedAsset::new(arcstr::literal!("logo.png"));
    assert_eq!(asset.base_name(), "logo");
    assert_eq!(asset.extname(), Some(".png"));
  }

  #[test]
  fn dotless_and_dotfile_names_have_no_extension() {
    let asset = PreRenderedAsset::new(arcstr::literal!("LICENSE"));
    assert_eq!(asset.base_name(), "LICENSE");
    assert_eq!(asset.extname(), None);

    let asset = PreRenderedAsset::new(arcstr::literal!(".env"));
    assert_eq!(asset.base_name(), ".env");
    assert_eq!(asset.extname(), None);
  }

  #[test]
  fn only_the_last_dot_counts() {
    let asset = PreRenderedAsset::new(arcstr::literal!("style.module.css"));
    assert_eq!(asset.base_name(), "style.module");
    assert_eq!(asset.extname(), Some(".css"));
  }
}
