use std::{borrow::Cow, ffi::OsStr};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  fn representative_file_name(&self) -> Cow<str>;
}

impl PathExt for std::path::Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  /// The name a bundler would use as `[name]` for a file: its stem, except
  /// that an `index` file is named after the directory containing it.
  fn representative_file_name(&self) -> Cow<str> {
    let stem = self.file_stem().map_or_else(|| self.to_string_lossy(), OsStr::to_string_lossy);

    if stem == "index" {
      if let Some(dir_name) = self.parent().and_then(Self::file_stem) {
        return dir_name.to_string_lossy();
      }
    }

    stem
  }
}

#[test]
fn test_representative_file_name() {
  use std::path::Path;

  let root = Path::new(".").join("frontend");
  assert_eq!(root.join("main.js").representative_file_name(), "main");
  assert_eq!(root.join("widgets").join("index.js").representative_file_name(), "widgets");
  assert_eq!(root.join("app.config.ts").representative_file_name(), "app.config");
}
