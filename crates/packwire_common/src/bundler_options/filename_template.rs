/// An output filename pattern using the `[name]` and `[extname]` placeholder
/// tokens the external bundler substitutes at emit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
  template: String,
}

#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'me> {
  pub name: Option<&'me str>,
  pub extname: Option<&'me str>,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut rendered = self.template.clone();
    if let Some(name) = options.name {
      rendered = rendered.replace("[name]", name);
    }
    if let Some(extname) = options.extname {
      rendered = rendered.replace("[extname]", extname);
    }
    rendered
  }
}

impl From<String> for FilenameTemplate {
  fn from(template: String) -> Self {
    Self::new(template)
  }
}

impl From<&str> for FilenameTemplate {
  fn from(template: &str) -> Self {
    Self::new(template.to_string())
  }
}
