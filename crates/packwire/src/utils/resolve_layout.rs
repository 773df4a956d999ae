use std::path::{Path, PathBuf};

use packwire_common::ProjectLayout;
use packwire_error::{ConfigError, ConfigResult};
use sugar_path::SugarPath;

/// Resolves the three layout paths against the configuration source's own
/// location. Resolution never consults the process working directory, so a
/// build started from any directory sees the same paths.
pub fn resolve_layout(
  anchor: &Path,
  root_segments: &[String],
  out_dir_segments: &[String],
  entry_segments: &[String],
) -> ConfigResult<ProjectLayout> {
  if !anchor.is_absolute() {
    return Err(ConfigError::msg(format!(
      "anchor `{}` must be an absolute path to the configuration source",
      anchor.display()
    )));
  }

  let anchor_dir = anchor.parent().filter(|dir| !dir.as_os_str().is_empty()).ok_or_else(|| {
    ConfigError::msg(format!("anchor `{}` has no parent directory", anchor.display()))
  })?;

  Ok(ProjectLayout {
    root: resolve_against(anchor_dir, root_segments, "root")?,
    entry_file: resolve_against(anchor_dir, entry_segments, "entry")?,
    out_dir: resolve_against(anchor_dir, out_dir_segments, "out_dir")?,
  })
}

fn resolve_against(anchor_dir: &Path, segments: &[String], field: &str) -> ConfigResult<PathBuf> {
  if segments.is_empty() {
    return Err(ConfigError::msg(format!("`{field}` must name at least one path segment")));
  }
  let mut joined = anchor_dir.to_path_buf();
  for segment in segments {
    joined.push(segment);
  }
  Ok(dunce::simplified(&joined.normalize()).to_path_buf())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
  }

  #[test]
  fn resolves_relative_to_the_anchor_directory() {
    let layout = resolve_layout(
      Path::new("/proj/vite.config.js"),
      &segments(&["frontend"]),
      &segments(&["static", "dist"]),
      &segments(&["frontend", "main.js"]),
    )
    .unwrap();

    assert_eq!(layout.root, Path::new("/proj/frontend"));
    assert_eq!(layout.entry_file, Path::new("/proj/frontend/main.js"));
    assert_eq!(layout.out_dir, Path::new("/proj/static/dist"));
  }

  #[test]
  fn a_segment_may_carry_separators() {
    let layout = resolve_layout(
      Path::new("/proj/vite.config.js"),
      &segments(&["frontend"]),
      &segments(&["static/dist"]),
      &segments(&["frontend/main.js"]),
    )
    .unwrap();

    assert_eq!(layout.entry_file, Path::new("/proj/frontend/main.js"));
    assert_eq!(layout.out_dir, Path::new("/proj/static/dist"));
  }

  #[test]
  fn normalizes_dot_segments() {
    let layout = resolve_layout(
      Path::new("/proj/config/vite.config.js"),
      &segments(&["..", "frontend"]),
      &segments(&["..", "static", ".", "dist"]),
      &segments(&["..", "frontend", "main.js"]),
    )
    .unwrap();

    assert_eq!(layout.root, Path::new("/proj/frontend"));
    assert_eq!(layout.out_dir, Path::new("/proj/static/dist"));
  }

  #[test]
  fn rejects_a_relative_anchor() {
    let anchor = Path::new("vite.config.js");
    let err =
      resolve_layout(anchor, &segments(&["frontend"]), &segments(&["dist"]), &segments(&["main.js"]))
        .unwrap_err();
    assert!(err[0].to_string().contains("absolute"));
  }

  #[test]
  fn rejects_an_anchor_without_a_parent() {
    let err = resolve_layout(
      Path::new("/"),
      &segments(&["frontend"]),
      &segments(&["dist"]),
      &segments(&["main.js"]),
    )
    .unwrap_err();
    assert!(err[0].to_string().contains("parent"));
  }

  #[test]
  fn an_empty_segment_sequence_never_aliases_the_anchor_directory() {
    let err = resolve_layout(
      Path::new("/proj/vite.config.js"),
      &[],
      &segments(&["static", "dist"]),
      &segments(&["frontend", "main.js"]),
    )
    .unwrap_err();
    assert!(err[0].to_string().contains("`root`"));

    let err = resolve_layout(
      Path::new("/proj/vite.config.js"),
      &segments(&["frontend"]),
      &[],
      &segments(&["frontend", "main.js"]),
    )
    .unwrap_err();
    assert!(err[0].to_string().contains("`out_dir`"));
  }
}
