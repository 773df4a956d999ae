/// Replaces everything outside the portable filename charset with `_`, so a
/// derived `[name]` never smuggles separators or shell metacharacters into an
/// output template.
pub fn sanitize_file_name(name: &str) -> String {
  let mut sanitized = String::with_capacity(name.len());
  for char in name.chars() {
    if char.is_ascii_alphanumeric() || matches!(char, '-' | '_' | '.') {
      sanitized.push(char);
    } else {
      sanitized.push('_');
    }
  }
  sanitized
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("main"), "main");
  assert_eq!(sanitize_file_name("app.config"), "app.config");
  assert_eq!(sanitize_file_name("a/b\\c d\0"), "a_b_c_d_");
}
