pub mod asset_naming;
pub mod normalize_options;
pub mod resolve_layout;
