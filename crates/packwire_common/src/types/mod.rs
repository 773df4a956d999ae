pub mod pre_rendered_asset;
pub mod project_layout;
