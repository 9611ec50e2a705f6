mod project_assets;

pub use project_assets::add_boilerplate;
