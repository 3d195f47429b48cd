pub mod footer;
pub mod hero;
pub mod history;
pub mod icons;
pub mod mobile_menu;
pub mod navbar;
pub mod shadow_scene;
pub mod story_reader;
pub mod workshop;
