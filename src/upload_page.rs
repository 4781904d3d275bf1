pub mod clock;
pub mod core;
pub mod main;
pub mod render;
pub mod result_view;
pub mod run_effect;
pub mod text;
