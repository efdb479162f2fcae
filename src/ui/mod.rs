pub mod app;
pub mod button;
pub mod render;
pub mod state;
