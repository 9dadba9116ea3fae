pub mod app;
pub mod ring;
pub mod theme;
pub mod toast;
pub mod window;
