pub mod components;
pub mod layout;
pub mod text;
pub mod theme;
pub mod view;
