pub mod loading_indicator;
pub mod nav_bar;
pub mod tile_grid;
