mod app;
mod canvas;
mod dom;
mod garden;
mod palette;
mod quest;
mod resize;
mod util;

pub use app::run;
