pub mod renderer;

pub use renderer::{load_layouts, Layout, Layouts, LiquidRenderer, Renderer};
