pub(crate) mod fill_path;
pub(crate) mod stroke_path;

pub use fill_path::FillPathCmd;
pub use stroke_path::StrokePathCmd;
