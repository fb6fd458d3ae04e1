mod palette;

pub use palette::Palette;
