/// Plot layer: figure descriptions and the PNG backend.
///
/// `chart` builds a [`chart::LineChart`] from loaded data without side
/// effects; `render` hands it to plotters' bitmap backend.

pub mod axis;
pub mod chart;
pub mod render;
