pub(crate) mod format;
pub(crate) mod nice;
pub(crate) mod number_plane;
pub(crate) mod range;
pub(crate) mod series;
pub(crate) mod style;
pub(crate) mod ticks;
