pub(crate) mod controller;
pub(crate) mod transition;
pub(crate) mod viewport;
