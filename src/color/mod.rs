pub(crate) mod ramp;
pub(crate) mod rgb;
