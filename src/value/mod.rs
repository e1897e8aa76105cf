pub(crate) mod literal;
pub(crate) mod model;
pub(crate) mod moves;
