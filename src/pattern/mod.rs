pub(crate) mod leaf;
pub(crate) mod mixer;
pub(crate) mod model;
