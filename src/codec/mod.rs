pub(crate) mod fields;
pub(crate) mod registry;
pub(crate) mod serde_impls;
pub(crate) mod text;
