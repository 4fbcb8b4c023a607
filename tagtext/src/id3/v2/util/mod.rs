pub(crate) mod mappings;
pub(crate) mod pairs;
