pub(crate) mod catalog;
pub(crate) mod serve;
pub(crate) mod simulate;
