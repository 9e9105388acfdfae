pub(crate) mod select;
