pub(crate) mod wkb;
