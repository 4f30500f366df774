mod extract_scalars;

pub(crate) use extract_scalars::extract_scalars;
