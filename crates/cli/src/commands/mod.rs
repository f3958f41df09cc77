pub(crate) mod serve;
pub(crate) mod settings;
pub(crate) mod token;
