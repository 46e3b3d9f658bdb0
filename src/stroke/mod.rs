pub(crate) mod history;
pub(crate) mod replay;
pub(crate) mod session;
