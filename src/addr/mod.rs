pub mod classify;
pub mod codec;
