/// UI module exports
pub mod components;
pub mod dialog;
pub mod popup;
mod session;
