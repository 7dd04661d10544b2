pub mod session;
pub mod webhook;
pub mod webutils;
pub mod templates;
