pub mod config;
pub mod easing;
pub mod layout;
pub mod palette;
pub mod prize;
pub mod session;
pub mod sound;
pub mod spin;
pub mod timeline;

#[cfg(test)]
pub(crate) mod testing;
