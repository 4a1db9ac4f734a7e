//! Application state stores
//!
//! Each store owns one slice of lobby state (games, jackpots) behind a
//! cheaply clonable handle, tracks its own loading/error lifecycle, and
//! recomputes derived values on every read.

mod games;
mod jackpots;

pub use games::GamesStore;
pub use jackpots::JackpotsStore;
