//! State and validation client of a Wordle style guessing game.
//!
//! [`store::Store`] composes the [`game`] and [`keyboard`] slices, the
//! [`api`] module talks to the endpoint that scores a guess.

pub mod api;
pub mod game;
pub mod keyboard;
pub mod store;
pub mod wordle;
