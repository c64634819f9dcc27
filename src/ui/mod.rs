//! Terminal UI: the event loop and the game view. Only ever calls the
//! engine's query API and `apply_move_mut`; all rules live in [`crate::game`].

mod app;
mod game_view;

pub use app::App;
