//! Game-flow events.
//!
//! Entities and scenes signal high-level transitions (start playing, win,
//! lose, quit) by posting onto an unbounded channel; the main loop drains it
//! once per frame and swaps scenes accordingly. The channel keeps callbacks
//! from having to reach back into the scheduler while it is mid-iteration.

use crossbeam_channel::{Receiver, Sender, unbounded};

/// High-level transitions of the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Tear down the title board and start a play session.
    Play,
    /// The level director ran out of work with no enemies left.
    Win,
    /// The player ship was destroyed.
    Lose,
    /// Leave the main loop.
    Quit,
}

/// Create the sender/receiver pair for the game-flow bus.
pub fn game_bus() -> (Sender<GameEvent>, Receiver<GameEvent>) {
    unbounded()
}
