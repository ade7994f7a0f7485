use alloc::string::String;
use alloc::vec::Vec;

use crate::{Outcome, Player};

/// Notification from the controller to whatever draws the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Board contents changed, redraw them.
    Render,
    TurnChanged(Player),
    /// Drop any result text left over from a previous game.
    ClearResult,
    GameEnded(Outcome),
    /// Fired once per won game with the winner's name.
    Celebrate(String),
}

pub trait SignalSink {
    fn emit(&mut self, signal: Signal);
}

impl SignalSink for Vec<Signal> {
    fn emit(&mut self, signal: Signal) {
        self.push(signal);
    }
}
