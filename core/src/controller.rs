use alloc::string::ToString;

use crate::*;

/// Which of the two players is on turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Seat {
    #[default]
    First,
    Second,
}

impl Seat {
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Owns the board, the two players and whose turn it is.
///
/// Every change is reported through a [`SignalSink`] so the drawing side never has to poll. Rejected moves are
/// silent no-ops: they emit nothing and leave the turn where it was.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controller {
    board: Board,
    players: Option<[Player; 2]>,
    current: Seat,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current.index()])
    }

    pub fn is_started(&self) -> bool {
        self.players.is_some()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.board.check_win() {
            if let Some(player) = self.player_with_mark(mark) {
                return Outcome::Win(player.clone());
            }
        }

        if self.board.check_tie() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.board.check_win().is_some() || self.board.check_tie()
    }

    pub fn start_game(
        &mut self,
        player_a: Player,
        player_b: Player,
        sink: &mut impl SignalSink,
    ) -> Result<()> {
        if player_a.mark() == player_b.mark() {
            return Err(GameError::DuplicateMark);
        }

        log::debug!(
            "new game: {} ({}) vs {} ({})",
            player_a.name(),
            player_a.mark(),
            player_b.name(),
            player_b.mark()
        );

        self.board.reset();
        self.players = Some([player_a, player_b]);
        self.current = Seat::First;

        sink.emit(Signal::ClearResult);
        sink.emit(Signal::Render);
        self.emit_turn(sink);
        Ok(())
    }

    /// Starts over with the players of the previous game.
    pub fn restart(&mut self, sink: &mut impl SignalSink) -> Result<()> {
        let [player_a, player_b] = self.players.clone().ok_or(GameError::NotStarted)?;
        self.start_game(player_a, player_b, sink)
    }

    pub fn handle_move_request(
        &mut self,
        index: CellIndex,
        sink: &mut impl SignalSink,
    ) -> MoveOutcome {
        match self.try_move(index, sink) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("move at {} ignored: {}", index, err);
                MoveOutcome::NoChange
            }
        }
    }

    fn try_move(&mut self, index: CellIndex, sink: &mut impl SignalSink) -> Result<MoveOutcome> {
        self.check_active()?;
        let mover = self.current_player().ok_or(GameError::NotStarted)?.clone();

        self.board.try_place_mark(index, mover.mark())?;
        log::debug!("{} placed {} at {:?}", mover.name(), mover.mark(), index.to_coords());
        sink.emit(Signal::Render);

        if self.board.check_win().is_some() {
            log::debug!("{} wins", mover.name());
            let name = mover.name().to_string();
            sink.emit(Signal::GameEnded(Outcome::Win(mover)));
            sink.emit(Signal::Celebrate(name));
            return Ok(MoveOutcome::Won);
        }

        if self.board.check_tie() {
            log::debug!("tie");
            sink.emit(Signal::GameEnded(Outcome::Tie));
            return Ok(MoveOutcome::Tie);
        }

        self.current = self.current.other();
        self.emit_turn(sink);
        Ok(MoveOutcome::Placed)
    }

    fn check_active(&self) -> Result<()> {
        if !self.is_started() {
            Err(GameError::NotStarted)
        } else if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn emit_turn(&self, sink: &mut impl SignalSink) {
        if let Some(player) = self.current_player() {
            log::trace!("turn: {}", player.name());
            sink.emit(Signal::TurnChanged(player.clone()));
        }
    }

    fn player_with_mark(&self, mark: Mark) -> Option<&Player> {
        self.players
            .as_ref()?
            .iter()
            .find(|player| player.mark() == mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn player_1() -> Player {
        Player::new("Player 1", Mark::X)
    }

    fn player_2() -> Player {
        Player::new("Player 2", Mark::O)
    }

    fn started() -> (Controller, Vec<Signal>) {
        let mut controller = Controller::new();
        let mut signals = Vec::new();
        controller
            .start_game(player_1(), player_2(), &mut signals)
            .unwrap();
        (controller, signals)
    }

    #[test]
    fn start_game_clears_renders_and_announces_first_player() {
        let (controller, signals) = started();

        assert_eq!(
            signals,
            vec![
                Signal::ClearResult,
                Signal::Render,
                Signal::TurnChanged(player_1())
            ]
        );
        assert_eq!(controller.current_player(), Some(&player_1()));
        assert_eq!(controller.outcome(), Outcome::InProgress);
        assert_eq!(controller.board().filled_count(), 0);
    }

    #[test]
    fn start_game_rejects_shared_mark() {
        let mut controller = Controller::new();
        let mut signals = Vec::new();

        let result = controller.start_game(
            player_1(),
            Player::new("Impostor", Mark::X),
            &mut signals,
        );

        assert_eq!(result, Err(GameError::DuplicateMark));
        assert!(signals.is_empty());
        assert!(!controller.is_started());
    }

    #[test]
    fn moves_before_start_are_ignored() {
        let mut controller = Controller::new();
        let mut signals = Vec::new();

        assert_eq!(
            controller.handle_move_request(0, &mut signals),
            MoveOutcome::NoChange
        );
        assert!(signals.is_empty());
        assert_eq!(controller.board().filled_count(), 0);
    }

    #[test]
    fn successful_move_passes_the_turn() {
        let (mut controller, mut signals) = started();
        signals.clear();

        assert_eq!(
            controller.handle_move_request(4, &mut signals),
            MoveOutcome::Placed
        );

        assert_eq!(
            signals,
            vec![Signal::Render, Signal::TurnChanged(player_2())]
        );
        assert_eq!(controller.board()[4], Cell::Marked(Mark::X));
        assert_eq!(controller.current_player(), Some(&player_2()));
    }

    #[test]
    fn seats_alternate() {
        assert_eq!(Seat::default(), Seat::First);
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().index(), 0);
    }

    #[test]
    fn occupied_or_invalid_cell_keeps_the_turn() {
        let (mut controller, mut signals) = started();
        assert!(controller.handle_move_request(4, &mut signals).has_update());
        signals.clear();

        assert!(!controller.handle_move_request(4, &mut signals).has_update());

        assert_eq!(
            controller.handle_move_request(4, &mut signals),
            MoveOutcome::NoChange
        );
        assert_eq!(
            controller.handle_move_request(9, &mut signals),
            MoveOutcome::NoChange
        );

        assert!(signals.is_empty());
        assert_eq!(controller.board()[4], Cell::Marked(Mark::X));
        assert_eq!(controller.current_player(), Some(&player_2()));
    }

    #[test]
    fn turns_alternate_after_each_non_terminal_move() {
        let (mut controller, mut signals) = started();

        for index in [0, 4, 8, 1, 7, 2] {
            let mover = controller.current_player().cloned().unwrap();
            assert_eq!(
                controller.handle_move_request(index, &mut signals),
                MoveOutcome::Placed
            );
            assert_ne!(controller.current_player(), Some(&mover));
        }
    }

    #[test]
    fn diagonal_win_ends_game_and_celebrates_once() {
        let (mut controller, mut signals) = started();

        for index in [0, 1, 4, 2] {
            assert_eq!(
                controller.handle_move_request(index, &mut signals),
                MoveOutcome::Placed
            );
        }
        signals.clear();

        assert_eq!(
            controller.handle_move_request(8, &mut signals),
            MoveOutcome::Won
        );
        assert_eq!(
            signals,
            vec![
                Signal::Render,
                Signal::GameEnded(Outcome::Win(player_1())),
                Signal::Celebrate("Player 1".into()),
            ]
        );
        assert_eq!(controller.outcome(), Outcome::Win(player_1()));
        assert_eq!(controller.current_player(), Some(&player_1()));

        signals.clear();
        for index in 0..9 {
            assert_eq!(
                controller.handle_move_request(index, &mut signals),
                MoveOutcome::NoChange
            );
        }
        assert!(signals.is_empty());
        assert_eq!(controller.board().filled_count(), 5);
    }

    #[test]
    fn full_board_without_line_ends_in_tie() {
        let (mut controller, mut signals) = started();

        // X O X / X O O / O X X, X fills the last cell
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(
                controller.handle_move_request(index, &mut signals),
                MoveOutcome::Placed
            );
        }
        signals.clear();

        assert_eq!(
            controller.handle_move_request(8, &mut signals),
            MoveOutcome::Tie
        );
        assert_eq!(
            signals,
            vec![Signal::Render, Signal::GameEnded(Outcome::Tie)]
        );
        assert_eq!(controller.outcome(), Outcome::Tie);
        assert!(controller.is_finished());
        assert_eq!(
            controller.handle_move_request(8, &mut signals),
            MoveOutcome::NoChange
        );
    }

    #[test]
    fn winning_last_move_reports_win_not_tie() {
        let (mut controller, mut signals) = started();

        // X O X / O X O / O X X, the ninth move completes 0-4-8
        for index in [0, 1, 2, 3, 4, 5, 7, 6] {
            assert_eq!(
                controller.handle_move_request(index, &mut signals),
                MoveOutcome::Placed
            );
        }
        signals.clear();

        assert_eq!(
            controller.handle_move_request(8, &mut signals),
            MoveOutcome::Won
        );
        assert!(controller.board().check_tie());
        assert_eq!(controller.outcome(), Outcome::Win(player_1()));
        assert!(!signals.contains(&Signal::GameEnded(Outcome::Tie)));
    }

    #[test]
    fn restart_keeps_players_and_clears_board() {
        let (mut controller, mut signals) = started();
        for index in [0, 3, 1, 4, 2] {
            controller.handle_move_request(index, &mut signals);
        }
        assert!(controller.is_finished());
        signals.clear();

        controller.restart(&mut signals).unwrap();

        assert_eq!(
            signals,
            vec![
                Signal::ClearResult,
                Signal::Render,
                Signal::TurnChanged(player_1())
            ]
        );
        assert_eq!(controller.outcome(), Outcome::InProgress);
        assert_eq!(controller.board().filled_count(), 0);
        assert_eq!(controller.players(), Some(&[player_1(), player_2()]));
    }

    #[test]
    fn restart_without_game_is_rejected() {
        let mut controller = Controller::new();
        let mut signals = Vec::new();

        assert_eq!(
            controller.restart(&mut signals),
            Err(GameError::NotStarted)
        );
        assert!(signals.is_empty());
    }
}
