//! The live game session.

use std::{collections::VecDeque, time::Duration};

use gridpad_core::{CellId, Difficulty, Digit};
use gridpad_generator::{GeneratedPuzzle, PuzzleGenerator};
use log::{debug, info};

use crate::{Cell, CellState, CellView, SessionError, SessionEvent, Submission};

/// How long the win banner stays up before it clears.
pub const WIN_BANNER_DURATION: Duration = Duration::from_secs(5);

/// The ceiling of the error counter.
///
/// Reaching it does not end the game; the counter is advisory and further
/// wrong entries stop incrementing it.
pub const MAX_ERRORS: u8 = 3;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No cell has been touched yet; the difficulty may still change.
    NotStarted,
    /// Play is underway. There is no losing phase: the error counter caps
    /// out without ending the game.
    InProgress,
    /// Every blank was filled correctly.
    Won,
}

/// One complete playthrough: a solved grid, a clue mask, and all mutable
/// play state.
///
/// The session owns its cells outright and is the only place they mutate.
/// It is single-threaded and synchronous: every operation completes before
/// returning, and the only time-based behavior (the win banner) advances
/// through caller-supplied [`tick`](Self::tick) calls.
///
/// # Examples
///
/// ```
/// use gridpad_core::{CellId, Difficulty};
/// use gridpad_generator::{PuzzleGenerator, PuzzleSeed};
/// use gridpad_session::PuzzleSession;
///
/// let puzzle = PuzzleGenerator::new()
///     .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_bytes([7; 32]));
/// let mut session = PuzzleSession::with_puzzle(puzzle);
///
/// let id = CellId::all()
///     .find(|&id| !session.cell(id).locked)
///     .expect("easy puzzles have blanks");
/// let answer = session.puzzle().solution.value(id.position());
///
/// let result = session.submit(id, answer).unwrap();
/// assert!(result.correct);
/// assert!(session.cell(id).locked);
/// ```
#[derive(Debug)]
pub struct PuzzleSession {
    generator: PuzzleGenerator,
    puzzle: GeneratedPuzzle,
    cells: [Cell; 81],
    errors: u8,
    remaining_blanks: usize,
    has_started: bool,
    selected: Option<CellId>,
    phase: SessionPhase,
    banner_remaining: Option<Duration>,
    events: VecDeque<SessionEvent>,
}

impl PuzzleSession {
    /// Starts a session on a freshly generated puzzle.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(difficulty);
        Self::build(generator, puzzle)
    }

    /// Starts a session on an already generated puzzle.
    ///
    /// This is the deterministic entry point: pair it with
    /// [`PuzzleGenerator::generate_with_seed`] to replay an exact board.
    #[must_use]
    pub fn with_puzzle(puzzle: GeneratedPuzzle) -> Self {
        Self::build(PuzzleGenerator::new(), puzzle)
    }

    fn build(generator: PuzzleGenerator, puzzle: GeneratedPuzzle) -> Self {
        let cells = Self::load_cells(&puzzle);
        let remaining_blanks = puzzle.blank_count();
        Self {
            generator,
            puzzle,
            cells,
            errors: 0,
            remaining_blanks,
            has_started: false,
            selected: None,
            phase: SessionPhase::NotStarted,
            banner_remaining: None,
            events: VecDeque::new(),
        }
    }

    fn load_cells(puzzle: &GeneratedPuzzle) -> [Cell; 81] {
        std::array::from_fn(|index| {
            let id = CellId::new(index as u8 + 1).expect("index in 0..81");
            let pos = id.position();
            Cell::new(puzzle.solution.value(pos), puzzle.mask.is_clue(pos))
        })
    }

    fn cell_at(&self, id: CellId) -> &Cell {
        &self.cells[usize::from(id.value() - 1)]
    }

    // First accepted interaction: the difficulty locks here.
    fn begin(&mut self) {
        if !self.has_started {
            self.has_started = true;
            self.phase = SessionPhase::InProgress;
            self.events.push_back(SessionEvent::Started);
        }
    }

    /// Discards all play state and starts over on a fresh puzzle.
    ///
    /// Unlike [`change_difficulty`](Self::change_difficulty) this is always
    /// allowed. Any pending win banner is dropped, so a stale clear can
    /// never touch the new game.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        let puzzle = self.generator.generate(difficulty);
        self.cells = Self::load_cells(&puzzle);
        self.remaining_blanks = puzzle.blank_count();
        self.puzzle = puzzle;
        self.errors = 0;
        self.has_started = false;
        self.selected = None;
        self.phase = SessionPhase::NotStarted;
        self.banner_remaining = None;
        self.events.clear();
        self.events.push_back(SessionEvent::NewGame { difficulty });
    }

    /// Switches to a fresh puzzle at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DifficultyLocked`] once play has started;
    /// the current puzzle is left untouched.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if self.has_started {
            debug!("rejected difficulty change to {difficulty}: game has begun");
            return Err(SessionError::DifficultyLocked);
        }
        self.new_game(difficulty);
        Ok(())
    }

    /// Marks a cell as the active input target.
    ///
    /// Selection is purely a focus concern and never changes correctness
    /// state, but the first selection starts the game and locks the
    /// difficulty.
    pub fn select_cell(&mut self, id: CellId) {
        self.begin();
        self.selected = Some(id);
    }

    /// Submits a digit for a cell.
    ///
    /// A wrong digit is shown flagged and the cell stays editable; the error
    /// counter rises until it caps at [`MAX_ERRORS`]. The right digit locks
    /// the cell, and filling the last blank wins the game and raises the win
    /// banner.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CellLocked`] if the cell is a clue or was
    /// already solved; the session is left unchanged.
    pub fn submit(&mut self, id: CellId, digit: Digit) -> Result<Submission, SessionError> {
        let cell = *self.cell_at(id);
        if cell.state.is_locked() {
            debug!("rejected submit of {digit} to locked cell {id}");
            return Err(SessionError::CellLocked);
        }
        self.begin();

        if digit != cell.solved {
            self.cells[usize::from(id.value() - 1)].state = CellState::Wrong(digit);
            if self.errors < MAX_ERRORS {
                self.errors += 1;
                self.events
                    .push_back(SessionEvent::ErrorFlagged { errors: self.errors });
            }
            return Ok(Submission {
                correct: false,
                game_won: false,
            });
        }

        self.cells[usize::from(id.value() - 1)].state = CellState::Solved;
        self.remaining_blanks -= 1;
        self.events.push_back(SessionEvent::CellSolved { id });

        let game_won = self.remaining_blanks == 0;
        if game_won {
            self.phase = SessionPhase::Won;
            self.banner_remaining = Some(WIN_BANNER_DURATION);
            self.events.push_back(SessionEvent::Won);
            info!("puzzle solved ({} errors)", self.errors);
        }
        Ok(Submission {
            correct: true,
            game_won,
        })
    }

    /// Advances the win banner by `elapsed`.
    ///
    /// The banner clears once [`WIN_BANNER_DURATION`] has accumulated. Calls
    /// while no banner is up are no-ops; gameplay never blocks on this.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(remaining) = self.banner_remaining {
            if elapsed >= remaining {
                self.banner_remaining = None;
                self.events.push_back(SessionEvent::BannerCleared);
            } else {
                self.banner_remaining = Some(remaining - elapsed);
            }
        }
    }

    /// Whether the win banner is currently up.
    #[must_use]
    pub const fn banner_visible(&self) -> bool {
        self.banner_remaining.is_some()
    }

    /// Returns the next pending state-change notification, if any.
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    /// Returns a snapshot of one cell.
    ///
    /// Pure query: calling it any number of times between mutations returns
    /// identical results.
    #[must_use]
    pub fn cell(&self, id: CellId) -> CellView {
        self.cell_at(id).view()
    }

    /// Returns the play state of one cell.
    #[must_use]
    pub fn cell_state(&self, id: CellId) -> CellState {
        self.cell_at(id).state
    }

    /// Returns the puzzle this session is playing.
    #[must_use]
    pub const fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the number of blanks still to be filled correctly.
    #[must_use]
    pub const fn remaining_blanks(&self) -> usize {
        self.remaining_blanks
    }

    /// Returns the error counter (0 to [`MAX_ERRORS`]).
    #[must_use]
    pub const fn error_count(&self) -> u8 {
        self.errors
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the active difficulty tier.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.puzzle.difficulty
    }

    /// Whether play has started (and the difficulty is locked).
    #[must_use]
    pub const fn has_started(&self) -> bool {
        self.has_started
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<CellId> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use gridpad_generator::PuzzleSeed;

    use super::*;

    fn seeded_session(difficulty: Difficulty, seed_byte: u8) -> PuzzleSession {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(difficulty, PuzzleSeed::from_bytes([seed_byte; 32]));
        PuzzleSession::with_puzzle(puzzle)
    }

    fn blank_ids(session: &PuzzleSession) -> Vec<CellId> {
        CellId::all()
            .filter(|&id| !session.cell(id).locked)
            .collect()
    }

    fn answer(session: &PuzzleSession, id: CellId) -> Digit {
        session.puzzle().solution.value(id.position())
    }

    fn wrong_answer(session: &PuzzleSession, id: CellId) -> Digit {
        let solved = answer(session, id);
        Digit::ALL
            .into_iter()
            .find(|&d| d != solved)
            .expect("eight digits differ from any solved value")
    }

    #[test]
    fn test_fresh_session_state() {
        let session = seeded_session(Difficulty::Easy, 1);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.error_count(), 0);
        assert_eq!(session.remaining_blanks(), session.puzzle().blank_count());
        assert!(!session.has_started());
        assert_eq!(session.selected(), None);
        assert!(!session.banner_visible());
    }

    #[test]
    fn test_clue_cells_match_mask() {
        let session = seeded_session(Difficulty::Moderate, 2);
        for id in CellId::all() {
            let pos = id.position();
            let view = session.cell(id);
            if session.puzzle().mask.is_clue(pos) {
                assert_eq!(view.display, Some(session.puzzle().solution.value(pos)));
                assert!(view.locked);
            } else {
                assert_eq!(view.display, None);
                assert!(!view.locked);
            }
        }
    }

    #[test]
    fn test_cell_query_is_idempotent() {
        let session = seeded_session(Difficulty::Easy, 3);
        for id in CellId::all() {
            assert_eq!(session.cell(id), session.cell(id));
        }
    }

    #[test]
    fn test_correct_submission_locks_cell() {
        let mut session = seeded_session(Difficulty::Easy, 4);
        let id = blank_ids(&session)[0];
        let digit = answer(&session, id);

        let result = session.submit(id, digit).unwrap();
        assert!(result.correct);
        assert!(!result.game_won);
        assert!(session.cell(id).locked);
        assert_eq!(session.cell(id).display, Some(digit));
        assert_eq!(
            session.remaining_blanks(),
            session.puzzle().blank_count() - 1
        );

        // Locked for good: resubmitting anything is rejected.
        assert_eq!(session.submit(id, digit), Err(SessionError::CellLocked));
    }

    #[test]
    fn test_wrong_submission_flags_and_stays_editable() {
        let mut session = seeded_session(Difficulty::Easy, 5);
        let id = blank_ids(&session)[0];
        let wrong = wrong_answer(&session, id);

        let result = session.submit(id, wrong).unwrap();
        assert!(!result.correct);
        let view = session.cell(id);
        assert_eq!(view.display, Some(wrong));
        assert!(view.flagged_incorrect);
        assert!(!view.locked);
        assert_eq!(session.error_count(), 1);

        // The player may correct the cell afterwards.
        let result = session.submit(id, answer(&session, id)).unwrap();
        assert!(result.correct);
        assert!(session.cell(id).locked);
        assert!(!session.cell(id).flagged_incorrect);
    }

    #[test]
    fn test_error_counter_caps_at_three_without_losing() {
        let mut session = seeded_session(Difficulty::Easy, 6);
        let ids = blank_ids(&session);
        let id = ids[0];

        for expected in 1..=3 {
            let wrong = wrong_answer(&session, id);
            session.submit(id, wrong).unwrap();
            assert_eq!(session.error_count(), expected);
        }
        assert_eq!(session.phase(), SessionPhase::InProgress);

        // A fourth wrong answer is still accepted but no longer counted.
        let result = session.submit(id, wrong_answer(&session, id)).unwrap();
        assert!(!result.correct);
        assert_eq!(session.error_count(), 3);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn test_submit_to_clue_rejected_without_state_change() {
        let mut session = seeded_session(Difficulty::Easy, 7);
        let clue = CellId::all()
            .find(|&id| session.cell_state(id) == CellState::Clue)
            .expect("easy puzzles have clues");
        let before = session.cell(clue);

        assert_eq!(
            session.submit(clue, Digit::D1),
            Err(SessionError::CellLocked)
        );
        assert_eq!(session.cell(clue), before);
        assert_eq!(session.error_count(), 0);
        // A rejected edit does not start the game.
        assert!(!session.has_started());
    }

    #[test]
    fn test_win_in_arbitrary_order() {
        let mut session = seeded_session(Difficulty::Easy, 8);
        let mut ids = blank_ids(&session);
        ids.reverse();

        let mut wins = 0;
        for (i, id) in ids.iter().copied().enumerate() {
            let result = session.submit(id, answer(&session, id)).unwrap();
            assert!(result.correct);
            if result.game_won {
                wins += 1;
                assert_eq!(i, ids.len() - 1, "win fires on the last blank only");
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(session.remaining_blanks(), 0);
        assert_eq!(session.phase(), SessionPhase::Won);
        assert!(session.banner_visible());
    }

    #[test]
    fn test_banner_clears_after_duration() {
        let mut session = seeded_session(Difficulty::Easy, 9);
        for id in blank_ids(&session) {
            session.submit(id, answer(&session, id)).unwrap();
        }
        assert!(session.banner_visible());

        session.tick(Duration::from_secs(3));
        assert!(session.banner_visible());
        session.tick(Duration::from_secs(2));
        assert!(!session.banner_visible());

        // Draining events finds the clear exactly once.
        let mut clears = 0;
        while let Some(event) = session.poll_event() {
            if event == SessionEvent::BannerCleared {
                clears += 1;
            }
        }
        assert_eq!(clears, 1);

        // Further ticks stay no-ops.
        session.tick(Duration::from_secs(60));
        assert_eq!(session.poll_event(), None);
    }

    #[test]
    fn test_new_game_cancels_pending_banner() {
        let mut session = seeded_session(Difficulty::Easy, 10);
        for id in blank_ids(&session) {
            session.submit(id, answer(&session, id)).unwrap();
        }
        assert!(session.banner_visible());

        session.new_game(Difficulty::Hard);
        assert!(!session.banner_visible());
        // The stale clear cannot fire into the fresh session.
        session.tick(Duration::from_secs(10));
        assert_eq!(
            session.poll_event(),
            Some(SessionEvent::NewGame {
                difficulty: Difficulty::Hard
            })
        );
        assert_eq!(session.poll_event(), None);
    }

    #[test]
    fn test_difficulty_locked_after_selection() {
        let mut session = seeded_session(Difficulty::Easy, 11);
        let seed_before = session.puzzle().seed;

        session.select_cell(CellId::new(1).unwrap());
        assert!(session.has_started());
        assert_eq!(session.phase(), SessionPhase::InProgress);

        let result = session.change_difficulty(Difficulty::Moderate);
        assert_eq!(result, Err(SessionError::DifficultyLocked));
        assert_eq!(session.puzzle().seed, seed_before);
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_change_before_start_regenerates() {
        let mut session = seeded_session(Difficulty::Easy, 12);
        let seed_before = session.puzzle().seed;

        session.change_difficulty(Difficulty::Expert).unwrap();
        assert_eq!(session.difficulty(), Difficulty::Expert);
        assert_ne!(session.puzzle().seed, seed_before);
        assert!(
            Difficulty::Expert
                .clue_range()
                .contains(&session.puzzle().clue_count())
        );
        assert!(!session.has_started());
    }

    #[test]
    fn test_new_game_after_win_resets_everything() {
        let mut session = seeded_session(Difficulty::Easy, 13);
        for id in blank_ids(&session) {
            session.submit(id, answer(&session, id)).unwrap();
        }
        assert_eq!(session.phase(), SessionPhase::Won);

        session.new_game(Difficulty::Hard);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(!session.has_started());
        assert_eq!(session.error_count(), 0);
        assert_eq!(session.selected(), None);
        assert!(
            Difficulty::Hard
                .clue_range()
                .contains(&session.puzzle().clue_count())
        );
        assert_eq!(session.remaining_blanks(), session.puzzle().blank_count());
    }

    #[test]
    fn test_event_sequence_for_a_short_game() {
        let mut session = seeded_session(Difficulty::Easy, 14);
        let ids = blank_ids(&session);
        let first = ids[0];

        session.select_cell(first);
        assert_eq!(session.poll_event(), Some(SessionEvent::Started));

        session.submit(first, wrong_answer(&session, first)).unwrap();
        assert_eq!(
            session.poll_event(),
            Some(SessionEvent::ErrorFlagged { errors: 1 })
        );

        session.submit(first, answer(&session, first)).unwrap();
        assert_eq!(
            session.poll_event(),
            Some(SessionEvent::CellSolved { id: first })
        );
        assert_eq!(session.poll_event(), None);
    }

    #[test]
    fn test_first_submit_starts_game_without_selection() {
        let mut session = seeded_session(Difficulty::Easy, 15);
        let id = blank_ids(&session)[0];
        session.submit(id, answer(&session, id)).unwrap();
        assert!(session.has_started());
        assert_eq!(session.change_difficulty(Difficulty::Hard), Err(SessionError::DifficultyLocked));
    }
}
