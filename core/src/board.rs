use alloc::collections::BTreeMap;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of selecting a clue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl SelectOutcome {
    /// Whether this outcome changed the board.
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
        }
    }
}

/// What the render layer shows for one cell. `Answer` doubles as the signal
/// that the cell is done and should be highlighted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClueDisplay<'a> {
    Blank,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> ClueDisplay<'a> {
    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer(_))
    }

    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::Blank => None,
            Self::Question(text) => Some(text),
            Self::Answer(text) => Some(text),
        }
    }
}

/// The active board: a validated selection plus per-clue reveal progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueBoard {
    selection: BoardSelection,
    reveal_states: BTreeMap<ClueId, RevealState>,
    answered_count: Saturating<CellCount>,
}

impl ClueBoard {
    /// Start a fresh board; every clue begins `Hidden`. The clue index is
    /// rebuilt here, so reusing a selection always yields an untouched board.
    pub fn new(selection: BoardSelection) -> Self {
        let reveal_states = selection
            .categories()
            .iter()
            .flat_map(|category| category.clues())
            .map(|clue| (clue.id(), RevealState::default()))
            .collect();

        Self {
            selection,
            reveal_states,
            answered_count: Saturating(0),
        }
    }

    pub fn selection(&self) -> &BoardSelection {
        &self.selection
    }

    pub fn categories(&self) -> &[Category] {
        self.selection.categories()
    }

    pub fn clues_per_category(&self) -> ClueCount {
        self.selection.clues_per_category()
    }

    pub fn clue_count(&self) -> CellCount {
        self.selection.total_clues()
    }

    pub fn answered_count(&self) -> CellCount {
        self.answered_count.0
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count == Saturating(self.clue_count())
    }

    pub fn reveal_state(&self, id: ClueId) -> Result<RevealState> {
        self.reveal_states
            .get(&id)
            .copied()
            .ok_or(GameError::ClueNotFound(id))
    }

    /// Render contract for one cell: blank, the question text, or the answer
    /// text.
    pub fn display(&self, id: ClueId) -> Result<ClueDisplay<'_>> {
        let state = self.reveal_state(id)?;
        let clue = self
            .selection
            .find_clue(id)
            .ok_or(GameError::ClueNotFound(id))?;

        Ok(match state {
            RevealState::Hidden => ClueDisplay::Blank,
            RevealState::Question => ClueDisplay::Question(clue.question()),
            RevealState::Answer => ClueDisplay::Answer(clue.answer()),
        })
    }

    /// Advance a clue one reveal step. Selecting an already-answered clue is
    /// accepted and changes nothing; an id that is not on the board is an
    /// error and leaves the board untouched.
    pub fn select_clue(&mut self, id: ClueId) -> Result<SelectOutcome> {
        use RevealState::*;
        use SelectOutcome::*;

        let state = self
            .reveal_states
            .get_mut(&id)
            .ok_or(GameError::ClueNotFound(id))?;

        Ok(match *state {
            Hidden => {
                *state = Question;
                log::debug!("clue {} shows its question", id);
                QuestionShown
            }
            Question => {
                *state = Answer;
                self.answered_count += 1;
                log::debug!("clue {} shows its answer", id);
                AnswerShown
            }
            Answer => NoChange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn category(id: CategoryId, clue_ids: &[ClueId]) -> Category {
        let clues = clue_ids
            .iter()
            .map(|&clue_id| Clue::new(clue_id, format!("q{}", clue_id), format!("a{}", clue_id)))
            .collect();
        Category::new(id, format!("category {}", id), clues)
    }

    fn selection() -> BoardSelection {
        let categories = vec![category(1, &[11, 12]), category(2, &[21, 22])];
        BoardSelection::from_categories(categories, 2).unwrap()
    }

    #[test]
    fn selection_walks_hidden_question_answer() {
        let mut board = ClueBoard::new(selection());

        assert_eq!(board.display(11).unwrap(), ClueDisplay::Blank);

        assert_eq!(board.select_clue(11).unwrap(), SelectOutcome::QuestionShown);
        assert_eq!(board.display(11).unwrap(), ClueDisplay::Question("q11"));
        assert_eq!(board.reveal_state(11).unwrap(), RevealState::Question);

        assert_eq!(board.select_clue(11).unwrap(), SelectOutcome::AnswerShown);
        assert_eq!(board.display(11).unwrap(), ClueDisplay::Answer("a11"));
        assert!(board.display(11).unwrap().is_answered());
        assert_eq!(board.answered_count(), 1);
    }

    #[test]
    fn answered_clue_ignores_further_selections() {
        let mut board = ClueBoard::new(selection());

        board.select_clue(21).unwrap();
        board.select_clue(21).unwrap();
        assert!(board.reveal_state(21).unwrap().is_terminal());

        for _ in 0..3 {
            assert_eq!(board.select_clue(21).unwrap(), SelectOutcome::NoChange);
            assert_eq!(board.display(21).unwrap(), ClueDisplay::Answer("a21"));
        }
        assert_eq!(board.answered_count(), 1);
    }

    #[test]
    fn unknown_clue_is_an_error_and_leaves_the_board_untouched() {
        let mut board = ClueBoard::new(selection());
        board.select_clue(11).unwrap();
        let before = board.clone();

        assert_eq!(board.select_clue(999), Err(GameError::ClueNotFound(999)));
        assert_eq!(board, before);
    }

    #[test]
    fn new_board_resets_reveal_progress() {
        let mut board = ClueBoard::new(selection());
        board.select_clue(11).unwrap();
        board.select_clue(11).unwrap();
        board.select_clue(22).unwrap();

        let fresh = ClueBoard::new(board.selection().clone());

        assert_eq!(fresh.answered_count(), 0);
        for clue_id in [11, 12, 21, 22] {
            assert_eq!(fresh.reveal_state(clue_id).unwrap(), RevealState::Hidden);
        }
    }

    #[test]
    fn board_completes_once_every_clue_is_answered() {
        let mut board = ClueBoard::new(selection());

        for clue_id in [11, 12, 21, 22] {
            assert!(!board.is_complete());
            board.select_clue(clue_id).unwrap();
            board.select_clue(clue_id).unwrap();
        }

        assert!(board.is_complete());
        assert_eq!(board.answered_count(), board.clue_count());
    }

    #[test]
    fn reveal_states_only_move_forward() {
        let mut board = ClueBoard::new(selection());
        let expected = [
            RevealState::Question,
            RevealState::Answer,
            RevealState::Answer,
            RevealState::Answer,
        ];

        let mut seen = Vec::new();
        for _ in &expected {
            board.select_clue(12).unwrap();
            seen.push(board.reveal_state(12).unwrap());
        }

        assert_eq!(seen, expected);
    }

    #[test]
    fn selection_rejects_ragged_categories() {
        let categories = vec![category(1, &[11, 12]), category(2, &[21])];

        let result = BoardSelection::from_categories(categories, 2);
        assert_eq!(result, Err(GameError::ClueCountMismatch(2)));
    }

    #[test]
    fn selection_rejects_duplicate_category_ids() {
        let categories = vec![category(1, &[11, 12]), category(1, &[21, 22])];

        let result = BoardSelection::from_categories(categories, 2);
        assert_eq!(result, Err(GameError::DuplicateCategory(1)));
    }

    #[test]
    fn selection_rejects_clue_ids_shared_across_categories() {
        let categories = vec![category(1, &[11, 12]), category(2, &[12, 22])];

        let result = BoardSelection::from_categories(categories, 2);
        assert_eq!(result, Err(GameError::DuplicateClue(12)));
    }

    #[test]
    fn errors_render_their_clue_id() {
        assert_eq!(
            GameError::ClueNotFound(7).to_string(),
            "clue 7 is not on the active board"
        );
    }
}
