use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Everything one running board needs, owned by the host application.
///
/// Every user action maps onto exactly one method here. The question popup is independent of the board: tiles can be
/// revealed whatever state the popup is in.
#[derive(Clone, Debug)]
pub struct GameSession {
    variant: BoardVariant,
    engine: PrizeEngine,
    trivia: Option<TriviaDesk>,
    rng: SmallRng,
}

impl GameSession {
    /// Deals the first deck and, for the quiz board, opens the popup on its first question.
    pub fn new(variant: BoardVariant, questions: QuestionBank, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let engine = PrizeEngine::new(Self::deal(variant, &mut rng));

        let trivia = match (variant.has_trivia(), questions.is_empty()) {
            (false, _) => None,
            (true, true) => {
                log::warn!("No eligible questions, question popup disabled");
                None
            }
            (true, false) => Some(TriviaDesk::new(questions)),
        };

        let mut session = Self {
            variant,
            engine,
            trivia,
            rng,
        };
        if let Err(err) = session.ask_question() {
            log::debug!("No question on start: {}", err);
        }
        session
    }

    fn deal(variant: BoardVariant, rng: &mut SmallRng) -> Deck {
        ShuffleDeckGenerator::new(rng.random()).generate(variant.base_prizes())
    }

    pub fn variant(&self) -> BoardVariant {
        self.variant
    }

    pub fn engine(&self) -> &PrizeEngine {
        &self.engine
    }

    pub fn trivia(&self) -> Option<&TriviaDesk> {
        self.trivia.as_ref()
    }

    pub fn popup(&self) -> PopupState {
        self.trivia
            .as_ref()
            .map_or(PopupState::Closed, TriviaDesk::popup)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.trivia.as_ref().and_then(TriviaDesk::current_question)
    }

    pub fn has_trivia(&self) -> bool {
        self.trivia.is_some()
    }

    pub fn reveal(&mut self, index: TileIndex) -> Result<RevealOutcome> {
        self.engine.reveal(index)
    }

    /// Deals a fresh deck and hides every tile. Questions already asked stay asked until their cycle runs out.
    pub fn reset(&mut self) {
        let deck = Self::deal(self.variant, &mut self.rng);
        self.engine.reset(deck);
        log::debug!("Session reset, new {} tile deck", self.engine.tile_count());
    }

    pub fn ask_question(&mut self) -> Result<PopupOutcome> {
        let Self { trivia, rng, .. } = self;
        trivia
            .as_mut()
            .ok_or(GameError::NoEligibleQuestions)?
            .ask(rng)
    }

    pub fn reveal_answer(&mut self) -> Result<PopupOutcome> {
        Ok(self.trivia_mut()?.reveal_answer())
    }

    pub fn ask_another(&mut self) -> Result<PopupOutcome> {
        let Self { trivia, rng, .. } = self;
        trivia
            .as_mut()
            .ok_or(GameError::NoEligibleQuestions)?
            .ask_another(rng)
    }

    /// Closes the popup so the player can go and open a square.
    pub fn open_square(&mut self) -> Result<PopupOutcome> {
        Ok(self.trivia_mut()?.dismiss())
    }

    fn trivia_mut(&mut self) -> Result<&mut TriviaDesk> {
        self.trivia.as_mut().ok_or(GameError::NoEligibleQuestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::tests::bank;
    use alloc::vec::Vec;

    #[test]
    fn classic_session_has_no_popup() {
        let mut session = GameSession::new(BoardVariant::Classic, bank(5), 1);

        assert!(!session.has_trivia());
        assert_eq!(session.popup(), PopupState::Closed);
        assert_eq!(
            session.ask_question(),
            Err(GameError::NoEligibleQuestions)
        );
        assert_eq!(session.engine().tile_count(), 20);
    }

    #[test]
    fn trivia_session_opens_with_question() {
        let session = GameSession::new(BoardVariant::Trivia, bank(5), 1);

        assert!(matches!(session.popup(), PopupState::Asking(_)));
        assert!(session.current_question().is_some());
        assert_eq!(session.engine().tile_count(), 12);
    }

    #[test]
    fn trivia_without_questions_degrades_to_plain_board() {
        let mut session = GameSession::new(BoardVariant::Trivia, QuestionBank::default(), 1);

        assert!(!session.has_trivia());
        assert_eq!(session.popup(), PopupState::Closed);
        assert_eq!(session.reveal(0).unwrap(), RevealOutcome::Revealed);
    }

    #[test]
    fn popup_does_not_gate_reveals() {
        let mut session = GameSession::new(BoardVariant::Trivia, bank(5), 2);
        assert!(session.popup().is_open());

        assert!(session.reveal(4).unwrap().has_update());
        assert!(session.engine().is_revealed(4));
        assert!(session.popup().is_open());

        assert_eq!(session.open_square().unwrap(), PopupOutcome::Changed);
        assert_eq!(session.popup(), PopupState::Closed);
    }

    #[test]
    fn popup_actions_walk_the_state_machine() {
        let mut session = GameSession::new(BoardVariant::Trivia, bank(5), 2);

        assert_eq!(session.reveal_answer().unwrap(), PopupOutcome::Changed);
        assert!(session.popup().answer_shown());
        assert_eq!(session.ask_another().unwrap(), PopupOutcome::Changed);
        assert!(!session.popup().answer_shown());
        assert_eq!(session.open_square().unwrap(), PopupOutcome::Changed);
        assert_eq!(session.ask_question().unwrap(), PopupOutcome::Changed);
        assert!(session.popup().is_open());
    }

    #[test]
    fn open_square_after_answer_closes_popup() {
        let mut session = GameSession::new(BoardVariant::Trivia, bank(5), 6);

        session.reveal_answer().unwrap();
        assert_eq!(session.open_square().unwrap(), PopupOutcome::Changed);
        assert_eq!(session.popup(), PopupState::Closed);
        assert!(session.current_question().is_none());
        assert_eq!(session.ask_another().unwrap(), PopupOutcome::NoChange);
    }

    #[test]
    fn reset_hides_tiles_zeroes_winnings_and_reshuffles() {
        let mut session = GameSession::new(BoardVariant::Classic, QuestionBank::default(), 99);
        let first: Vec<Prize> = session.engine().deck().as_slice().to_vec();
        for index in 0..5 {
            session.reveal(index).unwrap();
        }

        let mut reshuffled = false;
        for _ in 0..5 {
            session.reset();
            assert!(session.engine().revealed().iter().all(|&revealed| !revealed));
            assert_eq!(session.engine().winnings(), 0);
            assert_eq!(session.engine().deck().len(), first.len());
            reshuffled |= session.engine().deck().as_slice() != first.as_slice();
        }
        assert!(reshuffled);
    }

    #[test]
    fn reset_keeps_question_cycle() {
        let mut session = GameSession::new(BoardVariant::Trivia, bank(5), 4);
        let asked_before = session.trivia().unwrap().cycler().asked().clone();

        session.reset();

        assert_eq!(session.trivia().unwrap().cycler().asked(), &asked_before);
        assert!(session.popup().is_open());
    }

    #[test]
    fn invalid_tile_is_rejected() {
        let mut session = GameSession::new(BoardVariant::Trivia, bank(1), 4);
        assert_eq!(session.reveal(12), Err(GameError::InvalidIndex));
    }
}
