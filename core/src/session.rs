use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which panel is visible. `AnswerShown` is only entered from `QuestionShown`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Board,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    pub const fn is_board(self) -> bool {
        matches!(self, Self::Board)
    }

    pub const fn shows_question(self) -> bool {
        matches!(self, Self::QuestionShown | Self::AnswerShown)
    }

    pub const fn shows_answer(self) -> bool {
        matches!(self, Self::AnswerShown)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionOrigin {
    Cell(CellId),
    Random,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentQuestion {
    pub record: QuestionRecord,
    pub origin: QuestionOrigin,
}

/// Yes/no prompt shown before an in-progress round is thrown away.
pub trait Confirmation {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirmation for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewGame {
    /// The prompt was declined, nothing changed.
    Declined,
    Started,
    /// The requested set is already being fetched.
    Pending,
    /// The caller has to fetch the set and pass the result to [`GameSession::finish_load`].
    Fetch(LoadTicket),
}

impl NewGame {
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// All mutable game state of one running instance.
#[derive(Clone, Debug)]
pub struct GameSession<R = SeededRandom> {
    config: GameConfig,
    repository: QuestionRepository,
    board: Option<Board>,
    reveal: RevealState,
    current: Option<CurrentQuestion>,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self::with_repository(config, QuestionRepository::new(), rng)
    }

    pub fn with_repository(config: GameConfig, repository: QuestionRepository, rng: R) -> Self {
        Self {
            config,
            repository,
            board: None,
            reveal: RevealState::Board,
            current: None,
            rng,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn round_categories(&self) -> &[String] {
        match &self.board {
            Some(board) => board.categories(),
            None => &[],
        }
    }

    pub fn current_question(&self) -> Option<&CurrentQuestion> {
        self.current.as_ref()
    }

    pub fn active_set(&self) -> Option<&QuestionSet> {
        self.repository.active()
    }

    pub fn is_loading(&self) -> bool {
        self.repository.is_pending()
    }

    pub fn has_round(&self) -> bool {
        self.board.is_some()
    }

    pub fn confirmation_message(id: QuestionSetId) -> String {
        let mut message = String::from("Are you sure you want to start a new game?");
        if let Some(name) = id.name() {
            message.push_str(&format!("\n\nQuestion set: {}", name));
        }
        message
    }

    /// Starts a new round on `id`, asking first when a round would be discarded. The current
    /// round is left alone until the new one can actually be built.
    pub fn new_game<C: Confirmation>(
        &mut self,
        id: QuestionSetId,
        mut confirm: C,
    ) -> Result<NewGame> {
        if self.has_round() && !confirm.confirm(&Self::confirmation_message(id)) {
            log::debug!("new game on {} declined", id);
            return Ok(NewGame::Declined);
        }

        match self.repository.request(id) {
            LoadRequest::AlreadyActive => {
                self.start_round()?;
                Ok(NewGame::Started)
            }
            LoadRequest::AlreadyPending => Ok(NewGame::Pending),
            LoadRequest::Fetch(ticket) => {
                log::debug!("fetching {}", ticket.path());
                Ok(NewGame::Fetch(ticket))
            }
        }
    }

    /// Hands a finished fetch back. A fresh round is started when the set is committed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: core::result::Result<Vec<QuestionRecord>, LoadError>,
    ) -> Result<LoadOutcome> {
        let outcome = self.repository.complete(ticket, result)?;
        if outcome.has_update() {
            self.start_round()?;
        }
        Ok(outcome)
    }

    /// Replaces the round only once the new board is built.
    fn start_round(&mut self) -> Result<()> {
        let set = self.repository.active().ok_or(GameError::NoQuestionSet)?;
        let categories = sample_categories(set.categories(), self.config.columns, &mut self.rng)?;
        log::debug!("round categories: {:?}", categories);
        let board = Board::build(set, categories, self.config.tiers());

        self.board = Some(board);
        self.current = None;
        self.reveal = RevealState::Board;
        Ok(())
    }

    pub fn select_cell(&mut self, id: CellId) -> Result<ActionOutcome> {
        self.check_not_loading()?;
        let board = self.board.as_ref().ok_or(GameError::NoRound)?;

        if !self.reveal.is_board() || !board.cell(id)?.is_enabled() {
            return Ok(ActionOutcome::NoChange);
        }

        let set = self.repository.active().ok_or(GameError::NoQuestionSet)?;
        let (category, value) = board.clue_of(id)?;
        let record = match select(set, category, &value, &mut self.rng) {
            Ok(record) => record.clone(),
            Err(err) => {
                log::error!("cell {} is open but has no question: {}", id, err);
                return Err(err);
            }
        };

        if let Some(board) = self.board.as_mut() {
            board.mark_played(id)?;
        }
        log::debug!("cell {}: {}", id, record.details());
        self.current = Some(CurrentQuestion {
            record,
            origin: QuestionOrigin::Cell(id),
        });
        self.reveal = RevealState::QuestionShown;
        Ok(ActionOutcome::Changed)
    }

    /// Shows any question of the active set without touching the board.
    pub fn request_random(&mut self) -> Result<ActionOutcome> {
        self.check_not_loading()?;
        let set = self.repository.active().ok_or(GameError::NoQuestionSet)?;
        let record = select_random(set, &mut self.rng)?.clone();

        log::debug!("random: {}", record.details());
        self.current = Some(CurrentQuestion {
            record,
            origin: QuestionOrigin::Random,
        });
        self.reveal = RevealState::QuestionShown;
        Ok(ActionOutcome::Changed)
    }

    pub fn reveal_answer(&mut self) -> Result<ActionOutcome> {
        self.check_not_loading()?;
        Ok(match self.reveal {
            RevealState::QuestionShown => {
                self.reveal = RevealState::AnswerShown;
                ActionOutcome::Changed
            }
            RevealState::Board | RevealState::AnswerShown => ActionOutcome::NoChange,
        })
    }

    pub fn go_back(&mut self) -> Result<ActionOutcome> {
        self.check_not_loading()?;
        Ok(match self.reveal {
            RevealState::Board => ActionOutcome::NoChange,
            RevealState::QuestionShown | RevealState::AnswerShown => {
                self.reveal = RevealState::Board;
                self.current = None;
                ActionOutcome::Changed
            }
        })
    }

    fn check_not_loading(&self) -> Result<()> {
        if self.repository.is_pending() {
            Err(GameError::LoadPending)
        } else {
            Ok(())
        }
    }
}

impl GameSession<SeededRandom> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SeededRandom::new(seed))
    }
}
