use crate::loader;
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use clueboard_core as game;
use game::{ActionOutcome, CellId, CellState, LoadOutcome, QuestionSetId, RevealState};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<ActionOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("action rejected: {}", err);
                false
            }
        }
    }
}

/// CSS classes of a board cell that is not a playable button.
fn cell_class(state: CellState) -> Classes {
    match state {
        CellState::Unavailable => classes!("cell", "empty"),
        CellState::Open => classes!("cell"),
        CellState::Played => classes!("cell", "played"),
    }
}

fn set_option_label(id: QuestionSetId) -> String {
    match id.name() {
        Some(name) => format!("{} ({})", name, id),
        None => "Default".to_string(),
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Msg {
    SelectCell(CellId),
    RevealAnswer,
    GoBack,
    RandomQuestion,
    SelectSet(QuestionSetId),
    NewGame,
    Loaded(
        game::LoadTicket,
        Result<Vec<game::QuestionRecord>, game::LoadError>,
    ),
    ToggleTheme,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    seed: Option<u64>,

    /// Question set selected on start, e.g. round-1-batch-3
    #[arg(long)]
    #[prop_or_default]
    set: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    selected_set: QuestionSetId,
    error: Option<String>,
}

impl GameView {
    fn start_new_game(&mut self, ctx: &Context<Self>) -> bool {
        let id = self.selected_set;
        let outcome = self
            .session
            .new_game(id, |message: &str| gloo::dialogs::confirm(message));

        match outcome {
            Ok(game::NewGame::Fetch(ticket)) => {
                self.error = None;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = loader::fetch_question_set(&ticket.path()).await;
                    link.send_message(Msg::Loaded(ticket, result));
                });
                true
            }
            Ok(game::NewGame::Started) => {
                self.error = None;
                true
            }
            Ok(game::NewGame::Declined | game::NewGame::Pending) => false,
            Err(err) => {
                log::error!("could not start a new game: {}", err);
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn finish_load(
        &mut self,
        ticket: game::LoadTicket,
        result: Result<Vec<game::QuestionRecord>, game::LoadError>,
    ) -> bool {
        match self.session.finish_load(ticket, result) {
            Ok(LoadOutcome::Loaded) => {
                self.error = None;
                true
            }
            Ok(LoadOutcome::Stale) => false,
            Err(err) => {
                log::error!("could not load question set: {}", err);
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view_nav(&self, ctx: &Context<Self>) -> Html {
        let selected = self.selected_set;
        let cb_select = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<QuestionSetId>() {
                Ok(id) => Some(Msg::SelectSet(id)),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            }
        });
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_random = ctx.link().callback(|_| Msg::RandomQuestion);
        let cb_theme = ctx.link().callback(|_| Msg::ToggleTheme);
        let has_round = self.session.has_round();

        html! {
            <nav>
                <button id="new-game" onclick={cb_new_game} disabled={self.session.is_loading()}>
                    {"New Game"}
                </button>
                if has_round {
                    <>
                        <button id="random" onclick={cb_random}>{"Random Question"}</button>
                        <select id="question-set" onchange={cb_select}>
                            {
                                for QuestionSetId::offered().map(|id| html! {
                                    <option value={id.to_string()} selected={id == selected}>
                                        {set_option_label(id)}
                                    </option>
                                })
                            }
                        </select>
                    </>
                }
                <small onclick={cb_theme}>{"◐"}</small>
            </nav>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.session.board() else {
            return Html::default();
        };
        let hidden = (!self.session.reveal_state().is_board()).then_some("hidden");

        html! {
            <table id="game-board-container" class={classes!(hidden)}>
                <thead>
                    <tr id="categories">
                        { for board.categories().iter().map(|category| html! { <th>{category.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody id="points">
                    {
                        for (0..board.rows()).map(|tier| html! {
                            <tr>
                                {
                                    for (0..board.columns()).map(|column| {
                                        let id = CellId::new(tier, column);
                                        let state = board.cell(id).unwrap_or_default();
                                        if state.is_enabled() {
                                            let label = board.tiers().label(tier).unwrap_or_default();
                                            let onclick = ctx.link().callback(move |_| Msg::SelectCell(id));
                                            html! {
                                                <td class={cell_class(state)}>
                                                    <button id={id.to_string()} {onclick}>{label}</button>
                                                </td>
                                            }
                                        } else {
                                            html! { <td class={cell_class(state)}/> }
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }

    fn view_question(&self, ctx: &Context<Self>) -> Html {
        let reveal = self.session.reveal_state();
        let Some(current) = self.session.current_question() else {
            return Html::default();
        };
        if !reveal.shows_question() {
            return Html::default();
        }

        let cb_reveal = ctx.link().callback(|_| Msg::RevealAnswer);
        let cb_back = ctx.link().callback(|_| Msg::GoBack);
        let record = &current.record;

        html! {
            <section id="questions-container">
                <p id="question-details">{record.details()}</p>
                <h2 id="question">{record.question.clone()}</h2>
                if reveal.shows_answer() {
                    <p id="answer">{record.answer.clone()}</p>
                } else {
                    <button id="show-answer" onclick={cb_reveal}>{"Show Answer"}</button>
                }
                <button id="back" onclick={cb_back}>{"Back"}</button>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        let selected_set = match props.set.as_deref().map(str::parse::<QuestionSetId>) {
            Some(Ok(id)) => id,
            Some(Err(err)) => {
                log::warn!("{}, using the default set", err);
                QuestionSetId::Default
            }
            None => QuestionSetId::Default,
        };
        log::debug!("seed: {}", seed);

        Self {
            session: game::GameSession::seeded(game::GameConfig::default(), seed),
            selected_set,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SelectCell(id) => {
                log::debug!("select cell: {}", id);
                self.session.select_cell(id).has_update()
            }
            RevealAnswer => self.session.reveal_answer().has_update(),
            GoBack => self.session.go_back().has_update(),
            RandomQuestion => self.session.request_random().has_update(),
            SelectSet(id) => {
                let changed = self.selected_set != id;
                self.selected_set = id;
                changed
            }
            NewGame => self.start_new_game(ctx),
            Loaded(ticket, result) => self.finish_load(ticket, result),
            ToggleTheme => {
                Theme::apply(Theme::next(Theme::current()));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state_class = match self.session.reveal_state() {
            RevealState::Board => "board",
            RevealState::QuestionShown => "question",
            RevealState::AnswerShown => "answer",
        };

        html! {
            <div class={classes!("clueboard", state_class)}>
                { self.view_nav(ctx) }
                if let Some(error) = &self.error {
                    <p class="error">{error.clone()}</p>
                }
                if self.session.is_loading() {
                    <p class="loading">{"Loading…"}</p>
                }
                { self.view_board(ctx) }
                { self.view_question(ctx) }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_actions_do_not_trigger_a_render() {
        let rejected: game::Result<ActionOutcome> = Err(game::GameError::LoadPending);
        assert!(!rejected.has_update());
        assert!(Ok::<_, game::GameError>(ActionOutcome::Changed).has_update());
        assert!(!Ok::<_, game::GameError>(ActionOutcome::NoChange).has_update());
    }

    #[test]
    fn set_options_show_batch_names() {
        assert_eq!(set_option_label(QuestionSetId::Default), "Default");
        assert_eq!(
            set_option_label(QuestionSetId::batch(1, 2)),
            "literate-form (round-1-batch-2)"
        );
    }

    #[test]
    fn played_and_missing_cells_are_styled_apart() {
        assert_ne!(cell_class(CellState::Played), cell_class(CellState::Unavailable));
    }
}
