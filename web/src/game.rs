use crate::settings;
use crate::utils::*;
use clap::Args;
use twenty_core as game;
use yew::prelude::*;

const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

const CURRENCY: &str = "تومان";

fn question_bank() -> game::QuestionBank {
    game::QuestionBank::from_json(QUESTIONS_JSON).unwrap_or_else(|err| {
        log::error!("Bundled questions unusable, quiz disabled: {}", err);
        game::QuestionBank::default()
    })
}

fn create_session(settings: &settings::Settings, seed: u64) -> game::GameSession {
    log::debug!("new {:?} session, seed: {}", settings.variant, seed);
    game::GameSession::new(settings.variant, question_bank(), seed)
}

const fn prize_class(kind: game::PrizeKind) -> &'static str {
    use game::PrizeKind::*;
    match kind {
        Money => "money",
        Penalty => "penalty",
        Skip => "skip",
        Blank => "blank",
        GameOver => "game-over",
    }
}

const fn prize_icon(kind: game::PrizeKind) -> &'static str {
    use game::PrizeKind::*;
    match kind {
        Money => "🎁",
        Penalty => "✖",
        Skip => "✨",
        Blank => "🚫",
        GameOver => "💀",
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::warn!("reveal rejected: {}", err);
                false
            },
            game::RevealOutcome::has_update,
        )
    }
}

impl<E: std::fmt::Display> HasUpdate for Result<game::PopupOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::warn!("popup action rejected: {}", err);
                false
            },
            game::PopupOutcome::has_update,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    RevealTile(game::TileIndex),
    NewGame,
    AskQuestion,
    RevealAnswer,
    AskAnother,
    OpenSquare,
    ToggleSettings,
    UpdateSettings(settings::Settings),
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: game::TileIndex,
    prize: game::Prize,
    revealed: bool,
    locale: game::NumberLocale,
    callback: Callback<game::TileIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        prize,
        revealed,
        locale,
        callback,
    } = props.clone();

    let number = game::format_count(index + 1, locale);
    let class = if revealed {
        classes!("tile", "open", prize_class(prize.kind()))
    } else {
        classes!("tile")
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>
            if revealed {
                <span class="icon">{prize_icon(prize.kind())}</span>
                <small>{number}</small>
                <strong>{prize.label()}</strong>
            } else {
                <span class="number">{number}</span>
            }
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct QuestionProps {
    question: game::Question,
    answer_shown: bool,
    on_reveal: Callback<MouseEvent>,
    on_another: Callback<MouseEvent>,
    on_open_square: Callback<MouseEvent>,
}

#[function_component(QuestionPopup)]
fn question_popup(props: &QuestionProps) -> Html {
    let question = &props.question;
    let choices = question.choices().iter().map(|choice| {
        let class = (props.answer_shown && *choice == question.answer).then_some("correct");
        html! { <li {class}>{choice.clone()}</li> }
    });

    html! {
        <Modal>
            <dialog id="question" open={true}>
                <article>
                    <header><small>{question.source.clone()}</small></header>
                    <h2>{question.question.clone()}</h2>
                    <ol>{ for choices }</ol>
                    if props.answer_shown {
                        <p class="answer">{question.answer.clone()}</p>
                    }
                    <footer>
                        if props.answer_shown {
                            <button onclick={props.on_another.clone()}>{"سوال بعدی"}</button>
                        } else {
                            <button onclick={props.on_reveal.clone()}>{"نمایش جواب"}</button>
                        }
                        <button class="secondary" onclick={props.on_open_square.clone()}>{"باز کردن خانه"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: settings::Settings,
    session: game::GameSession,
    settings_open: bool,
}

impl GameView {
    fn winnings_label(&self) -> String {
        game::format_amount(self.session.engine().winnings(), self.settings.locale)
    }

    fn pool_label(&self) -> String {
        game::format_amount(self.session.variant().prize_pool(), self.settings.locale)
    }

    fn board_state_class(&self) -> Classes {
        let engine = self.session.engine();
        classes!(match (engine.is_cleared(), engine.hit_game_over()) {
            (_, true) => "game-over",
            (true, false) => "cleared",
            (false, false) => "in-progress",
        })
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let engine = self.session.engine();
        let columns = self.session.variant().columns();
        let locale = self.settings.locale;
        let callback = ctx.link().callback(Msg::RevealTile);

        let prizes = engine.deck().as_slice();
        html! {
            <table class={self.board_state_class()}>
                {
                    for prizes.chunks(columns).enumerate().map(|(row, chunk)| html! {
                        <tr>
                            {
                                for chunk.iter().enumerate().map(|(column, &prize)| {
                                    let index = row * columns + column;
                                    let revealed = engine.is_revealed(index);
                                    let callback = callback.clone();
                                    html! {
                                        <TileView {index} {prize} {revealed} {locale} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_popup(&self, ctx: &Context<Self>) -> Html {
        let Some(question) = self.session.current_question() else {
            return html! {};
        };

        html! {
            <QuestionPopup
                question={question.clone()}
                answer_shown={self.session.popup().answer_shown()}
                on_reveal={ctx.link().callback(|_: MouseEvent| Msg::RevealAnswer)}
                on_another={ctx.link().callback(|_: MouseEvent| Msg::AskAnother)}
                on_open_square={ctx.link().callback(|_: MouseEvent| Msg::OpenSquare)}
            />
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: settings::Settings = LocalOrDefault::local_or_default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: create_session(&settings, seed),
            settings,
            settings_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            RevealTile(index) => {
                log::debug!("reveal tile: {}", index);
                self.session.reveal(index).has_update()
            }
            NewGame => {
                self.session.reset();
                true
            }
            AskQuestion => self.session.ask_question().has_update(),
            RevealAnswer => self.session.reveal_answer().has_update(),
            AskAnother => self.session.ask_another().has_update(),
            OpenSquare => self.session.open_square().has_update(),
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                if self.settings == settings {
                    return false;
                }
                settings.local_save();
                if self.settings.variant != settings.variant {
                    let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
                    self.session = create_session(&settings, seed);
                }
                self.settings = settings;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use settings::SettingsView;
        use Msg::*;

        let variant = self.session.variant();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_ask_question = ctx.link().callback(|_: MouseEvent| AskQuestion);
        let cb_toggle_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);
        let cb_update_settings = ctx.link().callback(UpdateSettings);
        let can_ask = self.session.has_trivia() && !self.session.popup().is_open();

        html! {
            <div class="twenty" dir="rtl">
                <small onclick={cb_toggle_settings.clone()}>{"···"}</small>
                <nav>
                    <h1>{variant.name()}</h1>
                    <aside>
                        <p>{"مجموع جوایز برنده شده"}</p>
                        <output>{self.winnings_label()}</output>
                        <p>{CURRENCY}</p>
                    </aside>
                    <span>
                        <button onclick={cb_new_game}>{"بازی جدید"}</button>
                        if can_ask {
                            <button onclick={cb_ask_question}>{"پرسیدن سوال"}</button>
                        }
                    </span>
                </nav>
                { self.view_board(ctx) }
                <footer>
                    {"مجموع کل جوایز: "}
                    <strong>{format!("{} {}", self.pool_label(), CURRENCY)}</strong>
                </footer>
                { self.view_popup(ctx) }
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_change={cb_update_settings}
                    on_close={cb_toggle_settings}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_questions_are_usable() {
        let bank = game::QuestionBank::from_json(QUESTIONS_JSON).unwrap();
        assert!(!bank.is_empty());
    }

    #[test]
    fn every_prize_kind_has_its_own_class() {
        use game::PrizeKind::*;
        let kinds = [Money, Penalty, Skip, Blank, GameOver];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(prize_class(*a), prize_class(*b));
            }
        }
    }

    #[test]
    fn popup_failures_do_not_rerender() {
        let rejected: Result<game::PopupOutcome, game::GameError> =
            Err(game::GameError::NoEligibleQuestions);
        assert!(!rejected.has_update());
        assert!(Ok::<_, game::GameError>(game::PopupOutcome::Changed).has_update());
    }

    #[test]
    fn settings_storage_key_is_namespaced() {
        assert_eq!(<settings::Settings as StorageKey>::KEY, "twenty:settings");
    }
}
