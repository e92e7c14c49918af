use riesgo_core as game;
use yew::prelude::*;

use crate::fetch;

/// Helper function to use JavaScript's Math.random
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// One full game: the pool fetched for it plus the live board.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pool: game::CategoryPool,
    board: game::ClueBoard,
    move_count: u32,
}

impl GameSession {
    /// Sample a fresh board out of `pool`; fails when the pool is too small.
    fn start(pool: game::CategoryPool, config: game::GameConfig, seed: u64) -> game::Result<Self> {
        use game::CategorySampler;

        let selection = game::RandomCategorySampler::new(seed).sample(&pool, config)?;
        let board = game::ClueBoard::new(selection);
        Ok(Self {
            pool,
            board,
            move_count: 0,
        })
    }

    /// Feed one click into the board. Ids that no longer resolve (stale
    /// clicks from a superseded board) are logged and dropped here.
    fn select_clue(&mut self, id: game::ClueId) -> bool {
        match self.board.select_clue(id) {
            Ok(outcome) => {
                if outcome.has_update() {
                    self.move_count += 1;
                }
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("ignoring clue selection: {}", err);
                false
            }
        }
    }

    fn pooled_categories(&self) -> usize {
        self.pool.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Failed(game::GameError),
    Playing(GameSession),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Restart,
    PoolReady(game::CategoryPool),
    ClueSelected(game::ClueId),
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum CellMode {
    Blank,
    Question,
    Answer,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    id: game::ClueId,
    mode: CellMode,
    text: String,
    callback: Callback<game::ClueId>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        id,
        mode,
        text,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match mode {
            CellMode::Blank => classes!(),
            CellMode::Question => classes!("question"),
            CellMode::Answer => classes!("answered"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("clue {} clicked", id);
        callback.emit(id);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Sampler seed for the first board; later boards reseed themselves.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct BoardView {
    config: game::GameConfig,
    phase: Phase,
    seed: u64,
}

impl BoardView {
    fn begin_loading(&mut self, ctx: &Context<Self>) {
        self.phase = Phase::Loading;

        let clues_per_category = self.config.clues_per_category;
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let pool = fetch::fetch_pool(clues_per_category).await;
            link.send_message(Msg::PoolReady(pool));
        });
    }

    fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Loading => "Loading...",
            Phase::Failed(_) | Phase::Playing(_) => "Restart!",
        }
    }

    fn phase_view(&self, ctx: &Context<Self>) -> Html {
        match &self.phase {
            Phase::Loading => html! {
                <div class="loading-spinner" aria-busy="true">{"Fetching categories…"}</div>
            },
            Phase::Failed(err) => html! {
                <p class="error">{format!("Could not start a game: {}", err)}</p>
            },
            Phase::Playing(session) => Self::board_view(ctx, session),
        }
    }

    fn board_view(ctx: &Context<Self>, session: &GameSession) -> Html {
        let board = &session.board;
        let callback = ctx.link().callback(Msg::ClueSelected);

        html! {
            <>
                <table id="jeopardy">
                    <thead>
                        <tr>
                            {
                                for board.categories().iter().map(|category| html! {
                                    <th>{category.title().to_uppercase()}</th>
                                })
                            }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for (0..board.clues_per_category()).map(|row| html! {
                                <tr>
                                    {
                                        for board.categories().iter().map(|category| {
                                            let id = category.clues()[usize::from(row)].id();
                                            let (mode, text) = match board.display(id) {
                                                Ok(game::ClueDisplay::Question(q)) => {
                                                    (CellMode::Question, q.to_string())
                                                }
                                                Ok(game::ClueDisplay::Answer(a)) => {
                                                    (CellMode::Answer, a.to_string())
                                                }
                                                Ok(game::ClueDisplay::Blank) | Err(_) => {
                                                    (CellMode::Blank, "?".to_string())
                                                }
                                            };
                                            let callback = callback.clone();
                                            html! {
                                                <CellView {id} {mode} {text} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
                <small>
                    {format!(
                        "{}/{} answered, sampled from {} categories",
                        board.answered_count(),
                        board.clue_count(),
                        session.pooled_categories(),
                    )}
                </small>
            </>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        ctx.link().send_message(Msg::Start);
        Self {
            config: game::GameConfig::DEFAULT,
            phase: Phase::Loading,
            seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.begin_loading(ctx);
                true
            }
            Restart => {
                self.seed = js_random_seed();
                self.begin_loading(ctx);
                true
            }
            PoolReady(pool) => {
                match GameSession::start(pool, self.config, self.seed) {
                    Ok(session) => self.phase = Phase::Playing(session),
                    Err(err) => {
                        log::error!("could not start a game: {}", err);
                        self.phase = Phase::Failed(err);
                    }
                }
                true
            }
            ClueSelected(id) => match &mut self.phase {
                Phase::Playing(session) => session.select_clue(id),
                _ => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onrestart = ctx.link().callback(|_: MouseEvent| Msg::Restart);
        let loading = matches!(self.phase, Phase::Loading);

        html! {
            <div class="riesgo">
                <h1>{"Riesgo!"}</h1>
                <button onclick={onrestart} disabled={loading}>{self.button_label()}</button>
                { self.phase_view(ctx) }
            </div>
        }
    }
}
