use crate::celebration::{self, Banner};
use clap::Args;
use gloo::timers::callback::Timeout;
use noughts_core as game;
use yew::prelude::*;

fn turn_line(player: &game::Player) -> String {
    format!("{}'s turn", player.name())
}

fn result_line(outcome: &game::Outcome) -> String {
    match outcome {
        game::Outcome::Win(player) => format!("{} wins!", player.name()),
        game::Outcome::Tie => "It's a tie!".to_string(),
        game::Outcome::InProgress => String::new(),
    }
}

/// Text shown around the board, rebuilt from controller signals.
#[derive(Clone, Debug, Default, PartialEq)]
struct StatusLines {
    turn: String,
    result: String,
    banner: Option<String>,
}

impl StatusLines {
    /// Applies one signal, returning the winner's name if a celebration should start.
    fn apply(&mut self, signal: game::Signal, celebrations: bool) -> Option<String> {
        use game::Signal::*;

        log::trace!("signal: {:?}", signal);
        match signal {
            Render => None,
            TurnChanged(player) => {
                self.turn = turn_line(&player);
                None
            }
            ClearResult => {
                self.result.clear();
                self.banner = None;
                None
            }
            GameEnded(outcome) => {
                self.result = result_line(&outcome);
                None
            }
            Celebrate(winner) if celebrations => {
                self.banner = Some(winner.clone());
                Some(winner)
            }
            Celebrate(_) => None,
        }
    }
}

fn player_from(name: &str, mark: &str, fallback: game::Mark) -> game::Player {
    let mark = game::Mark::parse(mark).unwrap_or_else(|err| {
        log::warn!("invalid mark {:?} for {}: {}, using {}", mark, name, err, fallback);
        fallback
    });
    game::Player::new(name, mark)
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Name of the player who moves first
    #[arg(long, default_value = "Player 1")]
    pub player_a: String,

    /// Mark of the first player
    #[arg(long, default_value = "X")]
    pub mark_a: String,

    /// Name of the second player
    #[arg(long, default_value = "Player 2")]
    pub player_b: String,

    /// Mark of the second player
    #[arg(long, default_value = "O")]
    pub mark_b: String,

    /// Skip the banner, sound and confetti on a win
    #[arg(long)]
    pub no_celebration: bool,
}

impl GameProps {
    /// Configured players, falling back to `X` and `O` when the marks are unusable.
    fn players(&self) -> (game::Player, game::Player) {
        let player_a = player_from(&self.player_a, &self.mark_a, game::Mark::X);
        let player_b = player_from(&self.player_b, &self.mark_b, game::Mark::O);

        if player_a.mark() == player_b.mark() {
            log::warn!("both players use {}, using X and O", player_a.mark());
            return (
                game::Player::new(player_a.name(), game::Mark::X),
                game::Player::new(player_b.name(), game::Mark::O),
            );
        }

        (player_a, player_b)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    CellClick(game::CellIndex),
    Restart,
    DismissBanner,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    highlighted: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        highlighted,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell {
            game::Cell::Empty => classes!(),
            game::Cell::Marked(_) => classes!("taken"),
        }
    );
    if highlighted {
        class.push("win");
    }
    if locked {
        class.push("locked");
    }

    let text = cell.mark().map_or_else(|| " ".to_string(), |mark| mark.to_string());

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} data-index={index.to_string()} {onclick}>{text}</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::Controller,
    status: StatusLines,
    _banner_timeout: Option<Timeout>,
}

impl GameView {
    /// Runs one controller call and folds the signals it emitted into the view state.
    fn run<T>(
        &mut self,
        ctx: &Context<Self>,
        action: impl FnOnce(&mut game::Controller, &mut Vec<game::Signal>) -> T,
    ) -> T {
        let mut signals = Vec::new();
        let result = action(&mut self.controller, &mut signals);

        let celebrations = !ctx.props().no_celebration;
        for signal in signals {
            if let game::Signal::ClearResult = signal {
                self._banner_timeout = None;
            }
            if let Some(winner) = self.status.apply(signal, celebrations) {
                celebration::celebrate(&winner);
                self._banner_timeout = Some(Self::create_banner_timeout(ctx));
            }
        }
        result
    }

    fn create_banner_timeout(ctx: &Context<Self>) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(celebration::BANNER_MILLIS, move || {
            link.send_message(Msg::DismissBanner)
        })
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = self.controller.board();
        let winning_line = board.winning_line().map(|(triple, _)| triple);
        let locked = self.controller.is_finished();
        let callback = ctx.link().callback(Msg::CellClick);

        html! {
            <table id="gameboard" class={(!locked).then_some("playable")}>
                {
                    for (0..game::SIDE).map(|row| html! {
                        <tr>
                            {
                                for (0..game::SIDE).filter_map(|col| game::index_of((row, col))).map(|index| {
                                    let cell = board[index];
                                    let highlighted = winning_line.is_some_and(|line| line.contains(&index));
                                    let callback = callback.clone();
                                    html! {
                                        <CellView {index} {cell} {highlighted} locked={locked || !cell.is_empty()} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: game::Controller::new(),
            status: StatusLines::default(),
            _banner_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                let (player_a, player_b) = ctx.props().players();
                self.run(ctx, |controller, signals| {
                    controller
                        .start_game(player_a, player_b, signals)
                        .map_err(|err| log::error!("could not start game: {}", err))
                        .is_ok()
                })
            }
            CellClick(index) => {
                log::debug!("move request: {}", index);
                self.run(ctx, |controller, signals| {
                    controller.handle_move_request(index, signals).has_update()
                })
            }
            Restart => {
                log::debug!("restart");
                self.run(ctx, |controller, signals| {
                    controller
                        .restart(signals)
                        .map_err(|err| log::debug!("restart ignored: {}", err))
                        .is_ok()
                })
            }
            DismissBanner => {
                self._banner_timeout = None;
                self.status.banner.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        if !self.controller.is_started() {
            let cb_start = ctx.link().callback(|_: MouseEvent| Start);
            return html! {
                <div class="noughts">
                    <button id="startButton" onclick={cb_start}>{"Start"}</button>
                </div>
            };
        }

        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);

        html! {
            <div class="noughts">
                <p id="player-turn">{self.status.turn.clone()}</p>
                {self.view_board(ctx)}
                <p id="game-result">{self.status.result.clone()}</p>
                <button id="restart-btn" onclick={cb_restart}>{"Restart"}</button>
                if let Some(winner) = &self.status.banner {
                    <Banner winner={AttrValue::from(winner.clone())}/>
                }
            </div>
        }
    }
}
