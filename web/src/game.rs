use crate::measure::DomMeasure;
use crate::settings::SettingsView;
use crate::theme::Theme;
use gloo::events::EventListener;
use noughts_core as game;
use game::LineOverlay;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Place(game::CellIndex),
    Restart,
    Resized,
    OverlayMeasured(Option<LineOverlay>),
    ToggleSettings,
    ApplyTheme(Option<Theme>),
}

/// Inline CSS placing the winning line inside the board.
pub(crate) fn overlay_style(overlay: &LineOverlay) -> String {
    let origin = overlay.origin();
    format!(
        "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px; transform: rotate({:.2}deg);",
        origin.x, origin.y, overlay.length, overlay.thickness, overlay.angle_deg,
    )
}

fn cell_class(cell: game::Cell) -> Classes {
    match cell.mark() {
        None => classes!(),
        Some(game::Mark::X) => classes!("x"),
        Some(game::Mark::O) => classes!("o"),
    }
}

fn state_class(state: game::EngineState) -> &'static str {
    use game::EngineState::*;
    match state {
        InProgress => "in-progress",
        Won(_) => "win",
        Drawn => "draw",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    locked: bool,
    #[prop_or_default]
    highlighted: bool,
    node_ref: NodeRef,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        locked,
        highlighted,
        node_ref,
        callback,
    } = props.clone();

    let mut class = classes!("cell", cell_class(cell));
    if locked {
        class.push("locked");
    }
    if highlighted {
        class.push("winning");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button ref={node_ref} {class} {onclick}>
            { cell.mark().map(game::Mark::symbol).unwrap_or_default() }
        </button>
    }
}

pub(crate) struct GameView {
    engine: game::PlayEngine,
    measure: DomMeasure,
    overlay: Option<LineOverlay>,
    settings_open: bool,
    theme: Option<Theme>,
    _resize_listener: EventListener,
}

impl GameView {
    fn create_resize_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::window(), "resize", move |_| {
            link.send_message(Msg::Resized)
        })
    }

    fn measure_overlay(&self) -> Option<LineOverlay> {
        self.engine
            .winning_line()
            .and_then(|line| game::overlay_for(line, &self.measure))
    }

    fn place(&mut self, index: game::CellIndex) -> bool {
        let outcome = self.engine.place_mark(index);
        if outcome.is_final() {
            log::info!("game over: {}", self.engine.status());
        }
        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::PlayEngine::new(),
            measure: DomMeasure::default(),
            overlay: None,
            settings_open: false,
            theme: Theme::current(),
            _resize_listener: GameView::create_resize_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Place(index) => {
                log::debug!("place mark: {}", index);
                self.place(index)
            }
            Restart => {
                log::debug!("restart");
                self.engine.reset();
                self.overlay = None;
                true
            }
            Resized => self.engine.winning_line().is_some(),
            OverlayMeasured(overlay) => {
                if self.overlay != overlay {
                    log::trace!("overlay: {:?}", overlay);
                    self.overlay = overlay;
                    true
                } else {
                    false
                }
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            ApplyTheme(theme) => {
                Theme::apply(theme);
                self.theme = theme;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let overlay = self.measure_overlay();
        if overlay != self.overlay {
            ctx.link().send_message(Msg::OverlayMeasured(overlay));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let status = self.engine.status();
        let status_class = classes!("status", status.is_winner().then_some("winner"));
        let game_state_class = state_class(self.engine.state());
        let winning_line = self.engine.winning_line();

        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);
        let cb_place = ctx.link().callback(Place);
        let cb_theme = ctx.link().callback(ApplyTheme);
        let cb_close = ctx.link().callback(|_: ()| ToggleSettings);

        html! {
            <div class={classes!("noughts", game_state_class)}>
                <small onclick={cb_settings}>{"···"}</small>
                <h1>{"Tic Tac Toe"}</h1>
                <div class={status_class}>{status.to_string()}</div>
                <div class="board" ref={self.measure.board.clone()}>
                    {
                        for self.overlay.iter().map(|overlay| html! {
                            <div class="winning-line" style={overlay_style(overlay)}/>
                        })
                    }
                    <div class="grid">
                        {
                            for game::CellIndex::ALL.into_iter().map(|index| html! {
                                <CellView
                                    {index}
                                    cell={self.engine.cell_at(index)}
                                    locked={!self.engine.can_place_at(index)}
                                    highlighted={winning_line.is_some_and(|line| line.contains(index))}
                                    node_ref={self.measure.cell_ref(index)}
                                    callback={cb_place.clone()}
                                />
                            })
                        }
                    </div>
                </div>
                <button class="restart" onclick={cb_restart}>{"Restart Game"}</button>
                <SettingsView
                    open={self.settings_open}
                    theme={self.theme}
                    on_theme={cb_theme}
                    on_close={cb_close}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{Point, Rect};

    #[test]
    fn overlay_style_positions_the_unrotated_segment() {
        let overlay = LineOverlay {
            center: Point::new(160.0, 50.0),
            length: 220.0,
            angle_deg: 0.0,
            thickness: 5.0,
        };

        assert_eq!(
            overlay_style(&overlay),
            "left: 50.00px; top: 47.50px; width: 220.00px; height: 5.00px; transform: rotate(0.00deg);"
        );
    }

    #[test]
    fn overlay_style_carries_rotation() {
        let board = Rect::new(0.0, 0.0, 330.0, 330.0);
        let overlay = LineOverlay::between(
            board,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(220.0, 220.0, 100.0, 100.0),
        );

        assert!(overlay_style(&overlay).ends_with("transform: rotate(45.00deg);"));
    }

    #[test]
    fn classes_follow_marks_and_state() {
        assert_eq!(cell_class(game::Cell::Empty), classes!());
        assert_eq!(cell_class(game::Cell::Marked(game::Mark::O)), classes!("o"));
        assert_eq!(state_class(game::EngineState::Drawn), "draw");
        assert_eq!(state_class(game::EngineState::Won(game::Mark::X)), "win");
    }
}
