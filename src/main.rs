//! Terminal weather panel: type a city, press Enter, read the conditions.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use wxtui::action::Action;
use wxtui::api;
use wxtui::components::{Component, WeatherDisplay, WeatherDisplayProps};
use wxtui::effect::Effect;
use wxtui::reducer::reducer;
use wxtui::state::{AppState, SPINNER_TICK_MS};
use wxtui::store::EffectStore;

#[derive(Parser, Debug)]
#[command(name = "wxtui")]
#[command(about = "Terminal weather panel backed by a local weather service")]
struct Args {
    /// Base endpoint of the weather service
    #[arg(long, default_value = api::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// City to look up immediately on startup
    #[arg(long, short)]
    city: Option<String>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: Args,
) -> io::Result<()> {
    let client = api::Client::new(args.endpoint);
    let mut store = EffectStore::new(AppState::new(), reducer);
    let mut display = WeatherDisplay::new();

    let (actions_tx, mut actions_rx) = mpsc::unbounded_channel();

    // A --city flag behaves like typing the name and pressing Enter
    if let Some(city) = args.city {
        dispatch_action(&mut store, Action::QueryChange(city.clone()), &client, &actions_tx);
        dispatch_action(&mut store, Action::QuerySubmit(city), &client, &actions_tx);
    }

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(SPINNER_TICK_MS));
    let mut needs_render = true;

    'main: loop {
        if needs_render {
            terminal.draw(|frame| {
                display.render(frame, frame.area(), WeatherDisplayProps {
                    state: store.state(),
                });
            })?;
            needs_render = false;
        }

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break 'main };
                match event? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        let actions = display.handle_event(&key, WeatherDisplayProps {
                            state: store.state(),
                        });
                        for action in actions {
                            if matches!(action, Action::Quit) {
                                break 'main;
                            }
                            needs_render |=
                                dispatch_action(&mut store, action, &client, &actions_tx);
                        }
                    }
                    Event::Resize(_, _) => needs_render = true,
                    _ => {}
                }
            }
            Some(action) = actions_rx.recv() => {
                needs_render |= dispatch_action(&mut store, action, &client, &actions_tx);
            }
            _ = ticker.tick() => {
                needs_render |= dispatch_action(&mut store, Action::Tick, &client, &actions_tx);
            }
        }
    }

    Ok(())
}

/// Run one action through the store and hand its effects to the edge
fn dispatch_action(
    store: &mut EffectStore<AppState, Action, Effect>,
    action: Action,
    client: &api::Client,
    actions: &UnboundedSender<Action>,
) -> bool {
    let result = store.dispatch(action);
    for effect in result.effects {
        handle_effect(effect, client, actions);
    }
    result.changed
}

/// Handle effects by spawning tasks that report back as actions
fn handle_effect(effect: Effect, client: &api::Client, actions: &UnboundedSender<Action>) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            let actions = actions.clone();
            tokio::spawn(async move {
                let action = match client.fetch_weather(&city).await {
                    Ok(report) => Action::WeatherDidLoad(report),
                    Err(error) => Action::WeatherDidError(error.to_string()),
                };
                let _ = actions.send(action);
            });
        }
    }
}
