#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tokio::sync::mpsc;
use tokio::task;

use crate::domain::models::Action;
use crate::domain::models::Artwork;
use crate::domain::models::BanKind;
use crate::domain::models::Event;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::events::EventsService;
use crate::domain::services::ArtworkFetcher;
use crate::domain::services::FetcherOptions;
use crate::domain::services::Focus;
use crate::domain::services::GalleryState;
use crate::domain::services::Transition;
use crate::infrastructure::clients::CatalogClientManager;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct GalleryProps {
    pub website_url: String,
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

fn request_fetch(
    state: GalleryState,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<GalleryState> {
    let generation = state.generation;
    let state = state.reduce(Transition::FetchRequested);
    if state.generation != generation {
        tx.send(state.fetch_action())?;
    }

    return Ok(state);
}

/// Applies one event to the session. The flag is true when the app should exit.
pub fn handle_event(
    state: GalleryState,
    event: Event,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<(GalleryState, bool)> {
    let state = match event {
        Event::KeyboardCTRLC => {
            if !state.loading {
                return Ok((state, true));
            }
            tx.send(Action::FetchAbort)?;
            state.reduce(Transition::FetchCancelled)
        }
        Event::KeyboardChar('q') => {
            return Ok((state, true));
        }
        Event::KeyboardEnter | Event::KeyboardChar('n') | Event::KeyboardChar(' ') => {
            request_fetch(state, tx)?
        }
        Event::KeyboardChar('1') => state.reduce(Transition::BanAttribute(BanKind::Artist)),
        Event::KeyboardChar('2') => state.reduce(Transition::BanAttribute(BanKind::Origin)),
        Event::KeyboardChar('3') => state.reduce(Transition::BanAttribute(BanKind::Medium)),
        Event::KeyboardChar('d') | Event::KeyboardDelete => {
            state.reduce(Transition::UnbanSelected)
        }
        Event::KeyboardChar('c') => state.reduce(Transition::ClearBans),
        Event::KeyboardChar('?') => state.reduce(Transition::ToggleHelp),
        Event::KeyboardTab => state.reduce(Transition::FocusNext),
        Event::UIScrollUp | Event::KeyboardChar('k') => state.reduce(Transition::CursorUp),
        Event::UIScrollDown | Event::KeyboardChar('j') => state.reduce(Transition::CursorDown),
        Event::UITick => state.reduce(Transition::Tick),
        Event::ArtworkLoaded {
            generation,
            artwork,
        } => state.reduce(Transition::ArtworkLoaded {
            generation,
            artwork,
        }),
        Event::FetchFailed { generation, error } => {
            state.reduce(Transition::FetchFailed { generation, error })
        }
        Event::KeyboardChar(_) => state,
    };

    return Ok((state, false));
}

fn header<'a>() -> Paragraph<'a> {
    let lines = vec![
        Line::from("Art Gallery".bold()),
        Line::from("Discover random artwork from the Art Institute of Chicago"),
        Line::from(
            "Press 1, 2 or 3 to ban the artist, origin or medium of the artwork from future results"
                .italic()
                .dark_gray(),
        ),
    ];

    return Paragraph::new(lines).alignment(Alignment::Center);
}

fn refresh_control<'a>(state: &GalleryState) -> Paragraph<'a> {
    let label = if state.loading {
        Line::from("Loading...".dark_gray())
    } else {
        Line::from(vec!["[n] ".bold(), "Show Me Another!".into()])
    };

    return Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::bordered());
}

fn attribute_line<'a>(key: &'a str, label: &'a str, artwork: &'a Artwork, kind: BanKind) -> Line<'a> {
    let value = artwork.display_attribute(kind);
    let value_span = if artwork.attribute(kind).is_some() {
        value.underlined()
    } else {
        value.dark_gray()
    };

    return Line::from(vec![
        format!("[{key}] ").bold(),
        format!("{label}: ").cyan(),
        value_span,
    ]);
}

fn artwork_card<'a>(artwork: &'a Artwork, props: &GalleryProps) -> Paragraph<'a> {
    let lines = vec![
        Line::from(artwork.display_title().bold().yellow()),
        Line::from(""),
        attribute_line("1", "Artist", artwork, BanKind::Artist),
        attribute_line("2", "Origin", artwork, BanKind::Origin),
        attribute_line("3", "Medium", artwork, BanKind::Medium),
        Line::from(vec!["    Date: ".cyan(), artwork.display_date().into()]),
        Line::from(""),
        Line::from(vec!["Image: ".cyan(), artwork.image_url.as_str().into()]),
        Line::from(vec![
            "View at Art Institute of Chicago ↗ ".cyan(),
            artwork.permalink(&props.website_url).into(),
        ]),
    ];

    return Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(" Artwork "));
}

fn render_ban_list(frame: &mut Frame, area: Rect, state: &GalleryState) {
    let items = state
        .ban_list
        .iter()
        .map(|rule| {
            ListItem::new(Line::from(vec![
                format!("{}: ", rule.kind).cyan(),
                rule.value.clone().into(),
            ]))
        })
        .collect::<Vec<ListItem>>();

    let mut block = Block::bordered()
        .title(" Banned Items ")
        .title_bottom(" [d] remove  [c] Clear All Bans ");
    if state.focus == Focus::BanList {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default().with_selected(Some(state.ban_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_history(frame: &mut Frame, area: Rect, state: &GalleryState) {
    let items = state
        .history
        .iter()
        .enumerate()
        .map(|(idx, artwork)| {
            ListItem::new(vec![
                Line::from(vec![
                    format!("{}. ", idx + 1).dark_gray(),
                    artwork.display_title().to_string().bold(),
                    " by ".dark_gray(),
                    artwork.display_attribute(BanKind::Artist).to_string().into(),
                ]),
                Line::from(format!("   {}", artwork.image_url).dark_gray()),
            ])
        })
        .collect::<Vec<ListItem>>();

    let mut block = Block::bordered().title(" Previously Viewed Artworks ");
    let mut highlight = Style::default();
    if state.focus == Focus::History {
        block = block.border_style(Style::default().fg(Color::Yellow));
        highlight = highlight.add_modifier(Modifier::REVERSED);
    }

    let list = List::new(items).block(block).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(state.history_scroll));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn help_footer<'a>(state: &GalleryState) -> Paragraph<'a> {
    if !state.show_help {
        return Paragraph::new(Line::from("? help  q quit".dark_gray()));
    }

    let lines = vec![
        Line::from("n / Enter / Space - show another artwork (ignored while loading)"),
        Line::from("1 / 2 / 3 - ban the shown artist / origin / medium"),
        Line::from("Tab - switch between ban list and history, Up / Down to move"),
        Line::from("d / Delete - remove the selected ban, c - clear all bans"),
        Line::from("CTRL+C - cancel loading, otherwise quit. q - quit"),
    ];
    return Paragraph::new(lines).block(Block::bordered().title(" Help "));
}

pub fn render(frame: &mut Frame, state: &GalleryState, props: &GalleryProps) {
    let error_height = if state.error.is_some() { 3 } else { 0 };
    let footer_height = if state.show_help { 7 } else { 1 };
    let [header_area, control_area, error_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(error_height),
        Constraint::Min(8),
        Constraint::Length(footer_height),
    ])
    .areas(frame.area());

    frame.render_widget(header(), header_area);
    frame.render_widget(refresh_control(state), control_area);

    if let Some(error) = &state.error {
        let banner = Paragraph::new(Line::from(error.to_string().red().bold()))
            .block(Block::bordered().border_style(Style::default().fg(Color::Red)));
        frame.render_widget(banner, error_area);
    }

    let has_side_panels = !state.ban_list.is_empty() || !state.history.is_empty();
    let (card_area, side_area) = if has_side_panels {
        let [card, side] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main_area);
        (card, Some(side))
    } else {
        (main_area, None)
    };

    if state.loading && state.error.is_none() {
        let spinner = SPINNER[state.tick % SPINNER.len()];
        let loading = Paragraph::new(Line::from(format!(
            "{spinner} Finding interesting art for you..."
        )))
        .alignment(Alignment::Center)
        .block(Block::bordered());
        frame.render_widget(loading, card_area);
    } else if let (Some(artwork), false) = (&state.artwork, state.loading) {
        frame.render_widget(artwork_card(artwork, props), card_area);
    }

    if let Some(side_area) = side_area {
        match (state.ban_list.is_empty(), state.history.is_empty()) {
            (false, false) => {
                let [ban_area, history_area] =
                    Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                        .areas(side_area);
                render_ban_list(frame, ban_area, state);
                render_history(frame, history_area, state);
            }
            (false, true) => render_ban_list(frame, side_area, state),
            (true, false) => render_history(frame, side_area, state),
            (true, true) => {}
        }
    }

    frame.render_widget(help_footer(state), footer_area);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    props: GalleryProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    // First artwork on startup.
    let mut state = request_fetch(GalleryState::new(), &tx)?;

    loop {
        terminal.draw(|frame| render(frame, &state, &props))?;

        let event = events.next().await?;
        let (next_state, should_quit) = handle_event(state, event, &tx)?;
        state = next_state;
        if should_quit {
            break;
        }
    }

    tracing::info!(shown = state.history.len(), bans = state.ban_list.len(), "session ended");
    return Ok(());
}

/// Builds the catalog client and fetch worker from config, then runs the UI
/// until the user quits.
pub async fn start() -> Result<()> {
    let catalog = CatalogClientManager::get()?;
    let options = FetcherOptions::from_config()?;
    let props = GalleryProps {
        website_url: options.website_url.clone(),
    };
    let fetcher = ArtworkFetcher::new(catalog, options);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures
        .spawn(async move { ActionsService::start(fetcher, event_tx, &mut action_rx).await });

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = start_loop(&mut terminal, props, action_tx, event_rx) => res,
    );

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return result;
}
