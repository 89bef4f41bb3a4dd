use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use pullreveal_core::{AppConfig, RevealEvent};
use pullreveal_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    pager::PageResult,
    widgets::{RevealViewWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pullreveal"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, config: &AppConfig) -> Result<()> {
    // Reveal events from the coordinator's listener
    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<RevealEvent>();

    // Finished page loads
    let (page_tx, mut page_rx) = mpsc::unbounded_channel::<PageResult>();

    let mut app = App::new(config, load_tx);
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    tracing::info!(
        top_extent = config.ui.top_extent,
        bottom_extent = config.ui.bottom_extent,
        "Demo started"
    );

    let mut needs_fast_update = false;
    let mut last_frame = Instant::now();

    loop {
        // Listeners only queue; requests are issued here, outside the coordinator
        while let Ok(event) = load_rx.try_recv() {
            app.on_reveal(event, &page_tx);
        }

        // Process completed page loads (non-blocking)
        while let Ok(result) = page_rx.try_recv() {
            app.apply_page(result);
        }

        let now = Instant::now();
        app.on_frame(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(frame.area());

            RevealViewWidget::render(frame, layout[0], &mut app);
            StatusBarWidget::render(frame, layout[1], &app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => handle_action(&mut app, handle_key_event(key)),
                AppEvent::Mouse(mouse) => handle_action(&mut app, handle_mouse_event(mouse)),
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => app.tick_spinner(),
            }
        }

        // Checked at the end so the next poll already runs at frame rate
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Demo finished");
    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::StartLoading(direction) => app.controller.start_loading(direction),
        Action::StopLoading { animate } => app.controller.stop_loading(animate),
        Action::ToggleGate(direction) => app.toggle_gate(direction),
        Action::ScrollRows(rows) => app.scroll_rows(rows),
        Action::PointerDown(row) => app.pointer_down(row),
        Action::PointerDrag(row) => app.pointer_drag(row),
        Action::PointerUp => app.pointer_up(),
        Action::Wheel(notches) => app.wheel(notches),
        Action::None => {}
    }
}
