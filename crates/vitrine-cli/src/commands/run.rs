use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing::debug;

use vitrine_core::{AppConfig, Page};
use vitrine_tui::{
    app::{App, ElementKind, TOPBAR_HEIGHT},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{
        CarouselWidget, FooterWidget, HeroWidget, MenuWidget, SectionWidget, TopbarWidget,
    },
};

pub fn run(config: AppConfig) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.theme);
    let tick_rate_ms = config.ui.tick_rate_ms;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Vitrine")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and lay the page out for the current size
    let mut app = App::new(config, theme, Page::showcase());
    let size = terminal.size()?;
    debug!("Terminal initialized at {}x{}", size.width, size.height);
    app.resize(size.width, size.height);

    let event_handler = EventHandler::new(tick_rate_ms);

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

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

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        match event_handler.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                apply_action(app, action);
            }
            Some(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Some(AppEvent::Resize(w, h)) => app.resize(w, h),
            Some(AppEvent::Tick) => app.on_tick(),
            None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn apply_action(app: &mut App, action: Action) {
    // A pending 'g' survives exactly one keypress
    if action == Action::PendingG {
        app.pending_key = Some('g');
        return;
    }
    app.pending_key = None;

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_by(1),
        Action::ScrollUp => app.scroll_by(-1),
        Action::HalfPageDown => app.scroll_half_page(true),
        Action::HalfPageUp => app.scroll_half_page(false),
        Action::PageDown => app.scroll_full_page(true),
        Action::PageUp => app.scroll_full_page(false),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::NextSlide => app.carousel.next(),
        Action::PrevSlide => app.carousel.prev(),
        Action::ToggleMenu => app.menu.toggle(),
        Action::CloseMenu => app.menu.close(),
        Action::ActivateLink(i) => app.activate_link(i),
        Action::PendingG | Action::None => {}
    }
}

/// Paint every page element overlapping the viewport, then the fixed bar
/// and, above everything, the menu overlay
fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    for span in &app.layout.spans {
        let top = span.top as i32 - app.scroll as i32;
        let bottom = top + span.height as i32;
        if bottom <= 0 || top >= size.height as i32 {
            continue;
        }
        let clip_top = (-top).max(0) as u16;
        let y = top.max(0) as u16;
        let height = (bottom.min(size.height as i32) - top.max(0)) as u16;
        let area = Rect::new(0, y, size.width, height);

        match span.kind {
            ElementKind::Hero => HeroWidget::render(frame, area, clip_top, app),
            ElementKind::Section(i) => SectionWidget::render(frame, area, clip_top, app, i),
            ElementKind::Carousel => CarouselWidget::render(frame, area, clip_top, app),
            ElementKind::Footer => FooterWidget::render(frame, area, clip_top, app),
        }
    }

    if size.height > 0 {
        let bar = Rect::new(0, 0, size.width, TOPBAR_HEIGHT.min(size.height));
        TopbarWidget::render(frame, bar, app);
    }

    MenuWidget::render(frame, size, app);
}
