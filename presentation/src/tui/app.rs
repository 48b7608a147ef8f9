//! Page application — the event loop
//!
//! Architecture:
//! ```text
//! PageApp (select! loop)
//!   ├─ crossterm EventStream ── keys / mouse / resize
//!   └─ tick interval (33ms) ─── animation frames, deferred work, splash
//!
//! input ─> UiAction ─> PageCommand ─> PageController ─> PageEffect
//!                                         │                 │
//!                                  SelectionState      EffectRunner
//!                                         └──> ModalPresenter.sync()
//! ```
//!
//! Selection updates are synchronous with the triggering event; the tick
//! only drives cosmetics and the one-tick-deferred body scroll reset.

use super::event::{action_for_key, UiAction};
use super::modal::{ModalHit, ModalPresenter};
use super::preloader::{Preloader, SplashPhase};
use super::state::PageState;
use super::widgets::{
    card::CardWidget, experience::ExperienceWidget, hero::HeroWidget, nav_bar::NavBarWidget,
    status_bar::StatusBarWidget, MainLayout,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, EventStream, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_application::{
    ClipboardPort, EffectRunner, NavigatorPort, PageCommand, PageConfig, PageController,
    PageEffect, ScrollLock, SplashTiming, ViewportTelemetryPort,
};
use folio_domain::Catalog;
use futures::stream::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Main page application
pub struct PageApp {
    controller: PageController,
    effects: EffectRunner,
    modal: ModalPresenter,
    lock: ScrollLock,
    show_splash: bool,
    splash_timing: SplashTiming,
}

impl PageApp {
    pub fn new(
        catalog: Arc<Catalog>,
        config: PageConfig,
        clipboard: Arc<dyn ClipboardPort>,
        navigator: Arc<dyn NavigatorPort>,
        telemetry: Arc<dyn ViewportTelemetryPort>,
        show_splash: bool,
    ) -> Self {
        let lock = ScrollLock::new();
        let modal = ModalPresenter::new(config.layout, config.cell, telemetry, lock.clone());
        Self {
            controller: PageController::new(catalog),
            effects: EffectRunner::new(clipboard, navigator),
            modal,
            lock,
            show_splash,
            splash_timing: config.splash,
        }
    }

    /// Run the page until quit. Restores the terminal on every exit path.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let preloader = self
            .show_splash
            .then(|| Preloader::new(self.splash_timing, Instant::now()));
        let mut state = PageState::new(preloader);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(33));
        let mut painted = false;

        info!(services = self.controller.catalog().len(), "page ready");

        loop {
            let now = Instant::now();
            terminal.draw(|frame| self.render(frame, &mut state, now))?;

            // First full paint is the load-complete signal for the splash
            if !painted {
                painted = true;
                if let Some(p) = &mut state.preloader {
                    p.mark_loaded(Instant::now());
                }
            }

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, event, Instant::now());
                }

                _ = tick.tick() => {
                    let now = Instant::now();
                    // Deferred scroll reset and ghost cleanup run one tick
                    // after the event that queued them
                    self.modal.on_tick(now);
                    if let Some(p) = &mut state.preloader {
                        if p.tick(now) == SplashPhase::Done {
                            // Detach: the overlay never renders again
                            state.preloader = None;
                        }
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    // -- Rendering --

    fn render(&mut self, frame: &mut Frame, state: &mut PageState, now: Instant) {
        let area = frame.area();
        state.last_area = area;
        let chrome = self.lock.chrome();
        let layout = MainLayout::compute(area, chrome.scroll_enabled);

        frame.render_widget(NavBarWidget::new(self.controller.catalog().contact()), layout.nav);
        frame.render_widget(HeroWidget, layout.hero);
        frame.render_widget(ExperienceWidget, layout.experience);

        let services = self.controller.catalog().services();
        let max_scroll = MainLayout::max_page_scroll(layout.grid, services.len());
        state.page_scroll = state.page_scroll.min(max_scroll);

        let rects = MainLayout::card_rects(layout.grid, services.len(), state.page_scroll);
        for (i, (service, rect)) in services.iter().zip(&rects).enumerate() {
            if *rect != Rect::ZERO {
                frame.render_widget(CardWidget::new(service, i == state.focus), *rect);
            }
        }

        if let Some(bar) = layout.scrollbar {
            let mut bar_state = ScrollbarState::new(usize::from(max_scroll))
                .position(usize::from(state.page_scroll));
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                bar,
                &mut bar_state,
            );
        }

        frame.render_widget(StatusBarWidget::new(self.modal.is_open()), layout.status_bar);

        let contact = self.controller.catalog().contact().clone();
        self.modal.render(frame, area, &contact, now);

        if let Some(preloader) = &state.preloader {
            render_splash(frame, area, preloader.alpha(now));
        }
    }

    // -- Input --

    fn handle_terminal_event(
        &mut self,
        state: &mut PageState,
        event: crossterm::event::Event,
        now: Instant,
    ) {
        match event {
            crossterm::event::Event::Key(key) => {
                let action = action_for_key(key, self.modal.is_open());
                self.apply_action(state, action, now);
            }
            crossterm::event::Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.handle_click(state, mouse.column, mouse.row, now);
                }
                MouseEventKind::ScrollUp => self.apply_scroll(state, -3),
                MouseEventKind::ScrollDown => self.apply_scroll(state, 3),
                _ => {}
            },
            crossterm::event::Event::Resize(_, _) => {
                // Media-query + visual-viewport events: reclassify live
                self.modal.on_viewport_change();
            }
            _ => {}
        }
    }

    fn apply_action(&mut self, state: &mut PageState, action: UiAction, now: Instant) {
        let card_count = self.controller.catalog().len();
        match action {
            UiAction::None => {}
            UiAction::Quit => state.should_quit = true,

            UiAction::FocusNext => state.focus_next(card_count),
            UiAction::FocusPrev => state.focus_prev(card_count),

            UiAction::Activate => {
                if let Some(service) = self.controller.catalog().services().get(state.focus) {
                    let id = service.id.clone();
                    self.dispatch(PageCommand::Select(id), now);
                }
            }
            UiAction::CloseModal => self.dispatch(PageCommand::CloseModal, now),

            UiAction::BodyScrollUp => self.modal.scroll_body(-3),
            UiAction::BodyScrollDown => self.modal.scroll_body(3),

            UiAction::PageScrollUp | UiAction::PageScrollDown => {
                let delta = if action == UiAction::PageScrollUp { -3 } else { 3 };
                self.apply_scroll(state, delta);
            }

            UiAction::ContactTelegram => self.dispatch(PageCommand::ContactTelegram, now),
            UiAction::ContactEmail => self.dispatch(PageCommand::ContactEmail, now),
            UiAction::NavTelegram => self.dispatch(PageCommand::OpenTelegram, now),
            UiAction::NavEmail => self.dispatch(PageCommand::OpenEmail, now),
        }
    }

    /// Scroll input routes to the modal body when open; page scroll is
    /// swallowed while the lock is held.
    fn apply_scroll(&mut self, state: &mut PageState, delta: i32) {
        if self.modal.is_open() {
            self.modal.scroll_body(delta);
        } else if self.lock.chrome().scroll_enabled {
            if delta < 0 {
                state.scroll_page_up();
            } else {
                // Clamped against real content height at render
                state.scroll_page_down(u16::MAX);
            }
        }
    }

    fn handle_click(&mut self, state: &mut PageState, col: u16, row: u16, now: Instant) {
        if self.modal.is_open() {
            match self.modal.hit_test(col, row) {
                // Exactly the backdrop dismisses; the panel itself is inert
                Some(ModalHit::Backdrop) | Some(ModalHit::Close) => {
                    self.dispatch(PageCommand::CloseModal, now);
                }
                Some(ModalHit::Telegram) => self.dispatch(PageCommand::ContactTelegram, now),
                Some(ModalHit::Email) => self.dispatch(PageCommand::ContactEmail, now),
                Some(ModalHit::Panel) | None => {}
            }
            return;
        }

        let area = state.last_area;
        let layout = MainLayout::compute(area, self.lock.chrome().scroll_enabled);
        let position = Position::new(col, row);

        let (telegram, email) = NavBarWidget::button_rects(layout.nav);
        if telegram.contains(position) {
            self.dispatch(PageCommand::OpenTelegram, now);
            return;
        }
        if email.contains(position) {
            self.dispatch(PageCommand::OpenEmail, now);
            return;
        }

        let services = self.controller.catalog().services();
        let rects = MainLayout::card_rects(layout.grid, services.len(), state.page_scroll);
        for (i, rect) in rects.iter().enumerate() {
            if *rect != Rect::ZERO && rect.contains(position) {
                state.focus = i;
                let id = services[i].id.clone();
                self.dispatch(PageCommand::Select(id), now);
                return;
            }
        }
    }

    /// Route a command through the controller, run effects, reconcile the
    /// modal - all synchronously with the triggering event.
    fn dispatch(&mut self, command: PageCommand, now: Instant) {
        let effects = self.controller.handle(command);
        for effect in self.effects.run(effects) {
            if effect == PageEffect::ResetModalScroll {
                self.modal.request_body_reset();
            }
        }
        let selected = self.controller.selected_service().cloned();
        self.modal.sync(selected.as_ref(), now);
    }
}

/// Splash overlay: full cover while visible, fading logo afterwards
fn render_splash(frame: &mut Frame, area: Rect, alpha: f32) {
    if alpha >= 0.999 {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black)),
            area,
        );
    }

    let mut logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut sub_style = Style::default().fg(Color::DarkGray);
    if alpha < 0.6 {
        logo_style = logo_style.add_modifier(Modifier::DIM);
        sub_style = sub_style.add_modifier(Modifier::DIM);
    }

    let lines = vec![
        Line::from(Span::styled("folio", logo_style)).centered(),
        Line::from(Span::styled("loading services…", sub_style)).centered(),
    ];
    let y = area.y + area.height / 2;
    let rect = Rect::new(area.x, y.saturating_sub(1), area.width, 2.min(area.height));
    frame.render_widget(Paragraph::new(lines), rect);
}
