//! Responsive modal presenter
//!
//! The core of the page. Given the current selection it renders a layered
//! overlay: dim backdrop plus a content panel that is a centered popup on
//! desktop-class viewports and a bottom sheet on phone-class ones. While a
//! session is open it holds the scroll-lock guard, re-samples viewport
//! telemetry on every viewport event, and keeps the header pinned outside
//! the scrolling body region.
//!
//! Lifecycle:
//!
//! ```text
//! sync(Some(svc))  -> open: acquire lock, probe telemetry, fix geometry
//! sync(Some(other))-> swap service in place (scroll reset arrives deferred)
//! sync(None)       -> close: guard drops NOW; a cosmetic ghost fades out
//! drop(presenter)  -> session drops, guard drops, lock released
//! ```

use super::animation::{Motion, MotionCurve};
use folio_application::{
    CellMetrics, ScrollLock, ScrollLockGuard, ViewportSample, ViewportTelemetryPort,
};
use folio_domain::{
    ContactInfo, LayoutTuning, PanelAnchor, PanelGeometry, ServiceRecord, ViewportClass,
    HOW_WE_WORK, PRICE_NOTE,
};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Right-padding compensation for the page's vanished scrollbar
const SCROLLBAR_COMPENSATION: f32 = 14.0;

/// What a mouse press lands on while the modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    /// Exactly the backdrop - dismisses
    Backdrop,
    /// Inside the panel but not on a control - inert
    Panel,
    Close,
    Telegram,
    Email,
}

/// Control zones recorded at render time for hit-testing
#[derive(Debug, Default, Clone, Copy)]
struct HitZones {
    panel: Rect,
    close: Rect,
    telegram: Rect,
    email: Rect,
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    rect.contains(Position::new(col, row))
}

struct ModalSession {
    service: ServiceRecord,
    geometry: PanelGeometry,
    /// Capability variant chosen at mount; holds for the whole session
    visual_viewport: bool,
    body_scroll: u16,
    pending_reset: bool,
    motion: Motion,
    zones: HitZones,
    _guard: Option<ScrollLockGuard>,
}

/// Cosmetic fade-out after close; carries no locks or subscriptions
struct ClosingGhost {
    service: ServiceRecord,
    geometry: PanelGeometry,
    motion: Motion,
}

pub struct ModalPresenter {
    tuning: LayoutTuning,
    cell: CellMetrics,
    telemetry: Arc<dyn ViewportTelemetryPort>,
    lock: ScrollLock,
    session: Option<ModalSession>,
    closing: Option<ClosingGhost>,
}

fn curve_for(class: ViewportClass) -> MotionCurve {
    match class {
        ViewportClass::Phone => MotionCurve::sheet(),
        ViewportClass::Desktop => MotionCurve::popup(),
    }
}

impl ModalPresenter {
    pub fn new(
        tuning: LayoutTuning,
        cell: CellMetrics,
        telemetry: Arc<dyn ViewportTelemetryPort>,
        lock: ScrollLock,
    ) -> Self {
        Self {
            tuning,
            cell,
            telemetry,
            lock,
            session: None,
            closing: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Reconcile with the controller's selection after every command.
    ///
    /// Selection is the source of truth: the presenter mounts, swaps, or
    /// closes to match it, synchronously.
    pub fn sync(&mut self, selected: Option<&ServiceRecord>, now: Instant) {
        match (selected, &mut self.session) {
            (Some(service), Some(session)) => {
                if session.service.id != service.id {
                    // Geometry (and the fixed sheet height) is kept; the
                    // body scroll reset arrives as a deferred effect.
                    session.service = service.clone();
                }
            }
            (Some(service), None) => self.open(service.clone(), now),
            (None, Some(_)) => self.begin_close(now),
            (None, None) => {}
        }
    }

    fn open(&mut self, service: ServiceRecord, now: Instant) {
        self.closing = None;

        let guard = self.lock.acquire(SCROLLBAR_COMPENSATION);
        if guard.is_none() {
            warn!("scroll lock already held at modal open");
        }

        // Capability probe happens once, at mount
        let visual_viewport = self.telemetry.has_visual_viewport();
        let sample = self.effective_sample(visual_viewport);
        let geometry = PanelGeometry::compute(
            sample.window,
            sample.effective_visible_height(),
            &self.tuning,
        );

        self.session = Some(ModalSession {
            service,
            geometry,
            visual_viewport,
            body_scroll: 0,
            pending_reset: false,
            motion: Motion::opening(curve_for(geometry.class), now),
            zones: HitZones::default(),
            _guard: guard,
        });
    }

    fn begin_close(&mut self, now: Instant) {
        if let Some(session) = self.session.take() {
            // The guard drops with the session, right here - scroll and
            // padding are restored synchronously with the close, not after
            // the exit animation.
            let mut motion = session.motion;
            motion.redirect(0.0, now);
            self.closing = Some(ClosingGhost {
                service: session.service,
                geometry: session.geometry,
                motion,
            });
        }
    }

    fn effective_sample(&self, visual_viewport: bool) -> ViewportSample {
        let sample = self.telemetry.sample();
        if visual_viewport {
            sample
        } else {
            // Static fallback: behave as if the capability never existed
            ViewportSample {
                visible_height: None,
                ..sample
            }
        }
    }

    /// Viewport event while open: reclassify and recompute, live.
    ///
    /// Crossing the breakpoint mid-session swaps the whole chrome between
    /// popup and sheet without closing the modal.
    pub fn on_viewport_change(&mut self) {
        let Some(visual_viewport) = self.session.as_ref().map(|s| s.visual_viewport) else {
            return;
        };
        let sample = self.effective_sample(visual_viewport);
        let Some(session) = &mut self.session else {
            return;
        };
        session.geometry = PanelGeometry::compute(
            sample.window,
            sample.effective_visible_height(),
            &self.tuning,
        );
    }

    /// Queue the body scroll reset; applied on the next scheduling tick
    pub fn request_body_reset(&mut self) {
        if let Some(session) = &mut self.session {
            session.pending_reset = true;
        }
    }

    /// Deferred work: pending scroll reset, settled ghost cleanup
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(session) = &mut self.session {
            if session.pending_reset {
                session.body_scroll = 0;
                session.pending_reset = false;
            }
        }
        if let Some(ghost) = &self.closing {
            if ghost.motion.is_settled(now) {
                self.closing = None;
            }
        }
    }

    pub fn scroll_body(&mut self, delta: i32) {
        if let Some(session) = &mut self.session {
            let next = i64::from(session.body_scroll) + i64::from(delta);
            // Upper clamp happens at render, where the content height is known
            session.body_scroll = next.max(0).min(u16::MAX as i64) as u16;
        }
    }

    pub fn body_scroll(&self) -> u16 {
        self.session.as_ref().map_or(0, |s| s.body_scroll)
    }

    pub fn geometry(&self) -> Option<PanelGeometry> {
        self.session.as_ref().map(|s| s.geometry)
    }

    /// Resolve a mouse press while a session is open
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ModalHit> {
        let session = self.session.as_ref()?;
        let z = &session.zones;
        Some(if contains(z.close, col, row) {
            ModalHit::Close
        } else if contains(z.telegram, col, row) {
            ModalHit::Telegram
        } else if contains(z.email, col, row) {
            ModalHit::Email
        } else if contains(z.panel, col, row) {
            ModalHit::Panel
        } else {
            ModalHit::Backdrop
        })
    }

    // -- Rendering --

    pub fn render(&mut self, frame: &mut Frame, area: Rect, contact: &ContactInfo, now: Instant) {
        if let Some(ghost) = &self.closing {
            let value = ghost.motion.value(now);
            if value > 0.01 {
                let rect = Self::panel_rect(&self.cell, ghost.geometry, area, value);
                Self::render_backdrop(frame, area);
                Self::render_panel_frame(frame, rect, &ghost.service, true);
            }
            return;
        }

        let Some(session) = &mut self.session else {
            return;
        };

        let value = session.motion.value(now);
        let rect = Self::panel_rect(&self.cell, session.geometry, area, value);
        Self::render_backdrop(frame, area);
        let body = Self::render_panel_frame(frame, rect, &session.service, value < 0.5);

        session.zones = HitZones {
            panel: rect,
            close: Self::close_rect(rect),
            ..HitZones::default()
        };

        if body.height == 0 {
            return;
        }

        // Body content with the header pinned above it; only this region
        // scrolls, on both layouts.
        let (lines, telegram_line, email_line) = detail_lines(&session.service, contact);
        let max_scroll = (lines.len() as u16).saturating_sub(body.height);
        session.body_scroll = session.body_scroll.min(max_scroll);

        let visible_line = |index: usize| -> Rect {
            let index = index as u16;
            if index >= session.body_scroll && index < session.body_scroll + body.height {
                Rect::new(body.x, body.y + index - session.body_scroll, body.width, 1)
            } else {
                Rect::ZERO
            }
        };
        session.zones.telegram = visible_line(telegram_line);
        session.zones.email = visible_line(email_line);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((session.body_scroll, 0));
        frame.render_widget(paragraph, body);
    }

    /// Panel placement for the current animation value.
    ///
    /// Phone sheets slide up from the bottom edge; desktop popups scale
    /// around the center with the spring value.
    fn panel_rect(cell: &CellMetrics, geometry: PanelGeometry, area: Rect, value: f32) -> Rect {
        match geometry.anchor {
            PanelAnchor::Bottom => {
                let rows = cell.rows_from_height(geometry.height).min(area.height);
                let slide = ((1.0 - value.clamp(0.0, 1.0)) * f32::from(rows)) as u16;
                let visible = rows.saturating_sub(slide).max(1);
                Rect::new(
                    area.x,
                    area.y + area.height - visible,
                    area.width,
                    visible,
                )
            }
            PanelAnchor::Center => {
                let cols = ((geometry.width / cell.width_px) as u16).min(area.width);
                let cap = cell
                    .rows_from_height(geometry.height)
                    .min(area.height.saturating_sub(2));
                let rows = ((f32::from(cap) * value.clamp(0.2, 1.2)) as u16)
                    .max(3)
                    .min(area.height);
                let x = area.x + (area.width.saturating_sub(cols)) / 2;
                let y = area.y + (area.height.saturating_sub(rows)) / 2;
                Rect::new(x, y, cols, rows)
            }
        }
    }

    fn render_backdrop(frame: &mut Frame, area: Rect) {
        let dim = Block::default().style(
            Style::default()
                .bg(Color::Black)
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        );
        frame.render_widget(dim, area);
    }

    /// Panel chrome: border, pinned header, close control.
    ///
    /// Returns the body region below the header.
    fn render_panel_frame(
        frame: &mut Frame,
        rect: Rect,
        service: &ServiceRecord,
        faded: bool,
    ) -> Rect {
        frame.render_widget(Clear, rect);

        let mut style = Style::default().fg(Color::White).bg(Color::Reset);
        if faded {
            style = style.add_modifier(Modifier::DIM);
        }
        let block = Block::default().borders(Borders::ALL).style(style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if inner.height < 3 {
            return Rect::ZERO;
        }

        // Header: icon + title on the first row, short description under it,
        // a separator below. Drawn outside the scroll region.
        let title_line = Line::from(vec![
            Span::styled(
                format!(" {} ", service.icon.glyph()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                service.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let close_label = "[x Close]";
        let header = Paragraph::new(vec![
            title_line,
            Line::from(Span::styled(
                format!("   {}", service.short),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "─".repeat(inner.width as usize),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, Rect::new(inner.x, inner.y, inner.width, 3));

        if inner.width > close_label.len() as u16 + 2 {
            let close_x = inner.x + inner.width - close_label.len() as u16;
            let close = Paragraph::new(Span::styled(
                close_label,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(close, Rect::new(close_x, inner.y, close_label.len() as u16, 1));
        }

        Rect::new(
            inner.x,
            inner.y + 3,
            inner.width,
            inner.height.saturating_sub(3),
        )
    }

    fn close_rect(rect: Rect) -> Rect {
        let label_width: u16 = 9; // "[x Close]"
        if rect.width <= label_width + 2 || rect.height < 2 {
            return Rect::ZERO;
        }
        Rect::new(rect.x + rect.width - 1 - label_width, rect.y + 1, label_width, 1)
    }
}

/// Body lines for a service detail view.
///
/// Returns the lines plus the indices of the telegram and email action
/// lines, so the renderer can map them to hit zones.
fn detail_lines<'a>(
    service: &'a ServiceRecord,
    contact: &'a ContactInfo,
) -> (Vec<Line<'a>>, usize, usize) {
    let section = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let badge = Style::default().fg(Color::Yellow);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(format!("Price: {}", service.price), badge),
        Span::raw("   "),
        Span::styled(service.delivery.as_str(), badge),
        Span::raw("   "),
        Span::styled(service.support.as_str(), badge),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("What's included", section)));
    for item in &service.includes {
        lines.push(Line::from(format!("  • {}", item)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Good for", section)));
    for item in &service.good_for {
        lines.push(Line::from(format!("  • {}", item)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Contacts", section)));
    lines.push(Line::from(Span::styled(
        "The buttons below copy the contact and open the link.",
        muted,
    )));
    let telegram_line = lines.len();
    lines.push(Line::from(vec![
        Span::styled("  [t] Telegram: ", Style::default().fg(Color::Green)),
        Span::styled(
            contact.telegram.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let email_line = lines.len();
    lines.push(Line::from(vec![
        Span::styled("  [e] Email: ", Style::default().fg(Color::Green)),
        Span::styled(
            contact.email.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Technologies", section)));
    for item in &service.stack {
        lines.push(Line::from(format!("  • {}", item)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("How we work", section)));
    for (i, step) in HOW_WE_WORK.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {}", i + 1, step)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(PRICE_NOTE, muted)));

    (lines, telegram_line, email_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{ServiceIcon, ServiceId, ViewportSize};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Mutex;
    use std::time::Duration;

    struct FakeTelemetry {
        sample: Mutex<ViewportSample>,
        visual: bool,
    }

    impl FakeTelemetry {
        fn new(width: f32, height: f32, visible: Option<f32>) -> Arc<Self> {
            Arc::new(Self {
                sample: Mutex::new(ViewportSample {
                    window: ViewportSize::new(width, height),
                    visible_height: visible,
                }),
                visual: visible.is_some(),
            })
        }

        fn set(&self, width: f32, height: f32, visible: Option<f32>) {
            *self.sample.lock().unwrap() = ViewportSample {
                window: ViewportSize::new(width, height),
                visible_height: visible,
            };
        }
    }

    impl ViewportTelemetryPort for FakeTelemetry {
        fn has_visual_viewport(&self) -> bool {
            self.visual
        }

        fn sample(&self) -> ViewportSample {
            *self.sample.lock().unwrap()
        }
    }

    fn service(id: &str) -> ServiceRecord {
        ServiceRecord {
            id: ServiceId::from(id),
            icon: ServiceIcon::Bot,
            title: format!("Service {}", id),
            short: "short".into(),
            price: "from $100".into(),
            delivery: "2-4 days".into(),
            support: "14 days".into(),
            highlights: vec![],
            includes: vec!["item one".into(), "item two".into()],
            good_for: vec!["case".into()],
            stack: vec!["Rust".into()],
        }
    }

    fn presenter(telemetry: Arc<FakeTelemetry>, lock: ScrollLock) -> ModalPresenter {
        ModalPresenter::new(
            LayoutTuning::default(),
            CellMetrics::default(),
            telemetry,
            lock,
        )
    }

    #[test]
    fn test_open_acquires_lock_close_releases() {
        let lock = ScrollLock::new();
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let mut modal = presenter(telemetry, lock.clone());
        let now = Instant::now();

        let svc = service("a");
        modal.sync(Some(&svc), now);
        assert!(modal.is_open());
        assert!(lock.is_locked());
        assert!(!lock.chrome().scroll_enabled);

        // Close releases synchronously, even though the ghost still animates
        modal.sync(None, now + Duration::from_millis(50));
        assert!(!modal.is_open());
        assert!(!lock.is_locked());
        assert!(lock.chrome().scroll_enabled);
        assert!((lock.chrome().pad_right - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_teardown_releases_lock() {
        let lock = ScrollLock::new();
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let mut modal = presenter(telemetry, lock.clone());

        modal.sync(Some(&service("a")), Instant::now());
        assert!(lock.is_locked());

        // Abrupt unmount: dropping the presenter must release the lock
        drop(modal);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_breakpoint_crossing_updates_class_live() {
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let mut modal = presenter(telemetry.clone(), ScrollLock::new());
        modal.sync(Some(&service("a")), Instant::now());

        assert_eq!(modal.geometry().unwrap().class, ViewportClass::Desktop);

        // Rotate: width drops under the breakpoint while the modal is open
        telemetry.set(390.0, 800.0, None);
        modal.on_viewport_change();
        assert_eq!(modal.geometry().unwrap().class, ViewportClass::Phone);
        assert_eq!(modal.geometry().unwrap().anchor, PanelAnchor::Bottom);
        assert!(modal.is_open());
    }

    #[test]
    fn test_phone_height_uses_visual_viewport() {
        let telemetry = FakeTelemetry::new(390.0, 844.0, Some(700.0));
        let mut modal = presenter(telemetry, ScrollLock::new());
        modal.sync(Some(&service("a")), Instant::now());

        let g = modal.geometry().unwrap();
        assert!((g.height - 700.0 * 0.92).abs() < 0.01);
    }

    #[test]
    fn test_capability_variant_fixed_at_mount() {
        // Probe said "no visual viewport" at mount; later samples carrying
        // one must be ignored for this session.
        let telemetry = FakeTelemetry::new(390.0, 844.0, None);
        let mut modal = presenter(telemetry.clone(), ScrollLock::new());
        modal.sync(Some(&service("a")), Instant::now());

        telemetry.set(390.0, 844.0, Some(400.0));
        modal.on_viewport_change();
        let g = modal.geometry().unwrap();
        assert!((g.height - 844.0 * 0.92).abs() < 0.01);
    }

    #[test]
    fn test_service_switch_resets_scroll_deferred() {
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let mut modal = presenter(telemetry, ScrollLock::new());
        let now = Instant::now();

        modal.sync(Some(&service("a")), now);
        modal.scroll_body(7);
        assert_eq!(modal.body_scroll(), 7);

        // Switch A -> B: still open, scroll untouched until the deferred tick
        let b = service("b");
        modal.sync(Some(&b), now);
        assert!(modal.is_open());
        modal.request_body_reset();
        assert_eq!(modal.body_scroll(), 7);

        modal.on_tick(now + Duration::from_millis(16));
        assert_eq!(modal.body_scroll(), 0);
    }

    #[test]
    fn test_render_and_hit_zones() {
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let mut modal = presenter(telemetry, ScrollLock::new());
        let now = Instant::now();
        modal.sync(Some(&service("a")), now);

        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let contact = ContactInfo::new("@ivanov", "dev@example.com");
        terminal
            .draw(|frame| {
                let area = frame.area();
                // Render at settle time so the panel is fully sized
                modal.render(frame, area, &contact, now + Duration::from_secs(1));
            })
            .unwrap();

        // The rendered buffer carries the title and the contact handle
        let content = format!("{:?}", terminal.backend().buffer());
        assert!(content.contains("Service a"));
        assert!(content.contains("@ivanov"));

        // Corner of the screen is backdrop; panel center is panel
        assert_eq!(modal.hit_test(0, 0), Some(ModalHit::Backdrop));
        let g = modal.session.as_ref().unwrap().zones.panel;
        assert_eq!(
            modal.hit_test(g.x + g.width / 2, g.y + g.height / 2),
            Some(ModalHit::Panel)
        );
        // Close control is live
        let close = modal.session.as_ref().unwrap().zones.close;
        assert_ne!(close, Rect::ZERO);
        assert_eq!(modal.hit_test(close.x, close.y), Some(ModalHit::Close));
    }

    #[test]
    fn test_closed_modal_has_no_hits() {
        let telemetry = FakeTelemetry::new(1280.0, 800.0, None);
        let modal = presenter(telemetry, ScrollLock::new());
        assert_eq!(modal.hit_test(10, 10), None);
    }
}
