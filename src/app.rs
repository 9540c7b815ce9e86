use crate::config::Config;
use crate::error::LinkError;
use crate::feedback::{PageTurnSound, Silent, TransitionHook};
use crate::input::Gestures;
use crate::layout;
use crate::model::{Book, Variant};
use crate::newsletter;
use crate::state::{Paginator, Screen, UIState};
use crate::style;
use eframe::egui;
use std::time::{Duration, Instant};

/// User intents collected while rendering, applied once the frame is laid out.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    GoTo(usize),
    Advance,
    First,
    /// Turn to the newsletter page, or the last page if the book has no form
    SkipToSubscribe,
    ShowAbout,
    ShowBook,
    /// Leave the about view and turn to a section
    OpenSection(usize),
    OpenLink(String),
    Subscribe,
}

pub struct Folio {
    pub book: Book,
    pub paginator: Paginator,
    pub gestures: Gestures,
    pub ui: UIState,
    chrome: Option<Variant>,
}

impl Folio {
    pub fn new(book: Book, config: &Config, startup_error: Option<String>) -> Self {
        let hook: Box<dyn TransitionHook> = if config.sound.enabled {
            Box::new(PageTurnSound::new(config.sound.volume))
        } else {
            Box::new(Silent)
        };
        let paginator = Paginator::new(book.len(), config.navigation.transition(), hook);
        tracing::debug!(
            pages = paginator.total_pages(),
            turn_ms = paginator.delay().as_millis() as u64,
            sound = config.sound.enabled,
            "book opened"
        );

        let mut ui = UIState::new();
        if let Some(err) = startup_error {
            ui.set_error(err);
        }

        Self {
            book,
            paginator,
            gestures: Gestures::new(&config.navigation),
            ui,
            chrome: None,
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::GoTo(index) => {
                self.paginator.request_page(index, now);
            }
            Action::Advance => {
                self.paginator.advance(now);
            }
            Action::First => {
                self.paginator.jump_to_first(now);
            }
            Action::SkipToSubscribe => {
                match self.book.newsletter_page() {
                    Some(index) => self.paginator.request_page(index, now),
                    None => self.paginator.jump_to_last(now),
                };
            }
            Action::ShowAbout => self.ui.screen = Screen::About,
            Action::ShowBook => self.ui.screen = Screen::Book,
            Action::OpenSection(index) => {
                self.ui.screen = Screen::Book;
                self.paginator.request_page(index, now);
            }
            Action::OpenLink(href) => {
                if let Err(err) = newsletter::open_link(&href) {
                    tracing::warn!(%err, "failed to open link");
                    self.ui.set_error(err.to_string());
                }
            }
            Action::Subscribe => match newsletter::submit(&self.book.form, &self.ui.email) {
                Ok(_) => {
                    self.ui.form_error = None;
                    self.ui.email.clear();
                    self.ui
                        .set_info("Opened the subscription form in your browser".to_string());
                }
                Err(err @ LinkError::InvalidEmail) => self.ui.form_error = Some(err.to_string()),
                Err(err) => {
                    tracing::warn!(%err, "newsletter submission failed");
                    self.ui.set_error(err.to_string());
                }
            },
        }
    }

    fn chrome_variant(&self) -> Variant {
        match self.ui.screen {
            Screen::Book => self.book.variant(self.paginator.current_page()),
            Screen::About => Variant::Light,
        }
    }
}

impl eframe::App for Folio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.ui.clear_expired_messages(layout::MESSAGE_TIMEOUT_SECS);
        self.paginator.tick(now);

        if self.ui.screen == Screen::Book {
            self.handle_input(ctx, now);
        }

        let variant = self.chrome_variant();
        if self.chrome != Some(variant) {
            style::apply_chrome(ctx, variant);
            self.chrome = Some(variant);
        }

        let mut action = None;
        match self.ui.screen {
            Screen::Book => {
                self.render_header(ctx, &mut action);
                self.render_footer(ctx, &mut action);
                self.render_dots(ctx, &mut action);
                self.render_pages(ctx, now, &mut action);
            }
            Screen::About => self.render_about(ctx, &mut action),
        }

        if let Some(action) = action {
            self.apply(action, now);
        }

        if self.paginator.is_transitioning() {
            ctx.request_repaint();
        } else if self.ui.has_message() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
