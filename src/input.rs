// Input handling for Folio
// Keyboard, wheel and touch gestures, translated into page turns

use crate::app::Folio;
use crate::config::NavigationConfig;
use crate::state::Paginator;
use eframe::egui;
use std::time::{Duration, Instant};

/// Points per wheel "page" for devices that scroll by pages.
const PAGE_SCROLL_POINTS: f32 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn apply(self, paginator: &mut Paginator, now: Instant) -> bool {
        match self {
            Direction::Forward => paginator.advance(now),
            Direction::Backward => paginator.retreat(now),
        }
    }
}

pub const NAV_KEYS: [egui::Key; 5] = [
    egui::Key::ArrowDown,
    egui::Key::ArrowRight,
    egui::Key::Space,
    egui::Key::ArrowUp,
    egui::Key::ArrowLeft,
];

pub fn key_direction(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowDown | egui::Key::ArrowRight | egui::Key::Space => Some(Direction::Forward),
        egui::Key::ArrowUp | egui::Key::ArrowLeft => Some(Direction::Backward),
        _ => None,
    }
}

pub fn on_key(key: egui::Key, paginator: &mut Paginator, now: Instant) -> bool {
    key_direction(key).is_some_and(|direction| direction.apply(paginator, now))
}

/// Turns a page per qualifying wheel event, at most once per cooldown.
pub struct WheelAdapter {
    threshold: f32,
    cooldown: Duration,
    last_trigger: Option<Instant>,
}

impl WheelAdapter {
    pub fn new(threshold: f32, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            last_trigger: None,
        }
    }

    /// `delta_y` is in points, positive when scrolling down.
    pub fn on_wheel(&mut self, delta_y: f32, paginator: &mut Paginator, now: Instant) -> bool {
        if paginator.is_transitioning() {
            return false;
        }
        if let Some(last) = self.last_trigger {
            if now.saturating_duration_since(last) < self.cooldown {
                return false;
            }
        }

        let direction = if delta_y > self.threshold {
            Direction::Forward
        } else if delta_y < -self.threshold {
            Direction::Backward
        } else {
            return false;
        };

        let turned = direction.apply(paginator, now);
        if turned {
            self.last_trigger = Some(now);
        }
        turned
    }
}

/// Turns a page on a long enough swipe.
///
/// Only the first finger down is followed; other touches are ignored until it lifts.
pub struct TouchAdapter {
    threshold: f32,
    start: Option<(egui::TouchId, egui::Pos2)>,
}

impl TouchAdapter {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn on_start(&mut self, id: egui::TouchId, pos: egui::Pos2) {
        if self.start.is_none() {
            self.start = Some((id, pos));
        }
    }

    pub fn on_cancel(&mut self, id: egui::TouchId) {
        if self.start.is_some_and(|(tracked, _)| tracked == id) {
            self.start = None;
        }
    }

    pub fn on_end(
        &mut self,
        id: egui::TouchId,
        pos: egui::Pos2,
        paginator: &mut Paginator,
        now: Instant,
    ) -> bool {
        let Some((tracked, start)) = self.start else {
            return false;
        };
        if tracked != id {
            return false;
        }
        self.start = None;
        if paginator.is_transitioning() {
            return false;
        }
        swipe_direction(start, pos, self.threshold)
            .is_some_and(|direction| direction.apply(paginator, now))
    }
}

/// Vertical swipes win when they dominate; up and left both read as "forward".
pub fn swipe_direction(start: egui::Pos2, end: egui::Pos2, threshold: f32) -> Option<Direction> {
    let diff_y = start.y - end.y;
    let diff_x = start.x - end.x;

    let forward = if diff_y.abs() > diff_x.abs() && diff_y.abs() > threshold {
        diff_y > 0.0
    } else if diff_x.abs() > threshold {
        diff_x > 0.0
    } else {
        return None;
    };

    Some(if forward {
        Direction::Forward
    } else {
        Direction::Backward
    })
}

/// Gesture adapters owned by the book view for its whole lifetime.
pub struct Gestures {
    pub wheel: WheelAdapter,
    pub touch: TouchAdapter,
    line_points: f32,
}

impl Gestures {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            wheel: WheelAdapter::new(config.wheel_threshold, config.wheel_cooldown()),
            touch: TouchAdapter::new(config.swipe_threshold),
            line_points: config.line_scroll_points,
        }
    }

    fn wheel_points(&self, unit: egui::MouseWheelUnit, delta: egui::Vec2) -> f32 {
        // egui reports wheel-down as negative; pages count it as positive
        -match unit {
            egui::MouseWheelUnit::Point => delta.y,
            egui::MouseWheelUnit::Line => delta.y * self.line_points,
            egui::MouseWheelUnit::Page => delta.y * PAGE_SCROLL_POINTS,
        }
    }
}

/// The raw events the book view reacts to, besides keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Wheel {
        unit: egui::MouseWheelUnit,
        delta: egui::Vec2,
    },
    TouchStart(egui::TouchId, egui::Pos2),
    TouchEnd(egui::TouchId, egui::Pos2),
    TouchCancel(egui::TouchId),
}

impl Gesture {
    pub fn from_event(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::MouseWheel { unit, delta, .. } => Some(Gesture::Wheel {
                unit: *unit,
                delta: *delta,
            }),
            egui::Event::Touch { id, phase, pos, .. } => match phase {
                egui::TouchPhase::Start => Some(Gesture::TouchStart(*id, *pos)),
                egui::TouchPhase::End => Some(Gesture::TouchEnd(*id, *pos)),
                egui::TouchPhase::Cancel => Some(Gesture::TouchCancel(*id)),
                egui::TouchPhase::Move => None,
            },
            _ => None,
        }
    }
}

impl Folio {
    pub fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        // Leave the keys to a focused text field (the newsletter input)
        if !ctx.wants_keyboard_input() {
            for key in NAV_KEYS {
                if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
                    on_key(key, &mut self.paginator, now);
                }
            }
        }

        let gestures: Vec<Gesture> =
            ctx.input(|i| i.events.iter().filter_map(Gesture::from_event).collect());
        for gesture in gestures {
            self.on_gesture(gesture, now);
        }
    }

    pub fn on_gesture(&mut self, gesture: Gesture, now: Instant) {
        match gesture {
            Gesture::Wheel { unit, delta } => {
                let points = self.gestures.wheel_points(unit, delta);
                self.gestures.wheel.on_wheel(points, &mut self.paginator, now);
            }
            Gesture::TouchStart(id, pos) => self.gestures.touch.on_start(id, pos),
            Gesture::TouchEnd(id, pos) => {
                self.gestures.touch.on_end(id, pos, &mut self.paginator, now);
            }
            Gesture::TouchCancel(id) => self.gestures.touch.on_cancel(id),
        }
    }
}
