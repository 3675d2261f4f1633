//! Event bus merging element events into a single action stream

use crate::document::Document;
use crate::error::ConfigError;
use crate::event::{ControlId, EventKind, EventType, UiEvent};
use crate::Action;
use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

/// Raw terminal event before it is mapped to a command
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

enum Route<A> {
    /// Map the new value of a select to an action
    Change(Box<dyn Fn(String) -> A>),
    /// Emit a fixed action
    Click(A),
}

/// Event bus that binds element events to actions
///
/// Each binding is validated against the [`Document`] when it is added: a
/// source that does not exist, or has the wrong element kind, fails with a
/// [`ConfigError`]. Routing is synchronous and one-to-one: each [`UiEvent`]
/// yields at most one action, so the order of actions is the order of events.
///
/// # Example
/// ```ignore
/// let mut bus = EventBus::new();
/// bus.on_change(&document, "select-color", |value| Action::ColorSelect(value))?
///     .on_click(&document, "btn-reset-all", Action::ResetAll)?;
///
/// let action = bus.route(&UiEvent::click("btn-reset-all"));
/// ```
pub struct EventBus<A: Action> {
    routes: HashMap<(ControlId, EventType), Route<A>>,
}

impl<A: Action> fmt::Debug for EventBus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sources: Vec<_> = self
            .routes
            .keys()
            .map(|(id, event_type)| format!("{id}:{event_type:?}"))
            .collect();
        sources.sort();
        f.debug_struct("EventBus").field("sources", &sources).finish()
    }
}

impl<A: Action> Default for EventBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> EventBus<A> {
    /// Create an event bus with no sources
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Bind value changes of the select `id`
    pub fn on_change<F>(
        &mut self,
        document: &Document,
        id: impl Into<ControlId>,
        map: F,
    ) -> Result<&mut Self, ConfigError>
    where
        F: Fn(String) -> A + 'static,
    {
        let id = id.into();
        document.select(id.as_str())?;
        self.routes
            .insert((id, EventType::Change), Route::Change(Box::new(map)));
        Ok(self)
    }

    /// Bind activations of the button `id` to a fixed action
    pub fn on_click(
        &mut self,
        document: &Document,
        id: impl Into<ControlId>,
        action: A,
    ) -> Result<&mut Self, ConfigError> {
        let id = id.into();
        document.button(id.as_str())?;
        self.routes.insert((id, EventType::Click), Route::Click(action));
        Ok(self)
    }

    /// Whether an event source is bound
    pub fn is_bound(&self, id: &str, event_type: EventType) -> bool {
        self.routes.contains_key(&(ControlId::new(id), event_type))
    }

    /// Number of bound sources
    pub fn source_count(&self) -> usize {
        self.routes.len()
    }

    /// Map an element event to its action, if the source is bound
    pub fn route(&self, event: &UiEvent) -> Option<A> {
        let key = (event.target.clone(), event.event_type());
        let action = match (self.routes.get(&key), &event.kind) {
            (Some(Route::Change(map)), EventKind::Change(value)) => map(value.clone()),
            (Some(Route::Click(action)), EventKind::Click) => action.clone(),
            _ => {
                trace!(target_id = %event.target, kind = ?event.kind, "Unbound event");
                return None;
            }
        };
        Some(action)
    }
}

/// Spawn the terminal polling task with cancellation support
///
/// Polls crossterm for key presses and resizes and forwards them through
/// `tx`. Stops when `cancel_token` is cancelled or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;
        info!("Event poller started");

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) if key.kind != KeyEventKind::Release => {
                                RawEvent::Key(key)
                            }
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Markup;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Pick(String),
        Reset,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Pick(_) => "Pick",
                TestAction::Reset => "Reset",
            }
        }
    }

    fn document() -> Document {
        let markup = Markup::new()
            .select("pick", "Pick", vec!["a".into(), "b".into()])
            .button("reset", "Reset")
            .list("list", "");
        Document::from_markup(&markup).unwrap()
    }

    #[test]
    fn test_routes_change_and_click() {
        let document = document();
        let mut bus = EventBus::new();
        bus.on_change(&document, "pick", TestAction::Pick)
            .unwrap()
            .on_click(&document, "reset", TestAction::Reset)
            .unwrap();

        assert_eq!(bus.source_count(), 2);
        assert_eq!(
            bus.route(&UiEvent::change("pick", "b")),
            Some(TestAction::Pick("b".into()))
        );
        assert_eq!(bus.route(&UiEvent::click("reset")), Some(TestAction::Reset));
    }

    #[test]
    fn test_unbound_events_are_ignored() {
        let document = document();
        let mut bus = EventBus::new();
        bus.on_click(&document, "reset", TestAction::Reset).unwrap();

        assert_eq!(bus.route(&UiEvent::change("pick", "a")), None);
        assert_eq!(bus.route(&UiEvent::change("reset", "a")), None);
        assert!(bus.is_bound("reset", EventType::Click));
        assert!(!bus.is_bound("reset", EventType::Change));
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let document = document();
        let mut bus: EventBus<TestAction> = EventBus::new();

        let err = bus
            .on_click(&document, "btn-missing", TestAction::Reset)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingElement {
                id: "btn-missing".into()
            }
        );
    }

    #[test]
    fn test_wrong_kind_is_config_error() {
        let document = document();
        let mut bus: EventBus<TestAction> = EventBus::new();

        let err = bus.on_change(&document, "list", TestAction::Pick).unwrap_err();
        assert!(matches!(err, ConfigError::WrongKind { expected: "select", .. }));
    }
}
