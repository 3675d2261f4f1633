//! Runtime wiring a store, an event bus and a document to the terminal
//!
//! The runtime owns the whole loop: key events become [`Command`]s through
//! the [`Keymap`], the [`Document`] turns commands into [`UiEvent`]s, the
//! [`EventBus`] maps those to actions, and the store reduces and publishes.
//! Every step of one event runs to completion before the next event is read.

use std::cell::{Ref, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::bus::{spawn_event_poller, EventBus, RawEvent};
use crate::document::{Document, Interaction};
use crate::event::UiEvent;
use crate::keybindings::{Command, Keymap};
use crate::store::{Middleware, Store, StoreWithMiddleware};
use crate::Action;

/// Timeout passed to each `crossterm::event::poll` call
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll cycles, roughly one frame
const LOOP_SLEEP: Duration = Duration::from_millis(16);

/// What a key press led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No binding, or nothing to do
    Ignored,
    /// Presentation changed only
    Redraw,
    /// An action was dispatched
    Dispatched { changed: bool },
    /// The quit command was pressed
    Quit,
}

/// Store interface used by [`DispatchRuntime`].
pub trait DispatchStore<S, A: Action> {
    /// Dispatch an action and return whether the state changed.
    fn dispatch(&mut self, action: A) -> bool;
    /// Get the current state.
    fn current(&self) -> &S;
}

impl<S: PartialEq, A: Action> DispatchStore<S, A> for Store<S, A> {
    fn dispatch(&mut self, action: A) -> bool {
        Store::dispatch(self, action)
    }

    fn current(&self) -> &S {
        Store::current(self)
    }
}

impl<S: PartialEq, A: Action, M: Middleware<A>> DispatchStore<S, A> for StoreWithMiddleware<S, A, M> {
    fn dispatch(&mut self, action: A) -> bool {
        StoreWithMiddleware::dispatch(self, action)
    }

    fn current(&self) -> &S {
        StoreWithMiddleware::current(self)
    }
}

enum Step<A> {
    Raw(RawEvent),
    Action(A),
}

/// Runtime for a document-driven store
pub struct DispatchRuntime<S, A: Action, St: DispatchStore<S, A>> {
    store: St,
    bus: EventBus<A>,
    document: Rc<RefCell<Document>>,
    keymap: Keymap,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    should_render: bool,
    _state: std::marker::PhantomData<S>,
}

impl<S, A: Action, St: DispatchStore<S, A>> DispatchRuntime<S, A, St> {
    /// Create a runtime from an existing store, its event bus and the
    /// document both were wired against.
    pub fn new(store: St, bus: EventBus<A>, document: Rc<RefCell<Document>>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store,
            bus,
            document,
            keymap: Keymap::default(),
            action_tx,
            action_rx,
            should_render: true,
            _state: std::marker::PhantomData,
        }
    }

    /// Replace the default keymap.
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Access the current state.
    pub fn state(&self) -> &S {
        self.store.current()
    }

    /// Borrow the document.
    pub fn document(&self) -> Ref<'_, Document> {
        self.document.borrow()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Route an element event and dispatch the resulting action.
    ///
    /// Returns `None` if no source is bound for the event, otherwise whether
    /// the state changed.
    pub fn handle_ui_event(&mut self, event: &UiEvent) -> Option<bool> {
        let action = self.bus.route(event)?;
        Some(self.store.dispatch(action))
    }

    /// Run one key press through keymap, document and bus.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let Some(command) = self.keymap.command_for(key) else {
            return KeyOutcome::Ignored;
        };
        if command == Command::Quit {
            return KeyOutcome::Quit;
        }

        // The document borrow must end before dispatch: subscribers write to it.
        let interaction = self.document.borrow_mut().handle_command(command);
        match interaction {
            Interaction::Ignored => KeyOutcome::Ignored,
            Interaction::Redraw => KeyOutcome::Redraw,
            Interaction::Event(event) => match self.handle_ui_event(&event) {
                Some(changed) => KeyOutcome::Dispatched { changed },
                None => KeyOutcome::Redraw,
            },
        }
    }

    /// Dispatch every queued action in FIFO order. Returns how many ran.
    pub fn drain_queue(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.store.dispatch(action);
            count += 1;
        }
        count
    }

    /// Run the event/action loop until quit.
    pub async fn run<B, FRender>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &Document, &S),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            POLL_TIMEOUT,
            LOOP_SLEEP,
            cancel_token.clone(),
        );

        if self.drain_queue() > 0 {
            self.should_render = true;
        }

        loop {
            if self.should_render {
                let document = self.document.borrow();
                let state = self.store.current();
                terminal.draw(|frame| render(frame, frame.area(), &document, state))?;
                self.should_render = false;
            }

            let step = tokio::select! {
                Some(raw_event) = event_rx.recv() => Step::Raw(raw_event),
                Some(action) = self.action_rx.recv() => Step::Action(action),
                else => break,
            };

            match step {
                Step::Raw(RawEvent::Key(key)) => match self.handle_key(key) {
                    KeyOutcome::Quit => break,
                    KeyOutcome::Ignored => {}
                    KeyOutcome::Redraw | KeyOutcome::Dispatched { .. } => {
                        self.should_render = true;
                    }
                },
                Step::Raw(RawEvent::Resize(_, _)) => self.should_render = true,
                Step::Action(action) => {
                    self.store.dispatch(action);
                    self.should_render = true;
                }
            }
        }

        cancel_token.cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Markup;
    use crate::keybindings::parse_key_string;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Pick(String),
        Clear,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Pick(_) => "Pick",
                TestAction::Clear => "Clear",
            }
        }
    }

    fn reducer(_state: &String, action: TestAction) -> String {
        match action {
            TestAction::Pick(value) => value,
            TestAction::Clear => String::new(),
        }
    }

    fn runtime() -> DispatchRuntime<String, TestAction, Store<String, TestAction>> {
        let markup = Markup::new()
            .select("pick", "Pick", vec!["a".into(), "b".into()])
            .button("clear", "Clear");
        let document = Document::from_markup(&markup).unwrap();
        let mut bus = EventBus::new();
        bus.on_change(&document, "pick", TestAction::Pick)
            .unwrap()
            .on_click(&document, "clear", TestAction::Clear)
            .unwrap();
        let store = Store::new(String::new(), reducer);
        DispatchRuntime::new(store, bus, Rc::new(RefCell::new(document)))
    }

    fn key(s: &str) -> KeyEvent {
        parse_key_string(s).unwrap()
    }

    #[test]
    fn test_key_flow_dispatches() {
        let mut runtime = runtime();

        assert_eq!(
            runtime.handle_key(key("right")),
            KeyOutcome::Dispatched { changed: true }
        );
        assert_eq!(runtime.state(), "a");

        assert_eq!(runtime.handle_key(key("tab")), KeyOutcome::Redraw);
        assert_eq!(
            runtime.handle_key(key("enter")),
            KeyOutcome::Dispatched { changed: true }
        );
        assert_eq!(runtime.state(), "");
    }

    #[test]
    fn test_quit_and_unbound_keys() {
        let mut runtime = runtime();
        assert_eq!(runtime.handle_key(key("q")), KeyOutcome::Quit);
        assert_eq!(runtime.handle_key(key("x")), KeyOutcome::Ignored);
        assert_eq!(runtime.handle_key(key("left")), KeyOutcome::Ignored);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut runtime = runtime();
        runtime.enqueue(TestAction::Pick("b".into()));
        runtime.enqueue(TestAction::Clear);
        runtime.enqueue(TestAction::Pick("a".into()));

        assert_eq!(runtime.drain_queue(), 3);
        assert_eq!(runtime.state(), "a");
    }
}
