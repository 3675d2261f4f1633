//! Centralized state store with reducer pattern and synchronous subscribers

use crate::{Action, ActionSummary};
use std::fmt;
use std::marker::PhantomData;

/// A reducer function that folds an action over the previous state
///
/// Reducers are pure: they never mutate the previous state, they return the
/// next one.
pub type Reducer<S, A> = fn(&S, A) -> S;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Centralized state store with Redux-like reducer pattern
///
/// The store holds the single live state value. Every published value is
/// delivered to every subscriber exactly once, synchronously, in subscription
/// order.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
///
/// # Example
/// ```ignore
/// #[derive(Clone, Default, PartialEq)]
/// struct AppState {
///     counter: i32,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum MyAction {
///     Increment,
/// }
///
/// fn reducer(state: &AppState, action: MyAction) -> AppState {
///     match action {
///         MyAction::Increment => AppState { counter: state.counter + 1 },
///     }
/// }
///
/// let mut store = Store::new(AppState::default(), reducer);
/// store.subscribe(|state| println!("counter = {}", state.counter));
/// store.dispatch(MyAction::Increment);
/// assert_eq!(store.current().counter, 1);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    subscribers: Vec<(SubscriptionId, Subscriber<S>)>,
    next_id: u64,
    _marker: PhantomData<A>,
}

impl<S, A: Action> fmt::Debug for Store<S, A>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            subscribers: Vec::new(),
            next_id: 0,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state
    pub fn current(&self) -> &S {
        &self.state
    }

    /// Register an observer for every future published state
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the current state and notify every subscriber in order
    pub fn publish(&mut self, next: S) {
        self.state = next;
        for (_, observer) in self.subscribers.iter_mut() {
            observer(&self.state);
        }
    }
}

impl<S: PartialEq, A: Action> Store<S, A> {
    /// Dispatch an action to the store
    ///
    /// The reducer result is always published, even when equal to the
    /// previous state. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let next = (self.reducer)(&self.state, action);
        let changed = next != self.state;
        self.publish(next);
        changed
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to intercept actions
/// before and after they are processed by the reducer.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Get a reference to the current state
    pub fn current(&self) -> &S {
        self.store.current()
    }

    /// Register an observer for every future published state
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Remove an observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Replace the current state and notify subscribers
    pub fn publish(&mut self, next: S) {
        self.store.publish(next);
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

impl<S: PartialEq, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Dispatch an action through middleware and store
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting
/// concerns to your store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the reduced state was published
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that traces every reduction
///
/// Each dispatch gets a sequence number; the action is logged through its
/// [`ActionSummary`] once the new state has been published.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware {
    dispatched: u64,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions seen so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, _action: &A) {
        self.dispatched += 1;
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(
            seq = self.dispatched,
            action = %action.summary(),
            state_changed,
            "Action reduced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    impl ActionSummary for TestAction {}

    fn test_reducer(state: &TestState, action: TestAction) -> TestState {
        match action {
            TestAction::Increment => TestState {
                counter: state.counter + 1,
            },
            TestAction::Decrement => TestState {
                counter: state.counter - 1,
            },
            TestAction::NoOp => state.clone(),
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.current().counter, 1);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.current().counter, 2);

        assert!(store.dispatch(TestAction::Decrement));
        assert_eq!(store.current().counter, 1);
    }

    #[test]
    fn test_store_noop_still_publishes() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state: &TestState| sink.borrow_mut().push(state.counter));

        assert!(!store.dispatch(TestAction::NoOp));
        assert_eq!(store.current().counter, 0);
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = log.clone();
        store.subscribe(move |state: &TestState| first.borrow_mut().push(("first", state.counter)));
        let second = log.clone();
        store.subscribe(move |state: &TestState| second.borrow_mut().push(("second", state.counter)));

        store.dispatch(TestAction::Increment);
        store.publish(TestState { counter: 10 });

        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("first", 10), ("second", 10)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_: &TestState| *sink.borrow_mut() += 1);

        store.dispatch(TestAction::Increment);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(TestAction::Increment);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::NoOp);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
        assert_eq!(store.current().counter, 1);
    }

    #[test]
    fn test_logging_middleware_counts_dispatches() {
        let mut store = StoreWithMiddleware::new(TestState::default(), test_reducer, LoggingMiddleware::new());

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::NoOp);
        store.dispatch(TestAction::Decrement);

        assert_eq!(store.middleware().dispatched(), 3);
        assert_eq!(store.current().counter, 0);
    }
}
