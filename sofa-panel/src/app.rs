//! Panel assembly
//!
//! Wiring order:
//! 1. Document from markup
//! 2. Event bus over the document's controls (fails on a missing control)
//! 3. Renderer and synchronizer, both validated against the document
//! 4. Store with two subscribers: synchronizer, then pipeline + renderer
//! 5. Initial state published once so the full catalogue shows at startup

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::KeyEvent;
use filter_panel::{
    ActionSummary, ConfigError, DispatchRuntime, Document, KeyOutcome, Keymap, LoggingMiddleware, Markup,
    StoreWithMiddleware, UiEvent,
};

use crate::action::Action;
use crate::aggregator::build_event_bus;
use crate::config::{load_keymap, load_markup, parse_filters, Args};
use crate::dataset;
use crate::error::PanelError;
use crate::fields::LIST_ID;
use crate::markup::default_markup;
use crate::pipeline::apply;
use crate::record::Record;
use crate::reducer::reducer;
use crate::renderer::ListRenderer;
use crate::state::{FilterState, PartialFilterUpdate};
use crate::sync::ControlSync;

pub type PanelStore = StoreWithMiddleware<FilterState, Action, LoggingMiddleware>;
pub type PanelRuntime = DispatchRuntime<FilterState, Action, PanelStore>;

/// A fully wired filter panel
pub struct FilterPanel {
    runtime: PanelRuntime,
    dataset: Rc<[Record]>,
}

impl FilterPanel {
    pub fn build(dataset: Rc<[Record]>, markup: &Markup, keymap: Keymap) -> Result<Self, ConfigError> {
        let document = Document::from_markup(markup)?;
        let bus = build_event_bus(&document)?;

        let document = Rc::new(RefCell::new(document));
        let renderer = ListRenderer::new(document.clone(), LIST_ID)?;
        let sync = ControlSync::new(document.clone())?;

        let mut store = StoreWithMiddleware::new(FilterState::default(), reducer, LoggingMiddleware::new());

        store.subscribe(move |state: &FilterState| {
            if let Err(e) = sync.sync(state) {
                tracing::error!(error = %e, "Failed to sync controls");
            }
        });

        let records = dataset.clone();
        store.subscribe(move |state: &FilterState| {
            let subset = apply(&records, state);
            if let Err(e) = renderer.render(&subset) {
                tracing::error!(error = %e, "Failed to render list");
            }
        });

        store.publish(FilterState::default());
        tracing::info!(records = dataset.len(), "Filter panel ready");

        let runtime = DispatchRuntime::new(store, bus, document).with_keymap(keymap);
        Ok(Self { runtime, dataset })
    }

    /// Load everything the command line points at, then apply its presets
    pub fn from_args(args: &Args) -> Result<Self, PanelError> {
        let presets = parse_filters(&args.filters)?;
        let dataset = match &args.data {
            Some(path) => dataset::load(path)?,
            None => dataset::builtin(),
        };
        let markup = match &args.layout {
            Some(path) => load_markup(path)?,
            None => default_markup(&dataset),
        };
        let keymap = match &args.keymap {
            Some(path) => load_keymap(path)?,
            None => Keymap::default(),
        };

        let mut panel = Self::build(dataset, &markup, keymap)?;
        panel.apply_update(presets);
        Ok(panel)
    }

    /// Dispatch a programmatic update through the store
    pub fn apply_update(&mut self, update: PartialFilterUpdate) {
        if update.is_empty() {
            return;
        }
        let action = Action::FilterApply(update);
        tracing::info!(action = %action.summary(), "Applying preset");
        self.runtime.enqueue(action);
        self.runtime.drain_queue();
    }

    pub fn handle_ui_event(&mut self, event: &UiEvent) -> Option<bool> {
        self.runtime.handle_ui_event(event)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        self.runtime.handle_key(key)
    }

    pub fn state(&self) -> &FilterState {
        self.runtime.state()
    }

    pub fn document(&self) -> Ref<'_, Document> {
        self.runtime.document()
    }

    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// Items currently shown in the list
    pub fn displayed(&self) -> Vec<String> {
        self.document()
            .list(LIST_ID)
            .map(|list| list.items().to_vec())
            .unwrap_or_default()
    }

    pub fn runtime(&self) -> &PanelRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut PanelRuntime {
        &mut self.runtime
    }
}
