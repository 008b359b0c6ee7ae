use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::runtime::Handle;

use crate::cache::{CacheError, CacheStatsSnapshot};
use crate::prefetch::{LinkIntents, PressModifiers, PressOutcome, RecordStore};
use crate::records::{RecordDetail, RecordId, RecordSummary};
use crate::ui::boundary::{compose_page, Page, Resource, SuspenseAfterInitialRender};
use crate::ui::events::AppEvent;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::{body_split, layout_regions, sidebar_entry_at};
use crate::ui::lifecycle::{FirstRenderGate, LifecycleCoordinator, RenderPhase, SettleSignal};
use crate::ui::mvi::dispatch;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Route};

/// Data a view waits on during the first render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    List,
    Detail(RecordId),
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub summary: RecordSummary,
    /// The current route shows this record.
    pub active: bool,
    pub highlighted: bool,
    /// An intercepted press on this link is waiting for its data.
    pub pressing: bool,
    /// Detail is fresh in the cache; opening it is instant.
    pub cached: bool,
    /// A fetch for this record is in flight.
    pub fetching: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Index route: nothing selected.
    Placeholder,
    Record(RecordDetail),
    NotFound(RecordId),
}

pub type PageView = Page<SidebarView, DetailView>;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Route and highlight (MVI pattern).
    nav: NavState,
    /// Sidebar entry under the mouse pointer.
    pointer_entry: Option<usize>,
    intents: LinkIntents,
    lifecycle: LifecycleCoordinator,
    boundary: SuspenseAfterInitialRender,
    gate: FirstRenderGate<Dependency>,
    settle_signal: Option<SettleSignal>,
    started: bool,
    /// Set while the first render pass runs; loads started then are
    /// dependencies of the first render.
    first_pass: bool,
    /// Own loads of the sidebar and the detail view currently in flight.
    loading: HashSet<Dependency>,
    list_error: Option<CacheError>,
    detail_errors: HashMap<RecordId, CacheError>,
    runtime: Handle,
    events: Sender<AppEvent>,
    ticks: u64,
}

impl App {
    pub fn new(
        store: RecordStore,
        initial: Route,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let lifecycle = LifecycleCoordinator::new();
        let (gate, settle_signal) = FirstRenderGate::new();
        Self {
            should_quit: false,
            size: None,
            nav: NavState {
                route: initial,
                ..NavState::default()
            },
            pointer_entry: None,
            intents: LinkIntents::new(store),
            boundary: SuspenseAfterInitialRender::new(lifecycle.clone()),
            lifecycle,
            gate,
            settle_signal: Some(settle_signal),
            started: false,
            first_pass: false,
            loading: HashSet::new(),
            list_error: None,
            detail_errors: HashMap::new(),
            runtime,
            events,
            ticks: 0,
        }
    }

    /// Run the first render pass: start the loads the initial route needs,
    /// register them with the first-render gate and mount the detail
    /// boundary.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.first_pass = true;
        self.sync();
        self.first_pass = false;
        self.gate.commit();

        if let Some(signal) = self.settle_signal.take() {
            if let Some(effect) = self.boundary.mount(signal) {
                let tx = self.events.clone();
                self.runtime.spawn(async move {
                    if effect.await {
                        let _ = tx.send(AppEvent::FirstRenderSettled);
                    }
                });
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Tick => self.on_tick(),
            AppEvent::ListLoaded(result) => self.on_list_loaded(result),
            AppEvent::DetailLoaded { id, result } => self.on_detail_loaded(id, result),
            AppEvent::PrefetchSettled { id, result } => {
                if let Err(err) = result {
                    if !err.is_cancelled() {
                        tracing::warn!(record = %id, "prefetch failed: {}", err);
                    }
                }
            }
            AppEvent::PressSettled { ticket, result } => {
                if let Err(err) = &result {
                    if !err.is_cancelled() {
                        tracing::warn!(
                            record = %ticket.target(),
                            "warm before navigation failed: {}",
                            err
                        );
                    }
                }
                if let Some(id) = self.intents.settle(&ticket) {
                    self.navigate(Route::Record(id));
                }
            }
            AppEvent::FirstRenderSettled => {
                tracing::debug!("detail boundary now catches its own suspensions");
            }
        }
        self.sync();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn route(&self) -> &Route {
        &self.nav.route
    }

    pub fn highlighted(&self) -> usize {
        self.nav.highlighted
    }

    pub fn phase(&self) -> RenderPhase {
        self.lifecycle.phase()
    }

    pub fn lifecycle(&self) -> &LifecycleCoordinator {
        &self.lifecycle
    }

    pub fn store(&self) -> &RecordStore {
        self.intents.store()
    }

    pub fn cache_stats(&self) -> CacheStatsSnapshot {
        self.store().stats()
    }

    pub fn in_flight(&self) -> usize {
        self.store().pending_count()
    }

    // -- intents ------------------------------------------------------------

    /// Keyboard highlight moved; the newly highlighted link counts as hovered.
    pub fn move_highlight(&mut self, delta: i32) {
        if !self.sidebar_on_screen() {
            return;
        }
        if dispatch::<NavReducer>(&mut self.nav, NavIntent::MoveHighlight { delta }) {
            self.hover_highlighted();
        }
    }

    /// Pointer moved over the entry at `index`. Only entering an entry
    /// counts as hover intent.
    pub fn hover_index(&mut self, index: usize) {
        if self.pointer_entry == Some(index) || index >= self.nav.entry_count {
            return;
        }
        if !self.sidebar_on_screen() {
            return;
        }
        self.pointer_entry = Some(index);
        dispatch::<NavReducer>(&mut self.nav, NavIntent::Highlight { index });
        self.hover_highlighted();
    }

    /// Pointer moved off the sidebar entries.
    pub fn pointer_left(&mut self) {
        self.pointer_entry = None;
    }

    pub fn press_highlighted(&mut self, modifiers: PressModifiers) {
        self.press_index(self.nav.highlighted, modifiers);
    }

    pub fn press_index(&mut self, index: usize, modifiers: PressModifiers) {
        if !self.sidebar_on_screen() {
            return;
        }
        let Some(id) = self.entry_id(index) else {
            return;
        };
        dispatch::<NavReducer>(&mut self.nav, NavIntent::Highlight { index });

        match self.intents.press(id, modifiers) {
            PressOutcome::Native(id) => self.navigate(Route::Record(id)),
            PressOutcome::Intercepted { ticket, warm } => {
                let tx = self.events.clone();
                self.runtime.spawn(async move {
                    let result = warm.await;
                    let _ = tx.send(AppEvent::PressSettled { ticket, result });
                });
            }
        }
    }

    /// "All records".
    pub fn go_index(&mut self) {
        if !self.sidebar_on_screen() {
            return;
        }
        self.intents.navigated_elsewhere();
        self.navigate(Route::Index);
    }

    /// Forget recorded failures so the next pass loads again.
    pub fn retry(&mut self) {
        if self.list_error.take().is_some() {
            tracing::info!("retrying record list");
        }
        self.detail_errors.clear();
    }

    /// Index of the sidebar entry under the terminal cell, if any.
    pub fn entry_at(&self, col: u16, row: u16) -> Option<usize> {
        let (cols, rows) = self.size?;
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        let (sidebar, _) = body_split(body);
        sidebar_entry_at(sidebar, col, row, self.nav.entry_count)
    }

    // -- view ---------------------------------------------------------------

    /// Compose the page through the loading boundaries.
    pub fn page(&self) -> PageView {
        let sidebar = match self.list_resource() {
            Resource::Ready(list) => Resource::Ready(self.sidebar_view(&list)),
            Resource::Pending => Resource::Pending,
            Resource::Failed(err) => Resource::Failed(err),
        };
        compose_page(sidebar, self.boundary.resolve(self.detail_resource()))
    }

    /// Whether the sidebar is drawn. Under the page-wide fallback or error
    /// its links cannot be reached.
    fn sidebar_on_screen(&self) -> bool {
        matches!(self.page(), Page::Ready { .. })
    }

    fn list_resource(&self) -> Resource<Arc<Vec<RecordSummary>>> {
        if let Some(list) = self.store().list_snapshot().value() {
            return Resource::Ready(Arc::clone(list));
        }
        match &self.list_error {
            Some(err) => Resource::Failed(err.clone()),
            None => Resource::Pending,
        }
    }

    fn detail_resource(&self) -> Resource<DetailView> {
        let Route::Record(id) = &self.nav.route else {
            return Resource::Ready(DetailView::Placeholder);
        };
        if let Some(detail) = self.store().detail_snapshot(id).value() {
            let view = match detail.as_ref() {
                Some(detail) => DetailView::Record(detail.clone()),
                None => DetailView::NotFound(id.clone()),
            };
            return Resource::Ready(view);
        }
        match self.detail_errors.get(id) {
            Some(err) => Resource::Failed(err.clone()),
            None => Resource::Pending,
        }
    }

    fn sidebar_view(&self, list: &[RecordSummary]) -> SidebarView {
        let active = self.nav.route.record();
        let pressing = self.intents.pending_target();
        let entries = list
            .iter()
            .enumerate()
            .map(|(index, summary)| {
                let snapshot = self.store().detail_snapshot(&summary.id);
                SidebarEntry {
                    active: active == Some(&summary.id),
                    highlighted: index == self.nav.highlighted,
                    pressing: pressing == Some(&summary.id),
                    cached: snapshot.is_fresh(),
                    fetching: snapshot.is_pending(),
                    summary: summary.clone(),
                }
            })
            .collect();
        SidebarView { entries }
    }

    // -- internals ----------------------------------------------------------

    fn entry_id(&self, index: usize) -> Option<RecordId> {
        self.store()
            .list_snapshot()
            .value()
            .and_then(|list| list.get(index).map(|summary| summary.id.clone()))
    }

    fn hover_highlighted(&mut self) {
        let Some(id) = self.entry_id(self.nav.highlighted) else {
            return;
        };
        let Some(warm) = self.intents.hover(&id) else {
            return;
        };
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = warm.await;
            let _ = tx.send(AppEvent::PrefetchSettled { id, result });
        });
    }

    fn navigate(&mut self, route: Route) {
        if route == self.nav.route {
            return;
        }
        tracing::debug!(from = %self.nav.route.path(), to = %route.path(), "navigate");

        // The old detail view is gone; it no longer holds up the first render.
        if let Some(old) = self.nav.route.record() {
            self.gate.settle(&Dependency::Detail(old.clone()));
        }
        if let Some(id) = route.record() {
            self.detail_errors.remove(id);
            if let Some(index) = self.entry_index(id) {
                dispatch::<NavReducer>(&mut self.nav, NavIntent::Highlight { index });
            }
        }
        dispatch::<NavReducer>(&mut self.nav, NavIntent::Navigate(route));
    }

    fn entry_index(&self, id: &RecordId) -> Option<usize> {
        self.store()
            .list_snapshot()
            .value()
            .and_then(|list| list.iter().position(|summary| &summary.id == id))
    }

    fn on_list_loaded(&mut self, result: Result<(), CacheError>) {
        self.loading.remove(&Dependency::List);
        match result {
            Ok(()) => self.list_error = None,
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                tracing::warn!("record list failed: {}", err);
                self.list_error = Some(err);
            }
        }
    }

    fn on_detail_loaded(&mut self, id: RecordId, result: Result<(), CacheError>) {
        self.loading.remove(&Dependency::Detail(id.clone()));
        match result {
            Ok(()) => {
                self.detail_errors.remove(&id);
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                tracing::warn!(record = %id, "record failed: {}", err);
                self.detail_errors.insert(id, err);
            }
        }
    }

    /// Bring loads and bookkeeping in line with what is on screen.
    fn sync(&mut self) {
        self.ensure_list();
        if let Some(id) = self.nav.route.record().cloned() {
            self.ensure_detail(id);
        }
    }

    fn ensure_list(&mut self) {
        let snapshot = self.store().list_snapshot();
        if let Some(list) = snapshot.value() {
            let count = list.len();
            if count != self.nav.entry_count {
                dispatch::<NavReducer>(&mut self.nav, NavIntent::EntriesLoaded { count });
                let active = self.nav.route.record().and_then(|id| self.entry_index(id));
                if let Some(index) = active {
                    dispatch::<NavReducer>(&mut self.nav, NavIntent::Highlight { index });
                }
            }
            self.gate.settle(&Dependency::List);
        }
        if snapshot.is_fresh() || self.list_error.is_some() {
            return;
        }
        if !self.begin_load(Dependency::List) {
            return;
        }

        let store = self.store().clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = store.warm_list().await.map(|_| ());
            let _ = tx.send(AppEvent::ListLoaded(result));
        });
    }

    fn ensure_detail(&mut self, id: RecordId) {
        let snapshot = self.store().detail_snapshot(&id);
        if snapshot.value().is_some() {
            self.gate.settle(&Dependency::Detail(id.clone()));
        }
        if snapshot.is_fresh() || self.detail_errors.contains_key(&id) {
            return;
        }
        // A pending press is about to replace this route and has cancelled
        // the other record fetches; reloading here would race it.
        if self.intents.pending_target().is_some() {
            return;
        }
        if !self.begin_load(Dependency::Detail(id.clone())) {
            return;
        }

        let store = self.store().clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = store.warm_detail(&id).await.map(|_| ());
            let _ = tx.send(AppEvent::DetailLoaded { id, result });
        });
    }

    /// Mark `dep` as loading. Returns false if it already is.
    fn begin_load(&mut self, dep: Dependency) -> bool {
        if !self.loading.insert(dep.clone()) {
            return false;
        }
        if self.first_pass {
            self.gate.register(dep);
        }
        true
    }
}
