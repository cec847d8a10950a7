//! Headless page: a DOM and browser stand-in over static HTML.
//!
//! Lets the toolbar widget run outside a browser (CLI simulation and
//! end-to-end tests). There is no layout engine: an element's top offset
//! comes from its `data-offset-top` attribute and defaults to zero.
//! Element handles stay valid until the element itself is removed or
//! replaced.

use super::document::{Edit, IdAllocator, Snapshot};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use toolbar_application::{BrowserPort, DomPort, LoadingIndicator, ScrollAnimator};
use toolbar_domain::{ControlEvent, ElementId, ElementKind, Easing, EventKind};
use tracing::{debug, warn};

const OFFSET_TOP_ATTR: &str = "data-offset-top";

#[derive(Error, Debug)]
pub enum HeadlessPageError {
    #[error("Failed to read page {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No element matches '{0}'")]
    NoMatch(String),

    #[error("Element {0} is not a selection list")]
    NotSelectList(ElementId),

    #[error("Element {element} has no option '{value}'")]
    NoSuchOption { element: ElementId, value: String },
}

#[derive(Debug, Default)]
struct PageState {
    source: String,
    ids: IdAllocator,
    url: String,
    history: Vec<String>,
    navigations: Vec<String>,
    bindings: BTreeMap<(ElementId, String), EventKind>,
    selections: HashMap<ElementId, String>,
    notifications: Vec<(ElementId, String)>,
    scroll_top: i64,
    loading: bool,
}

impl PageState {
    fn snapshot(&self) -> Snapshot {
        Snapshot::parse(&self.source)
    }

    fn apply(&mut self, element: ElementId, edit: Edit<'_>) {
        let Some(source) = self.snapshot().edit(element, edit, &mut self.ids) else {
            warn!(%element, "edit on unknown element ignored");
            return;
        };
        self.source = source;
        self.prune();
    }

    /// Drop handlers and selections of elements an edit took away.
    fn prune(&mut self) {
        let live = self.snapshot().ids();
        self.bindings.retain(|(id, _), _| live.contains(id));
        self.selections.retain(|id, _| live.contains(id));
    }
}

/// In-memory page implementing [`DomPort`], [`BrowserPort`] and
/// [`LoadingIndicator`].
pub struct HeadlessPage {
    state: Mutex<PageState>,
}

impl HeadlessPage {
    pub fn load(html: &str, url: &str) -> Self {
        let mut ids = IdAllocator::default();
        let source = Snapshot::parse(html).stamped(&mut ids, true);
        Self {
            state: Mutex::new(PageState {
                source,
                ids,
                url: url.to_string(),
                ..PageState::default()
            }),
        }
    }

    pub fn from_file(path: &Path, url: &str) -> Result<Self, HeadlessPageError> {
        let html = std::fs::read_to_string(path).map_err(|source| HeadlessPageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::load(&html, url))
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn select(&self, selector: &str, within: Option<ElementId>) -> Vec<ElementId> {
        match self.state().snapshot().select(selector, within) {
            Ok(elements) => elements,
            Err(e) => {
                warn!(error = %e, "selector query failed");
                Vec::new()
            }
        }
    }

    /// First element matching `selector` anywhere on the page.
    pub fn first(&self, selector: &str) -> Result<ElementId, HeadlessPageError> {
        self.state()
            .snapshot()
            .select(selector, None)?
            .into_iter()
            .next()
            .ok_or_else(|| HeadlessPageError::NoMatch(selector.to_string()))
    }

    /// Elements under `root` matching `selector`, surfacing selector errors.
    pub fn find(&self, root: ElementId, selector: &str) -> Result<Vec<ElementId>, HeadlessPageError> {
        self.state().snapshot().select(selector, Some(root))
    }

    /// Choose `value` in a selection list, as a visitor would.
    pub fn choose(&self, element: ElementId, value: &str) -> Result<(), HeadlessPageError> {
        let mut state = self.state();
        let snapshot = state.snapshot();
        let select = snapshot
            .element(element)
            .filter(|e| e.value().name() == "select")
            .ok_or(HeadlessPageError::NotSelectList(element))?;
        let known = select
            .descendants()
            .filter_map(scraper::ElementRef::wrap)
            .filter(|e| e.value().name() == "option")
            .any(|option| option_value(&option) == value);
        if !known {
            return Err(HeadlessPageError::NoSuchOption {
                element,
                value: value.to_string(),
            });
        }
        state.selections.insert(element, value.to_string());
        Ok(())
    }

    /// The event a visitor interaction with `element` produces, if a
    /// handler in `namespace` listens for it.
    pub fn trigger(&self, element: ElementId, namespace: &str) -> Option<ControlEvent> {
        let state = self.state();
        state
            .bindings
            .get(&(element, namespace.to_string()))
            .map(|event| ControlEvent::new(element, *event))
    }

    pub fn is_bound(&self, element: ElementId, namespace: &str) -> bool {
        self.state()
            .bindings
            .contains_key(&(element, namespace.to_string()))
    }

    /// Current page source.
    pub fn html(&self) -> String {
        self.state().snapshot().html()
    }

    /// Inner HTML of every element matching `selector`.
    pub fn region_html(&self, selector: &str) -> Vec<String> {
        let state = self.state();
        let snapshot = state.snapshot();
        snapshot
            .select(selector, None)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| snapshot.inner_html(id))
            .collect()
    }

    /// URLs written with history replacement, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state().history.clone()
    }

    /// Full navigations requested, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.state().navigations.clone()
    }

    pub fn notifications(&self) -> Vec<(ElementId, String)> {
        self.state().notifications.clone()
    }

    pub fn scroll_top(&self) -> i64 {
        self.state().scroll_top
    }

    pub fn set_scroll_top(&self, top: i64) {
        self.state().scroll_top = top.max(0);
    }

    /// Whether the loading indicator is currently shown.
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }
}

fn option_value(option: &scraper::ElementRef<'_>) -> String {
    match option.value().attr("value") {
        Some(value) => value.to_string(),
        None => option.text().collect::<String>().trim().to_string(),
    }
}

impl DomPort for HeadlessPage {
    fn find_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        self.select(selector, Some(root))
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.select(selector, None)
    }

    fn element_kind(&self, element: ElementId) -> ElementKind {
        let state = self.state();
        let snapshot = state.snapshot();
        match snapshot.element(element) {
            Some(e) if e.value().name() == "select" => ElementKind::SelectList,
            _ => ElementKind::Clickable,
        }
    }

    fn selected_value(&self, element: ElementId) -> Option<String> {
        let state = self.state();
        if let Some(value) = state.selections.get(&element) {
            return Some(value.clone());
        }
        let snapshot = state.snapshot();
        let select = snapshot.element(element)?;
        let options: Vec<_> = select
            .descendants()
            .filter_map(scraper::ElementRef::wrap)
            .filter(|e| e.value().name() == "option")
            .collect();
        options
            .iter()
            .find(|o| o.value().attr("selected").is_some())
            .or_else(|| options.first())
            .map(option_value)
    }

    fn data_value(&self, element: ElementId) -> Option<String> {
        let state = self.state();
        let snapshot = state.snapshot();
        snapshot
            .element(element)?
            .value()
            .attr("data-value")
            .map(str::to_string)
    }

    fn bind(&self, element: ElementId, event: EventKind, namespace: &str) -> bool {
        let mut state = self.state();
        let key = (element, namespace.to_string());
        if state.bindings.contains_key(&key) {
            return false;
        }
        state.bindings.insert(key, event);
        true
    }

    fn unbind(&self, element: ElementId, namespace: &str) {
        self.state()
            .bindings
            .remove(&(element, namespace.to_string()));
    }

    fn remove(&self, element: ElementId) {
        self.state().apply(element, Edit::Remove);
    }

    fn empty(&self, element: ElementId) {
        self.state().apply(element, Edit::ReplaceChildren(""));
    }

    fn set_inner_html(&self, element: ElementId, html: &str) {
        self.state().apply(element, Edit::ReplaceChildren(html));
    }

    fn offset_top(&self, element: ElementId) -> Option<i64> {
        let state = self.state();
        let snapshot = state.snapshot();
        let el = snapshot.element(element)?;
        Some(
            el.value()
                .attr(OFFSET_TOP_ATTR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        )
    }

    fn dispatch(&self, element: ElementId, event_name: &str) {
        debug!(%element, event_name, "page notification");
        self.state()
            .notifications
            .push((element, event_name.to_string()));
    }
}

impl BrowserPort for HeadlessPage {
    fn replace_url(&self, url: &str) {
        let mut state = self.state();
        state.url = url.to_string();
        state.history.push(url.to_string());
    }

    fn navigate(&self, url: &str) {
        let mut state = self.state();
        state.url = url.to_string();
        state.navigations.push(url.to_string());
    }

    fn current_url(&self) -> String {
        self.state().url.clone()
    }
}

impl LoadingIndicator for HeadlessPage {
    fn show(&self) {
        debug!("loader shown");
        self.state().loading = true;
    }

    fn hide(&self) {
        debug!("loader hidden");
        self.state().loading = false;
    }
}

/// Scroll animator stepping the headless page's scroll position frame by
/// frame along the easing curve.
pub struct FrameScroll {
    page: Arc<HeadlessPage>,
    frame: Duration,
}

impl FrameScroll {
    /// About 60 frames per second.
    pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

    pub fn new(page: Arc<HeadlessPage>) -> Self {
        Self {
            page,
            frame: Self::DEFAULT_FRAME,
        }
    }

    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }
}

#[async_trait]
impl ScrollAnimator for FrameScroll {
    async fn animate_to(&self, target_px: i64, duration: Duration, easing: Easing) {
        let from = self.page.scroll_top();
        let frames = (duration.as_millis() / self.frame.as_millis().max(1)) as u32;
        if frames == 0 {
            self.page.set_scroll_top(target_px);
            return;
        }
        for frame in 1..=frames {
            tokio::time::sleep(self.frame).await;
            let t = f64::from(frame) / f64::from(frames);
            self.page.set_scroll_top(easing.position(from, target_px, t));
        }
    }
}
