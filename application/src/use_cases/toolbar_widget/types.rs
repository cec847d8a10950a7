//! Types shared by the toolbar widget use case.

use crate::ports::alert::{AlertPort, PassthroughTranslator, Translator};
use crate::ports::browser::BrowserPort;
use crate::ports::dom::DomPort;
use crate::ports::listing_fetcher::{FetchError, ListingFetcher};
use crate::ports::loader::{LoadingIndicator, NoLoader};
use crate::ports::scroll::{NoScroll, ScrollAnimator};
use std::sync::Arc;
use toolbar_domain::WidgetState;

/// Adapters the widget talks to.
#[derive(Clone)]
pub struct ToolbarPorts {
    pub dom: Arc<dyn DomPort>,
    pub browser: Arc<dyn BrowserPort>,
    pub fetcher: Arc<dyn ListingFetcher>,
    pub scroll: Arc<dyn ScrollAnimator>,
    pub loader: Arc<dyn LoadingIndicator>,
    pub alert: Arc<dyn AlertPort>,
    pub translator: Arc<dyn Translator>,
}

impl ToolbarPorts {
    /// Ports with an instant scroll, no loading indicator and untranslated
    /// messages.
    pub fn new(
        dom: Arc<dyn DomPort>,
        browser: Arc<dyn BrowserPort>,
        fetcher: Arc<dyn ListingFetcher>,
        alert: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            dom,
            browser,
            fetcher,
            scroll: Arc::new(NoScroll),
            loader: Arc::new(NoLoader),
            alert,
            translator: Arc::new(PassthroughTranslator),
        }
    }

    pub fn with_scroll(mut self, scroll: Arc<dyn ScrollAnimator>) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_loader(mut self, loader: Arc<dyn LoadingIndicator>) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }
}

/// Which page regions an applied refresh replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionUpdate {
    pub content: bool,
    pub sidebar: bool,
}

/// Terminal outcome of one interaction. Exactly one per triggered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Asynchronous mode off: the browser was sent to `url`
    Navigated { url: String },
    /// Refresh applied: address bar replaced with `url`, regions updated
    Applied { url: String, regions: RegionUpdate },
    /// Endpoint reported failure; `message` was shown when present
    Rejected { message: Option<String> },
    /// Transport failure, timeout or malformed response
    Failed { error: FetchError },
    /// A newer interaction was issued before this response arrived
    Superseded { sequence: u64 },
}

impl InteractionOutcome {
    /// The terminal state this outcome settles through before returning to
    /// idle. A superseded interaction has none: it goes straight back.
    pub fn terminal_state(&self) -> Option<WidgetState> {
        match self {
            InteractionOutcome::Navigated { .. } | InteractionOutcome::Applied { .. } => {
                Some(WidgetState::Updated)
            }
            InteractionOutcome::Rejected { .. } | InteractionOutcome::Failed { .. } => {
                Some(WidgetState::Failed)
            }
            InteractionOutcome::Superseded { .. } => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            InteractionOutcome::Applied { .. } | InteractionOutcome::Navigated { .. }
        )
    }
}
