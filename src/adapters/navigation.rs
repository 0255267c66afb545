use crate::domain::ports::Navigator;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Redirect(String),
}

impl NavigationEvent {
    pub fn route(&self) -> &str {
        match self {
            NavigationEvent::Push(route) | NavigationEvent::Redirect(route) => route,
        }
    }
}

/// Keeps every navigation in order. The CLI reads the last route to decide
/// which screen to show next.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<NavigationEvent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<NavigationEvent> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Events recorded after the first `start` ones.
    pub fn history_since(&self, start: usize) -> Vec<NavigationEvent> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .skip(start)
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<NavigationEvent> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }

    pub fn current_route(&self) -> Option<String> {
        self.last().map(|event| event.route().to_string())
    }

    fn record(&self, event: NavigationEvent) {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &str) {
        tracing::debug!("🧭 Navigating to {}", route);
        self.record(NavigationEvent::Push(route.to_string()));
    }

    fn redirect(&self, route: &str) {
        tracing::info!("🧭 Redirecting to {}", route);
        self.record(NavigationEvent::Redirect(route.to_string()));
    }
}
