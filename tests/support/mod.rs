#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use matrix_trend_chart::core::Viewport;
use matrix_trend_chart::render::{DEFAULT_CHART_ELEMENT_ID, SurfaceRegistry};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

/// Counts `ERROR` events emitted while installed.
#[derive(Debug, Clone, Default)]
pub struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` with a thread-local subscriber and returns the error-event count.
pub fn with_error_counter<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = ErrorCounter::default();
    let subscriber = Registry::default().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter.count())
}

pub fn page_surfaces() -> SurfaceRegistry {
    SurfaceRegistry::new()
        .with_surface(DEFAULT_CHART_ELEMENT_ID, Viewport::new(800, 400))
        .expect("register surface")
}
