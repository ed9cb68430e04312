//! The process-wide registry and identifier counter used by modifiers.

use log::trace;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::registry::StyleRegistry;
use super::sink::{self, StyleSink};
use super::CLASS_PREFIX;

static REGISTRY: Lazy<Mutex<StyleRegistry>> = Lazy::new(|| Mutex::new(StyleRegistry::new()));

static STYLE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn registry() -> MutexGuard<'static, StyleRegistry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Allocates the next generated class name: `modifier-1`, `modifier-2`, ...
///
/// The counter is process-wide and never reused.
pub fn next_style_id() -> String {
    let n = STYLE_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
    let id = format!("{}-{}", CLASS_PREFIX, n);
    trace!("allocated style id '{}'", id);
    id
}

/// Injects `css` under `id` into the process-wide registry, unless `id` is
/// already present. Returns true if this call injected it.
///
/// The installed sink, if any, is notified after the registry lock is
/// released.
pub fn inject_css(css: &str, id: &str) -> bool {
    let inserted = registry().insert_if_absent(id, css);
    if inserted {
        sink::deliver(id, css);
    }
    inserted
}

/// Installs the rendering surface that receives newly injected fragments.
///
/// Fragments injected before the call are not replayed to the new sink.
/// The sink may call back into this module.
pub fn set_style_sink(style_sink: impl StyleSink + 'static) {
    sink::install(Some(Box::new(style_sink)));
}

/// Removes any sink installed with [`set_style_sink`].
pub fn clear_style_sink() {
    sink::install(None);
}

/// True if a fragment for `id` has been injected in this process.
pub fn is_injected(id: &str) -> bool {
    registry().contains(id)
}

/// The injected text for `id`.
pub fn injected_css(id: &str) -> Option<String> {
    registry().css(id).map(str::to_string)
}

/// Number of fragments injected in this process.
pub fn injected_count() -> usize {
    registry().len()
}

/// Renders every fragment injected so far as `<style>` elements.
pub fn render_style_tags() -> String {
    registry().to_style_tags()
}
