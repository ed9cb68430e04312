//! Delivery of injected fragments to an external rendering surface.
//!
//! The sink is called with no lock held, so it may read the registry or
//! materialize further modifiers. Fragments injected while a delivery is in
//! progress, from the sink itself or from another thread, are queued and
//! handed over by the delivering thread in injection order.

use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A rendering surface that receives stylesheet fragments as they are injected.
///
/// Any `FnMut(&str, &str)` closure taking `(id, css)` is a sink.
pub trait StyleSink: Send {
    /// Appends one fragment, identified by the generated class name.
    fn append(&mut self, id: &str, css: &str);
}

impl<F> StyleSink for F
where
    F: FnMut(&str, &str) + Send,
{
    fn append(&mut self, id: &str, css: &str) {
        self(id, css)
    }
}

#[derive(Default)]
struct SinkSlot {
    sink: Option<Box<dyn StyleSink>>,
    /// Bumped whenever the sink is replaced or cleared.
    generation: u64,
    delivering: bool,
    pending: VecDeque<(String, String)>,
}

static SINK: Lazy<Mutex<SinkSlot>> = Lazy::new(|| Mutex::new(SinkSlot::default()));

fn sink_slot() -> MutexGuard<'static, SinkSlot> {
    SINK.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(super) fn install(sink: Option<Box<dyn StyleSink>>) {
    let mut slot = sink_slot();
    if sink.is_some() {
        debug!("installing custom style sink");
    }
    slot.sink = sink;
    slot.generation += 1;
    slot.pending.clear();
}

/// Resets the delivery state if a sink panics mid-delivery.
struct DeliveryGuard;

impl Drop for DeliveryGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut slot = sink_slot();
            slot.delivering = false;
            slot.pending.clear();
        }
    }
}

/// Hands one newly injected fragment to the installed sink, if any.
pub(super) fn deliver(id: &str, css: &str) {
    let mut slot = sink_slot();
    if slot.delivering {
        trace!("queueing stylesheet '{}' for the sink", id);
        slot.pending.push_back((id.to_string(), css.to_string()));
        return;
    }
    if slot.sink.is_none() {
        return;
    }

    slot.delivering = true;
    slot.pending.push_back((id.to_string(), css.to_string()));
    let _unwind = DeliveryGuard;
    loop {
        let Some((id, css)) = slot.pending.pop_front() else {
            break;
        };
        let Some(mut sink) = slot.sink.take() else {
            slot.pending.clear();
            break;
        };
        let generation = slot.generation;
        drop(slot);

        sink.append(&id, &css);

        slot = sink_slot();
        if slot.generation == generation {
            slot.sink = Some(sink);
        }
    }
    slot.delivering = false;
}
