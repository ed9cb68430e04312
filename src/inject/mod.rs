//! Stylesheet injection for advanced rules.
//!
//! Pseudo-selector rules, media rules and custom CSS cannot live in an
//! inline style. When a modifier holding any of them is materialized, it is
//! given a generated class name and its rules are injected once, as a
//! stylesheet fragment scoped to that class.
//!
//! - [`StyleRegistry`]: An explicit, append-only registry value
//! - [`StyleSink`]: The rendering surface that receives fragments
//! - [`inject_css`] and friends: The process-wide registry modifiers use
//!
//! The process-wide registry starts empty and lives until the process exits.
//! There is no eviction, so each distinct modifier that is materialized adds
//! one entry for good. Identifiers come from a single atomic counter and the
//! registry sits behind a mutex, so materializing from several threads never
//! duplicates or loses an injection. The sink runs outside that mutex.

mod global;
mod registry;
mod sink;

pub use global::{
    clear_style_sink, inject_css, injected_count, injected_css, is_injected, next_style_id,
    render_style_tags, set_style_sink,
};
pub use registry::StyleRegistry;
pub use sink::StyleSink;

/// Prefix of every generated class name.
pub const CLASS_PREFIX: &str = "modifier";

/// Attribute naming the generated class on rendered `<style>` elements.
pub const STYLE_ATTRIBUTE: &str = "data-app-style";
