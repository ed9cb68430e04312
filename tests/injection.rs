use modifier::inject::{self, StyleRegistry, CLASS_PREFIX, STYLE_ATTRIBUTE};
use modifier::prelude::*;
use modifier::style_map;
use serial_test::serial;
use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[test]
fn test_generated_ids_are_unique_and_prefixed() {
    let a = inject::next_style_id();
    let b = inject::next_style_id();

    assert_ne!(a, b);
    assert!(a.starts_with(&format!("{}-", CLASS_PREFIX)));
    let n: u64 = a[CLASS_PREFIX.len() + 1..].parse().unwrap();
    assert!(n >= 1);
}

#[test]
#[serial]
fn test_inject_css_ignores_repeated_id() {
    let id = inject::next_style_id();
    assert!(inject::inject_css(".a { color: red }", &id));
    assert!(!inject::inject_css(".a { color: blue }", &id));
    assert_eq!(inject::injected_css(&id).as_deref(), Some(".a { color: red }"));
}

#[test]
#[serial]
fn test_sink_receives_each_fragment_once() {
    let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    inject::set_style_sink(move |id: &str, css: &str| {
        sink.lock().unwrap().push((id.to_string(), css.to_string()));
    });

    let m = modifier::layout().focus(style_map! { "outline" => "none" });
    let first = m.to_props();
    let second = m.to_props();
    inject::clear_style_sink();

    assert_eq!(first.class_name, second.class_name);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, first.class_name);
    assert_eq!(seen[0].1, format!(".{}:focus {{ outline: none }}\n", first.class_name));
}

/// Runs `f` on another thread and fails instead of hanging if it never returns.
fn within_timeout<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(Duration::from_secs(5))
        .expect("materialization did not return")
}

#[test]
#[serial]
fn test_sink_can_read_registry() {
    let seen: Arc<Mutex<Vec<(String, bool, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    inject::set_style_sink(move |id: &str, _css: &str| {
        let entry = (id.to_string(), inject::is_injected(id), inject::injected_count());
        sink.lock().unwrap().push(entry);
    });

    let props = within_timeout(|| {
        modifier::layout()
            .hover(style_map! { "color" => "red" })
            .to_props()
    });
    let tags = within_timeout(inject::render_style_tags);
    inject::clear_style_sink();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, props.class_name);
    assert!(seen[0].1);
    assert!(seen[0].2 >= 1);
    assert!(tags.contains(&props.class_name));
}

#[test]
#[serial]
fn test_sink_can_materialize_other_modifiers() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let nested_done = Arc::new(Mutex::new(false));
    let nested_flag = Arc::clone(&nested_done);
    inject::set_style_sink(move |id: &str, _css: &str| {
        sink.lock().unwrap().push(id.to_string());
        let mut done = nested_flag.lock().unwrap();
        if !*done {
            *done = true;
            drop(done);
            let _ = modifier::layout()
                .focus(style_map! { "outline" => "none" })
                .to_props();
        }
    });

    let outer = within_timeout(|| {
        modifier::layout()
            .active(style_map! { "opacity" => 0.8 })
            .to_props()
    });
    inject::clear_style_sink();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], outer.class_name);
    assert_ne!(seen[1], outer.class_name);
    assert!(inject::is_injected(&seen[1]));
}

#[test]
#[serial]
fn test_render_style_tags_includes_injected_fragment() {
    let props = modifier::advanced_design()
        .custom_css("& > li { list-style: none }")
        .to_props();

    let tags = inject::render_style_tags();
    let expected = format!(
        "<style {}=\"{id}\">.{id} > li {{ list-style: none }}</style>\n",
        STYLE_ATTRIBUTE,
        id = props.class_name
    );
    assert!(tags.contains(&expected));
}

#[test]
#[serial]
fn test_concurrent_materialization_injects_each_once() {
    let before = inject::injected_count();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let m = modifier::layout().hover(style_map! { "zIndex" => i });
                let first = m.to_props().class_name;
                let second = m.to_props().class_name;
                assert_eq!(first, second);
                first
            })
        })
        .collect();

    let ids: HashSet<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(ids.len(), 8);
    assert_eq!(inject::injected_count(), before + 8);
    assert!(ids.iter().all(|id| inject::is_injected(id)));
}

#[test]
fn test_explicit_registry_is_independent() {
    let mut registry = StyleRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.insert_if_absent("x-1", ".x-1 { color: red }"));

    assert!(registry.contains("x-1"));
    assert!(!inject::is_injected("x-1"));
}
