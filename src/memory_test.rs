use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn store_save_then_load() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme"), None);
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
}

#[test]
fn unavailable_store_hides_values_and_rejects_writes() {
    let store = MemoryStore::with_value("theme", "light");
    store.set_available(false);
    assert_eq!(store.load("theme"), None);
    assert!(matches!(store.save("theme", "dark"), Err(ThemeError::Storage(_))));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

// =============================================================
// FixedScheme
// =============================================================

#[test]
fn scheme_counts_evaluations() {
    let scheme = FixedScheme::prefers_light();
    assert!(scheme.matches("(prefers-color-scheme: light)"));
    scheme.set_matches(false);
    assert!(!scheme.matches("(prefers-color-scheme: light)"));
    assert_eq!(scheme.evaluations(), 2);
}

// =============================================================
// MemoryDom
// =============================================================

#[test]
fn dom_root_classes_remove_then_add() {
    let dom = MemoryDom::new();
    dom.add_root_class("a");
    dom.add_root_class("b");
    dom.set_root_classes(&["a", "missing"], "c").unwrap();
    assert_eq!(dom.root_classes(), vec!["b".to_owned(), "c".to_owned()]);
}

#[test]
fn dom_set_visible_requires_element() {
    let dom = MemoryDom::with_elements(&["icon"]);
    assert_eq!(dom.visibility("icon"), None);
    dom.set_visible("icon", false).unwrap();
    assert_eq!(dom.visibility("icon"), Some(false));
    assert!(matches!(dom.set_visible("nope", true), Err(ThemeError::Dom(_))));
}

#[test]
fn dom_click_runs_registered_handlers() {
    let dom = MemoryDom::with_elements(&["btn"]);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    assert!(dom.on_click("btn", Box::new(move || counter.set(counter.get() + 1))).unwrap());
    assert_eq!(dom.click("btn"), 1);
    assert_eq!(dom.click("btn"), 1);
    assert_eq!(hits.get(), 2);
}

#[test]
fn dom_click_on_missing_element_registers_nothing() {
    let dom = MemoryDom::new();
    assert!(!dom.on_click("btn", Box::new(|| {})).unwrap());
    assert_eq!(dom.handler_count("btn"), 0);
    assert_eq!(dom.click("btn"), 0);
}

#[test]
fn page_dom_has_configured_elements() {
    let config = ThemeConfig::default();
    let dom = MemoryDom::page(&config);
    for id in ["theme-toggle", "theme-icon-light", "theme-icon-dark"] {
        assert!(dom.has_element(id), "missing {id}");
    }
}

// =============================================================
// ManualReadiness
// =============================================================

#[test]
fn loading_readiness_queues_until_fire() {
    let readiness = ManualReadiness::loading();
    let order = Rc::new(RefCell::new(Vec::new()));
    for n in 0..2 {
        let order = Rc::clone(&order);
        readiness.when_ready(Box::new(move || order.borrow_mut().push(n)));
    }
    assert!(order.borrow().is_empty());
    readiness.fire();
    assert_eq!(*order.borrow(), vec![0, 1]);

    // Once fired, later callbacks run immediately.
    let order_late = Rc::clone(&order);
    readiness.when_ready(Box::new(move || order_late.borrow_mut().push(9)));
    assert_eq!(*order.borrow(), vec![0, 1, 9]);
}

#[test]
fn ready_readiness_runs_immediately() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    ManualReadiness::ready().when_ready(Box::new(move || flag.set(true)));
    assert!(ran.get());
}
