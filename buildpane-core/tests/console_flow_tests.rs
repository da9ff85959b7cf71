//! End-to-end console flows
//!
//! Exercises the pieces the way a console page does: log in, gate
//! affordances on roles, bind a fetched collection to a list view,
//! paginate, reload on a build notification, log out.

use buildpane_core::prelude::*;
use chrono::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct BuildConfig {
    id: String,
    name: String,
}

fn fetch_build_configs(n: usize) -> Vec<BuildConfig> {
    (0..n).map(|i| BuildConfig { id: format!("bc-{}", i), name: format!("config {}", i) }).collect()
}

#[test]
fn detail_page_lifecycle() {
    let session = SessionRoles::new();
    let gate = VisibilityGate::new(Arc::new(session.clone()));

    // Not logged in yet: restricted affordances hidden, unrestricted shown
    assert!(!gate.requires("user"));
    assert!(gate.is_visible(None));

    session.login("alice", ["admin", "user"].into_iter().collect(), Duration::hours(8)).unwrap();
    assert!(gate.requires("admin"));
    assert!(gate.requires("user"));
    assert!(!gate.requires("superadmin"));

    // Bind the fetched collection to the page's list view
    let mut view = ListView::new()
        .with_display_fields(["name", "project", "buildStatus"])
        .with_page_size(10);
    view.bind(fetch_build_configs(25)).unwrap();

    let page = view.page().unwrap();
    assert_eq!(page.page_count, 3);
    assert_eq!(page.total_items, 25);
    assert_eq!(page.len(), 10);

    // Jump past the end: lands on the last page
    view.go_to_page(5);
    let page = view.page().unwrap();
    assert_eq!(page.page_index, 2);
    assert_eq!(page.len(), 5);
    assert!(!view.has_next());
    assert!(view.has_previous());

    // Logout tears the session down; the same gate now denies
    session.logout().unwrap();
    assert!(!gate.requires("admin"));
    assert!(gate.is_visible(None));
}

#[test]
fn reload_on_creation_notification() {
    let channel: EventChannel<BuildNotification> = EventChannel::new();
    let reloads = Arc::new(AtomicUsize::new(0));

    // The page subscribes for creation events and counts reload requests
    let counter = Arc::clone(&reloads);
    let subscription = channel.subscribe(move |event| {
        if event.event_type == BuildEventType::CreationSuccess {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let mut view = ListView::new().with_page_size(10);
    view.bind(fetch_build_configs(12)).unwrap();
    view.next_page();
    assert_eq!(view.page().unwrap().page_index, 1);

    // An external job finishes; a failure event does not trigger a reload
    channel.publish(&BuildNotification {
        event_type: BuildEventType::CreationError,
        entity_id: "bc-99".to_string(),
    });
    assert_eq!(reloads.load(Ordering::SeqCst), 0);

    channel.publish(&BuildNotification {
        event_type: BuildEventType::CreationSuccess,
        entity_id: "bc-100".to_string(),
    });
    assert_eq!(reloads.load(Ordering::SeqCst), 1);

    // The page reacts by refetching and rebinding; navigation resets
    view.bind(fetch_build_configs(13)).unwrap();
    let page = view.page().unwrap();
    assert_eq!(page.page_index, 0);
    assert_eq!(page.page_count, 2);

    // Page teardown drops the subscription; later events go nowhere
    drop(subscription);
    channel.publish(&BuildNotification {
        event_type: BuildEventType::CreationSuccess,
        entity_id: "bc-101".to_string(),
    });
    assert_eq!(reloads.load(Ordering::SeqCst), 1);
}

#[test]
fn config_drives_page_size_and_logging() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[paging]\ndefault_page_size = 5\n\n[logging]\nlevel = \"debug\"\n").unwrap();

    let config = BuildpaneConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    init_logging(&config.logging).unwrap();

    let mut view = ListView::from_config(&config.paging);
    view.bind(fetch_build_configs(11)).unwrap();
    assert_eq!(view.page().unwrap().page_count, 3);
}

#[test]
fn expired_session_hides_gated_elements() {
    let session = SessionRoles::new();
    let gate = VisibilityGate::new(Arc::new(session.clone()));

    session.login("bob", ["user"].into_iter().collect(), Duration::seconds(-1)).unwrap();
    assert!(!session.is_authenticated());
    assert!(!gate.requires("user"));
}
