//! Integration tests for the download coordinator.
//!
//! These cover the first-sight notification contract (including racing
//! ingest calls), in-place progress overwrites, the uninstall safety rule,
//! and completion-driven registry pruning.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use parking_lot::Mutex;

use crate::installer::tests::MockInstaller;
use crate::locale::LanguageTag;

use super::*;

fn tag(s: &str) -> LanguageTag {
    LanguageTag::new(s).unwrap()
}

fn coordinator_with(installer: MockInstaller) -> (Arc<DownloadCoordinator>, Arc<MockInstaller>) {
    let installer = Arc::new(installer);
    let coordinator = Arc::new(DownloadCoordinator::new(
        Arc::clone(&installer) as Arc<dyn crate::installer::ModuleInstaller>
    ));
    (coordinator, installer)
}

/// Observer recording every notified tag.
#[derive(Default)]
struct RecordingObserver {
    started: Mutex<Vec<LanguageTag>>,
}

impl DownloadObserver for RecordingObserver {
    fn on_download_started(&self, tag: &LanguageTag) {
        self.started.lock().push(tag.clone());
    }
}

#[test]
fn test_first_ingest_notifies_each_observer_exactly_once() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    coordinator.subscribe(a.clone());
    coordinator.subscribe(b.clone());

    coordinator.ingest_progress(&tag("sw"), 0, 0);
    coordinator.ingest_progress(&tag("sw"), 100, 1000);
    coordinator.ingest_progress(&tag("sw"), 900, 1000);

    assert_eq!(*a.started.lock(), vec![tag("sw")]);
    assert_eq!(*b.started.lock(), vec![tag("sw")]);
}

#[test]
fn test_distinct_tags_notify_independently() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());
    let observer = Arc::new(RecordingObserver::default());
    coordinator.subscribe(observer.clone());

    coordinator.ingest_progress(&tag("sw"), 0, 10);
    coordinator.ingest_progress(&tag("am"), 0, 10);
    coordinator.ingest_progress(&tag("sw"), 5, 10);

    assert_eq!(*observer.started.lock(), vec![tag("sw"), tag("am")]);
    assert_eq!(coordinator.in_flight(), 2);
}

#[test]
fn test_racing_first_ingests_notify_exactly_once() {
    const RACERS: usize = 8;
    const ROUNDS: usize = 50;

    for round in 0..ROUNDS {
        let (coordinator, _) = coordinator_with(MockInstaller::default());
        let notified = Arc::new(AtomicUsize::new(0));

        struct CountingObserver(Arc<AtomicUsize>);
        impl DownloadObserver for CountingObserver {
            fn on_download_started(&self, _tag: &LanguageTag) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        coordinator.subscribe(Arc::new(CountingObserver(Arc::clone(&notified))));

        let race_tag = tag(&format!("race-{}", round));
        let barrier = Arc::new(Barrier::new(RACERS));
        let handles: Vec<_> = (0..RACERS)
            .map(|i| {
                let coordinator = Arc::clone(&coordinator);
                let barrier = Arc::clone(&barrier);
                let race_tag = race_tag.clone();
                thread::spawn(move || {
                    barrier.wait();
                    coordinator.ingest_progress(&race_tag, i as u64, 1000);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(notified.load(Ordering::SeqCst), 1, "round {}", round);
        assert!(coordinator.current_progress(&race_tag).is_some());
    }
}

#[test]
fn test_observer_sees_progress_at_notification_time() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());

    struct ProbingObserver {
        coordinator: Mutex<Option<Arc<DownloadCoordinator>>>,
        saw_progress: AtomicBool,
    }
    impl DownloadObserver for ProbingObserver {
        fn on_download_started(&self, tag: &LanguageTag) {
            let guard = self.coordinator.lock();
            let coordinator = guard.as_ref().expect("wired before ingest");
            if coordinator.current_progress(tag).is_some() {
                self.saw_progress.store(true, Ordering::SeqCst);
            }
        }
    }

    let observer = Arc::new(ProbingObserver {
        coordinator: Mutex::new(Some(Arc::clone(&coordinator))),
        saw_progress: AtomicBool::new(false),
    });
    coordinator.subscribe(observer.clone());

    coordinator.ingest_progress(&tag("hi"), 0, 0);

    assert!(observer.saw_progress.load(Ordering::SeqCst));
}

#[test]
fn test_progress_overwrites_without_new_notification() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());

    coordinator.ingest_progress(&tag("th"), 10, 100);
    let cell = coordinator.current_progress(&tag("th")).unwrap();
    assert_eq!(cell.snapshot().progress_bytes, 10);

    coordinator.ingest_progress(&tag("th"), 80, 120);
    // Same cell, mutated in place.
    let again = coordinator.current_progress(&tag("th")).unwrap();
    assert!(Arc::ptr_eq(&cell, &again));
    assert_eq!(cell.snapshot().progress_bytes, 80);
    assert_eq!(cell.snapshot().total_bytes, 120);
}

#[test]
fn test_start_download_short_circuits_when_installed() {
    let installed = tag("en");
    let (coordinator, installer) =
        coordinator_with(MockInstaller::with_installed([installed.clone()]));

    assert_eq!(
        coordinator.start_download(&installed),
        OperationResult::AlreadyInstalled
    );
    assert!(installer.install_requests().is_empty());
}

#[test]
fn test_start_download_enqueues_when_missing() {
    let (coordinator, installer) = coordinator_with(MockInstaller::default());
    let wanted = tag("pt-BR");

    assert_eq!(coordinator.start_download(&wanted), OperationResult::Started);
    assert_eq!(installer.install_requests(), vec![wanted]);
}

#[test]
fn test_uninstall_refused_for_last_language() {
    let only = tag("en");
    let (coordinator, installer) = coordinator_with(MockInstaller::with_installed([only.clone()]));

    assert_eq!(
        coordinator.request_uninstall(&only),
        OperationResult::LastLanguageProtected
    );
    assert!(installer.uninstall_requests().is_empty());
}

#[test]
fn test_uninstall_delegates_when_multiple_installed() {
    let keep = tag("en");
    let remove = tag("fr");
    let (coordinator, installer) =
        coordinator_with(MockInstaller::with_installed([keep, remove.clone()]));

    match coordinator.request_uninstall(&remove) {
        OperationResult::Accepted { note } => assert!(note.contains("fr")),
        other => panic!("expected Accepted, got {:?}", other),
    }
    assert_eq!(installer.uninstall_requests(), vec![remove]);
}

#[test]
fn test_unsubscribed_observer_stops_receiving() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());
    let observer = Arc::new(RecordingObserver::default());
    let handle: Arc<dyn DownloadObserver> = observer.clone();

    coordinator.subscribe(handle.clone());
    coordinator.ingest_progress(&tag("one"), 0, 0);
    coordinator.unsubscribe(&handle);
    coordinator.ingest_progress(&tag("two"), 0, 0);

    assert_eq!(*observer.started.lock(), vec![tag("one")]);
}

#[test]
fn test_unsubscribe_never_subscribed_is_noop() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());
    let stranger: Arc<dyn DownloadObserver> = Arc::new(RecordingObserver::default());

    coordinator.unsubscribe(&stranger);
}

#[test]
fn test_completion_prunes_confirmed_entry() {
    let (coordinator, installer) = coordinator_with(MockInstaller::default());
    let done = tag("it");

    coordinator.ingest_progress(&done, 500, 500);
    installer.mark_installed(&done);
    coordinator.ingest_completed(&done);

    assert!(coordinator.current_progress(&done).is_none());
    assert_eq!(coordinator.in_flight(), 0);
}

#[test]
fn test_completion_without_install_confirmation_keeps_entry() {
    let (coordinator, _) = coordinator_with(MockInstaller::default());
    let pending = tag("it");

    coordinator.ingest_progress(&pending, 500, 500);
    coordinator.ingest_completed(&pending);

    assert!(coordinator.current_progress(&pending).is_some());
}
