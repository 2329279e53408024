use folio_core::{
    ContentDocument, ContentStore, ContentStoreConfig, HomeSection, MemorySlotStore, SectionKey,
    SectionUpdate, SectionValue, Skill, SlotStore, StoreError, StoreResult, CONTENT_SLOT_KEY,
};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Counts slot writes so the debounce coalescing contract is observable.
#[derive(Default)]
struct CountingStore {
    inner: MemorySlotStore,
    writes: AtomicUsize,
}

impl CountingStore {
    fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SlotStore for CountingStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.inner.remove_slot(key)
    }
}

/// Blocks writes until released so a commit can be held in flight.
struct GatedStore {
    inner: MemorySlotStore,
    write_entered: AtomicBool,
    released: Mutex<bool>,
    release_signal: Condvar,
}

impl GatedStore {
    fn new() -> Self {
        Self {
            inner: MemorySlotStore::new(),
            write_entered: AtomicBool::new(false),
            released: Mutex::new(false),
            release_signal: Condvar::new(),
        }
    }

    fn write_in_flight(&self) -> bool {
        self.write_entered.load(Ordering::SeqCst)
    }

    fn release_writes(&self) {
        *self.released.lock() = true;
        self.release_signal.notify_all();
    }
}

impl SlotStore for GatedStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.write_entered.store(true, Ordering::SeqCst);
        let mut released = self.released.lock();
        while !*released {
            self.release_signal.wait(&mut released);
        }
        drop(released);
        self.inner.write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.inner.remove_slot(key)
    }
}

/// Fails configured operations to exercise the swallow-and-log paths.
struct FlakyStore {
    inner: MemorySlotStore,
    fail_reads: bool,
    fail_writes: bool,
    write_attempts: AtomicUsize,
}

impl FlakyStore {
    fn failing_reads() -> Self {
        Self {
            inner: MemorySlotStore::new(),
            fail_reads: true,
            fail_writes: false,
            write_attempts: AtomicUsize::new(0),
        }
    }

    fn failing_writes() -> Self {
        Self {
            inner: MemorySlotStore::new(),
            fail_reads: false,
            fail_writes: true,
            write_attempts: AtomicUsize::new(0),
        }
    }

    fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }
}

fn store_failure() -> StoreError {
    StoreError::Sqlite(rusqlite::Error::InvalidQuery)
}

impl SlotStore for FlakyStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads {
            return Err(store_failure());
        }
        self.inner.read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(store_failure());
        }
        self.inner.write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.inner.remove_slot(key)
    }
}

fn short_quiet() -> ContentStoreConfig {
    ContentStoreConfig {
        quiet_period: Duration::from_millis(50),
    }
}

fn home(title: &str) -> SectionValue {
    SectionValue::Home(HomeSection {
        title: title.to_string(),
        subtitle: "Role".to_string(),
        description: "Pitch".to_string(),
    })
}

#[test]
fn loads_default_document_when_slot_is_absent() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let content = ContentStore::new(store);

    assert_eq!(*content.document(), ContentDocument::default_document());
}

#[test]
fn loads_persisted_document_when_present() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());

    let mut persisted = ContentDocument::default_document();
    persisted.home.title = "Persisted Name".to_string();
    store
        .write_slot(CONTENT_SLOT_KEY, &serde_json::to_string(&persisted).unwrap())
        .unwrap();

    let content = ContentStore::new(store);
    assert_eq!(*content.document(), persisted);
}

#[test]
fn falls_back_to_default_on_invalid_json() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    store
        .write_slot(CONTENT_SLOT_KEY, "{not valid json")
        .unwrap();

    let content = ContentStore::new(store);
    assert_eq!(*content.document(), ContentDocument::default_document());
}

#[test]
fn replace_update_changes_only_the_named_section() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let mut content = ContentStore::with_config(store, short_quiet());
    let before = content.document().clone();

    content.update_section(SectionUpdate::replace(home("Edited Name")));

    let after = content.document();
    assert_eq!(after.home.title, "Edited Name");
    assert_eq!(after.about, before.about);
    assert_eq!(after.skills, before.skills);
    assert_eq!(after.projects, before.projects);
    assert_eq!(after.experience, before.experience);
    assert_eq!(after.contact, before.contact);
}

#[test]
fn transform_update_sees_the_current_section_value() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let mut content = ContentStore::with_config(store, short_quiet());
    let skill_count = content.document().skills.len();

    content.update_section(SectionUpdate::transform(SectionKey::Skills, |value| {
        let SectionValue::Skills(mut skills) = value else {
            panic!("transform received wrong section payload");
        };
        skills.push(Skill {
            id: 9_999,
            name: "Debugging".to_string(),
            level: 80,
            category: "Engineering".to_string(),
        });
        SectionValue::Skills(skills)
    }));

    let skills = &content.document().skills;
    assert_eq!(skills.len(), skill_count + 1);
    assert_eq!(skills.last().unwrap().name, "Debugging");
}

#[test]
fn edit_burst_coalesces_into_one_persisted_write() {
    let counting = Arc::new(CountingStore::default());
    let store: Arc<dyn SlotStore> = counting.clone();
    let mut content = ContentStore::with_config(store, short_quiet());

    for round in 0..5 {
        content.update_section(SectionUpdate::replace(home(&format!("Draft {round}"))));
    }

    sleep(Duration::from_millis(500));

    assert_eq!(counting.write_count(), 1);
    let raw = counting.read_slot(CONTENT_SLOT_KEY).unwrap().unwrap();
    let persisted: ContentDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.home.title, "Draft 4");
}

#[test]
fn autosave_runs_while_edit_session_is_inactive() {
    let counting = Arc::new(CountingStore::default());
    let store: Arc<dyn SlotStore> = counting.clone();
    let mut content = ContentStore::with_config(store, short_quiet());

    assert!(!content.edit_session_active());
    content.update_section(SectionUpdate::replace(home("Saved Anyway")));

    sleep(Duration::from_millis(500));
    assert_eq!(counting.write_count(), 1);
}

#[test]
fn edit_session_flag_toggles_without_touching_the_document() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let mut content = ContentStore::new(store);
    let before = content.document().clone();

    content.set_edit_session_active(true);
    assert!(content.edit_session_active());
    content.set_edit_session_active(false);
    assert!(!content.edit_session_active());

    assert_eq!(*content.document(), before);
}

#[test]
fn reset_restores_default_and_erases_the_slot() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let mut content = ContentStore::with_config(Arc::clone(&store), short_quiet());

    content.update_section(SectionUpdate::replace(home("To Be Discarded")));
    sleep(Duration::from_millis(500));
    assert!(store.read_slot(CONTENT_SLOT_KEY).unwrap().is_some());

    content.reset();

    assert_eq!(*content.document(), ContentDocument::default_document());
    assert_eq!(store.read_slot(CONTENT_SLOT_KEY).unwrap(), None);
}

#[test]
fn reset_cancels_a_still_pending_write() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let mut content = ContentStore::with_config(
        Arc::clone(&store),
        ContentStoreConfig {
            quiet_period: Duration::from_millis(400),
        },
    );

    content.update_section(SectionUpdate::replace(home("Never Persisted")));
    content.reset();

    // Wait past the quiet period; the cancelled write must not land.
    sleep(Duration::from_millis(1_000));
    assert_eq!(store.read_slot(CONTENT_SLOT_KEY).unwrap(), None);
}

#[test]
fn reset_erases_even_when_a_commit_is_already_in_flight() {
    let gated = Arc::new(GatedStore::new());
    let store: Arc<dyn SlotStore> = gated.clone();
    let mut content = ContentStore::with_config(store, short_quiet());

    content.update_section(SectionUpdate::replace(home("Pre Reset")));

    // Hold the commit open once the quiet period elapses.
    let deadline = Instant::now() + Duration::from_secs(5);
    while !gated.write_in_flight() {
        assert!(Instant::now() < deadline, "commit never started");
        sleep(Duration::from_millis(5));
    }

    // Let the blocked commit finish while reset is waiting on the worker.
    let releaser = {
        let gated = Arc::clone(&gated);
        thread::spawn(move || {
            sleep(Duration::from_millis(100));
            gated.release_writes();
        })
    };

    content.reset();
    releaser.join().unwrap();

    assert_eq!(*content.document(), ContentDocument::default_document());
    assert_eq!(gated.read_slot(CONTENT_SLOT_KEY).unwrap(), None);
}

#[test]
fn read_error_at_startup_falls_back_to_the_default_document() {
    let store: Arc<dyn SlotStore> = Arc::new(FlakyStore::failing_reads());
    let content = ContentStore::new(store);

    assert_eq!(*content.document(), ContentDocument::default_document());
}

#[test]
fn write_failure_is_swallowed_and_never_retried() {
    let flaky = Arc::new(FlakyStore::failing_writes());
    let store: Arc<dyn SlotStore> = flaky.clone();
    let mut content = ContentStore::with_config(store, short_quiet());

    content.update_section(SectionUpdate::replace(home("Kept In Memory")));
    sleep(Duration::from_millis(500));

    // The in-memory document stays authoritative; the failed write gets no
    // retry and nothing lands in the slot.
    assert_eq!(content.document().home.title, "Kept In Memory");
    assert_eq!(flaky.write_attempts(), 1);
    assert_eq!(flaky.read_slot(CONTENT_SLOT_KEY).unwrap(), None);
}

#[test]
fn dropping_the_store_discards_an_unsettled_write() {
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());

    {
        let mut content = ContentStore::with_config(
            Arc::clone(&store),
            ContentStoreConfig {
                quiet_period: Duration::from_secs(30),
            },
        );
        content.update_section(SectionUpdate::replace(home("Lost On Restart")));
    }

    assert_eq!(store.read_slot(CONTENT_SLOT_KEY).unwrap(), None);
}
