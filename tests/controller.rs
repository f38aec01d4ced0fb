#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use taskly::db::blob::{BlobStore, FileBlobStore, MemoryBlobStore};
    use taskly::db::tasks::{Tasks, TASKS_KEY};
    use taskly::libs::clock::ManualClock;
    use taskly::libs::controller::{AppState, Controller, Effect, Intent, StartupWarning};
    use taskly::libs::task::{FilterMode, Priority, SortMode, TaskId};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DataDirContext {
        temp_dir: TempDir,
    }

    impl TestContext for DataDirContext {
        fn setup() -> Self {
            DataDirContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    type TestApp = Controller<MemoryBlobStore, ManualClock>;

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 9, 3, 10, 0, 0).unwrap())
    }

    fn app() -> TestApp {
        open(MemoryBlobStore::new())
    }

    fn open(blobs: MemoryBlobStore) -> TestApp {
        let (app, warning) = Controller::open(blobs, clock(), AppState::default()).unwrap();
        assert!(warning.is_none());
        app
    }

    fn stored(app: &TestApp) -> Option<String> {
        app.blobs().get(TASKS_KEY).unwrap()
    }

    fn add(app: &mut TestApp, text: &str, priority: Priority) -> TaskId {
        app.handle_intent(Intent::add(text, priority)).unwrap();
        app.tasks().last().unwrap().id.clone()
    }

    #[test]
    fn test_defaults() {
        let app = app();
        assert_eq!(app.state().current_filter, FilterMode::All);
        assert_eq!(app.state().current_sort, SortMode::DateAdded);
        assert_eq!(app.state().editing_id, None);
        assert_eq!(app.counter(), "0 tasks left");
    }

    #[test]
    fn test_scenario_add_toggle_filter() {
        let mut app = app();
        let milk = add(&mut app, "Buy milk", Priority::High);
        add(&mut app, "Call mom", Priority::Low);
        assert_eq!(app.counter(), "2 tasks left");

        app.handle_intent(Intent::Toggle(milk)).unwrap();
        assert_eq!(app.counter(), "1 task left");

        app.handle_intent(Intent::SetFilter(FilterMode::Completed)).unwrap();
        assert_eq!(app.view().texts(), ["Buy milk"]);
    }

    #[test]
    fn test_add_empty_text_changes_nothing() {
        let mut app = app();
        let effects = app.handle_intent(Intent::add("", Priority::Medium)).unwrap();
        assert!(effects.is_empty());
        assert!(app.tasks().is_empty());
        assert_eq!(stored(&app), None);
    }

    #[test]
    fn test_add_effects_and_save() {
        let mut app = app();
        let effects = app.handle_intent(Intent::add("Buy milk", Priority::High)).unwrap();
        assert_eq!(effects, vec![Effect::Render, Effect::UpdateCounter, Effect::ClearInput]);
        assert!(stored(&app).unwrap().contains("Buy milk"));
    }

    #[test]
    fn test_scenario_priority_sort() {
        let mut app = app();
        add(&mut app, "X", Priority::Low);
        add(&mut app, "Y", Priority::High);
        app.handle_intent(Intent::SetSort(SortMode::Priority)).unwrap();
        assert_eq!(app.view().texts(), ["Y", "X"]);
    }

    #[test]
    fn test_scenario_clear_completed() {
        let mut app = app();
        let done = add(&mut app, "Done", Priority::Medium);
        add(&mut app, "Open", Priority::Medium);
        app.handle_intent(Intent::Toggle(done)).unwrap();

        let effects = app.handle_intent(Intent::ClearCompleted).unwrap();
        assert_eq!(effects, vec![Effect::Render, Effect::UpdateCounter]);
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "Open");
    }

    #[test]
    fn test_noop_mutations_do_not_save() {
        let mut app = app();
        add(&mut app, "Keep", Priority::Medium);
        let snapshot = stored(&app);

        let missing = TaskId::from("missing");
        assert!(app.handle_intent(Intent::Toggle(missing.clone())).unwrap().is_empty());
        assert!(app.handle_intent(Intent::Delete(missing)).unwrap().is_empty());
        assert!(app.handle_intent(Intent::ClearCompleted).unwrap().is_empty());
        assert_eq!(stored(&app), snapshot);
    }

    #[test]
    fn test_view_state_changes_are_not_persisted() {
        let mut app = app();
        add(&mut app, "Keep", Priority::Medium);
        let snapshot = stored(&app);

        assert_eq!(app.handle_intent(Intent::SetFilter(FilterMode::Active)).unwrap(), vec![Effect::Render]);
        assert_eq!(app.handle_intent(Intent::SetSort(SortMode::Alphabetical)).unwrap(), vec![Effect::Render]);
        assert_eq!(stored(&app), snapshot);
        assert_eq!(app.state().current_filter, FilterMode::Active);
        assert_eq!(app.state().current_sort, SortMode::Alphabetical);
    }

    #[test]
    fn test_edit_session_round_trip() {
        let mut app = app();
        let id = add(&mut app, "Draft", Priority::Low);

        let opened = app.handle_intent(Intent::StartEdit(id.clone())).unwrap();
        assert_eq!(
            opened,
            vec![Effect::OpenEditor {
                id: id.clone(),
                text: "Draft".to_string(),
                priority: Priority::Low,
            }]
        );
        assert_eq!(app.state().editing_id, Some(id.clone()));

        let effects = app.handle_intent(Intent::commit_edit("Final", Priority::High)).unwrap();
        assert_eq!(effects, vec![Effect::Render, Effect::CloseEditor]);
        assert_eq!(app.state().editing_id, None);

        let task = app.task(&id).unwrap();
        assert_eq!(task.text, "Final");
        assert_eq!(task.priority, Priority::High);
        assert!(stored(&app).unwrap().contains("Final"));
    }

    #[test]
    fn test_commit_edit_blank_keeps_session_open() {
        let mut app = app();
        let id = add(&mut app, "Draft", Priority::Low);
        app.handle_intent(Intent::StartEdit(id.clone())).unwrap();

        assert!(app.handle_intent(Intent::commit_edit("   ", Priority::High)).unwrap().is_empty());
        assert_eq!(app.task(&id).unwrap().text, "Draft");
        assert_eq!(app.state().editing_id, Some(id));
    }

    #[test]
    fn test_commit_edit_without_session_is_noop() {
        let mut app = app();
        let id = add(&mut app, "Draft", Priority::Low);
        assert!(app.handle_intent(Intent::commit_edit("Other", Priority::High)).unwrap().is_empty());
        assert_eq!(app.task(&id).unwrap().text, "Draft");
    }

    #[test]
    fn test_start_edit_unknown_id_is_noop() {
        let mut app = app();
        assert!(app.handle_intent(Intent::StartEdit(TaskId::from("missing"))).unwrap().is_empty());
        assert_eq!(app.state().editing_id, None);
    }

    #[test]
    fn test_cancel_edit_closes_session() {
        let mut app = app();
        let id = add(&mut app, "Draft", Priority::Low);
        app.handle_intent(Intent::StartEdit(id)).unwrap();
        assert_eq!(app.handle_intent(Intent::CancelEdit).unwrap(), vec![Effect::CloseEditor]);
        assert!(app.handle_intent(Intent::CancelEdit).unwrap().is_empty());
    }

    #[test]
    fn test_commit_after_task_deleted_closes_session() {
        let mut app = app();
        let id = add(&mut app, "Draft", Priority::Low);
        app.handle_intent(Intent::StartEdit(id.clone())).unwrap();
        app.handle_intent(Intent::Delete(id)).unwrap();

        let effects = app.handle_intent(Intent::commit_edit("Again", Priority::Low)).unwrap();
        assert_eq!(effects, vec![Effect::Render, Effect::CloseEditor]);
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_reopen_restores_saved_tasks() {
        let mut app = app();
        let id = add(&mut app, "Persist me", Priority::High);
        app.handle_intent(Intent::Toggle(id.clone())).unwrap();
        let blob = stored(&app).unwrap();

        let reopened = open(MemoryBlobStore::with_blob(TASKS_KEY, &blob));
        assert_eq!(reopened.tasks(), app.tasks());
        assert!(reopened.task(&id).unwrap().completed);
    }

    #[test]
    fn test_corrupt_storage_is_surfaced_and_preserved() {
        let blobs = MemoryBlobStore::with_blob(TASKS_KEY, "definitely not json");
        let (mut app, warning) = Controller::open(blobs, clock(), AppState::default()).unwrap();

        let Some(StartupWarning::CorruptData { backup_key, .. }) = warning else {
            panic!("expected a corrupt data warning");
        };
        assert!(app.tasks().is_empty());
        assert_eq!(app.blobs().get(&backup_key).unwrap().as_deref(), Some("definitely not json"));
        assert_eq!(app.blobs().get(TASKS_KEY).unwrap().as_deref(), Some("[]"));

        // A later save replaces the main key but leaves the backup alone.
        app.handle_intent(Intent::add("Fresh", Priority::Medium)).unwrap();
        assert_eq!(app.blobs().get(&backup_key).unwrap().as_deref(), Some("definitely not json"));
        assert_eq!(Tasks::new(app.blobs().clone()).load().unwrap().len(), 1);
    }

    #[test_context(DataDirContext)]
    #[test]
    fn test_corrupt_storage_recovered_once_across_reopens(ctx: &mut DataDirContext) {
        let mut seed = FileBlobStore::new(ctx.temp_dir.path());
        seed.set(TASKS_KEY, "garbage").unwrap();

        let (_, first) = Controller::open(FileBlobStore::new(ctx.temp_dir.path()), clock(), AppState::default()).unwrap();
        let Some(StartupWarning::CorruptData { backup_key, .. }) = first else {
            panic!("expected a corrupt data warning");
        };

        for _ in 0..2 {
            let (app, warning) = Controller::open(FileBlobStore::new(ctx.temp_dir.path()), clock(), AppState::default()).unwrap();
            assert!(warning.is_none());
            assert!(app.tasks().is_empty());
        }

        let backups: Vec<String> = std::fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("tasks.corrupt-"))
            .collect();
        assert_eq!(backups, vec![format!("{}.json", backup_key)]);
        assert_eq!(seed.get(&backup_key).unwrap().as_deref(), Some("garbage"));
        assert_eq!(seed.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_initial_state_is_honored() {
        let (app, _) = Controller::open(MemoryBlobStore::new(), clock(), AppState::new(FilterMode::Active, SortMode::Priority)).unwrap();
        let view = app.view();
        assert_eq!(view.filter, FilterMode::Active);
        assert_eq!(view.sort, SortMode::Priority);
    }
}
