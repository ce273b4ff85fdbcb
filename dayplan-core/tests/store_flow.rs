use chrono::NaiveDate;

use dayplan_core::{
    Action, Category, CategoryFilter, FormField, NewTask, TaskForm, TaskId, TaskStats, TaskStore,
};

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn add_increases_count_by_one() {
    let mut store = TaskStore::new(jan(5));
    store.add(NewTask::new("First", jan(5)));
    let before = store.len();

    let id = store
        .dispatch(Action::Add(NewTask::new("Second", jan(6)).with_category(Category::Error)))
        .unwrap();

    assert_eq!(store.len(), before + 1);
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn update_missing_id_leaves_store_unchanged() {
    let mut store = TaskStore::new(jan(5));
    let id = store.add(NewTask::new("Keep me", jan(5)));
    let snapshot = store.tasks().to_vec();

    let mut stranger = store.get(id).unwrap().clone();
    stranger.id = TaskId(id.0 + 100);
    stranger.title = "Intruder".to_string();
    store.dispatch(Action::Update(stranger));

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn delete_removes_only_target() {
    let mut store = TaskStore::new(jan(5));
    let a = store.add(NewTask::new("A", jan(5)));
    let b = store.add(NewTask::new("B", jan(5)));
    let c = store.add(NewTask::new("C", jan(6)));

    store.dispatch(Action::Delete(b));

    let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn toggle_twice_restores_flag() {
    let mut store = TaskStore::new(jan(5));
    let id = store.add(NewTask::new("Flip", jan(5)));

    store.dispatch(Action::ToggleComplete(id));
    assert!(store.get(id).unwrap().completed);
    store.dispatch(Action::ToggleComplete(id));
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn completion_rate_of_nothing_is_zero() {
    let store = TaskStore::new(jan(5));
    let stats = TaskStats::compute(store.tasks(), store.filter_category());
    assert_eq!(stats.completion_rate(), 0);
}

#[test]
fn buy_milk_walkthrough() {
    let mut store = TaskStore::new(jan(5));
    let mut form = TaskForm::create(store.selected_date(), Category::Info, jan(5));
    for c in "Buy milk".chars() {
        form.input_char(c);
    }
    assert!(form.visible_error(FormField::Title).is_none());
    form.submit(&mut store).unwrap();

    let day = store.tasks_on(jan(5));
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].title, "Buy milk");
    assert_eq!(day[0].category.tag(), "INFO");
    assert!(!day[0].completed);

    let stats = TaskStats::compute(day.iter().copied(), CategoryFilter::All);
    assert_eq!(stats.total(), 1);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.completion_rate(), 0);
}

#[test]
fn one_of_two_done_is_fifty_percent() {
    let mut store = TaskStore::new(jan(5));
    let done = store.add(NewTask::new("Done", jan(5)));
    store.add(NewTask::new("Not yet", jan(5)));
    store.toggle_complete(done);

    let stats = TaskStats::compute(store.tasks_on(jan(5)), CategoryFilter::All);
    assert_eq!(stats.completion_rate(), 50);
}

#[test]
fn filter_reset_restores_all_categories() {
    let mut store = TaskStore::new(jan(5));
    store.add(NewTask::new("ok", jan(5)).with_category(Category::Success));
    store.add(NewTask::new("bad", jan(5)).with_category(Category::Error));

    store.dispatch(Action::SetFilterCategory(CategoryFilter::Only(Category::Error)));
    assert_eq!(TaskStats::compute(store.tasks(), store.filter_category()).total(), 1);

    store.dispatch(Action::SetFilterCategory(CategoryFilter::All));
    assert_eq!(TaskStats::compute(store.tasks(), store.filter_category()).total(), 2);
}
