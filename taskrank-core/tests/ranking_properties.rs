use chrono::NaiveDate;
use taskrank_core::{Board, Completion, Mood, NewTask, Priority, TaskId, TaskStore, rank, score};

const PRIORITIES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
const MOODS: [Mood; 3] = [Mood::Productive, Mood::Energetic, Mood::Relaxed];

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 31).unwrap()
}

/// Every priority x mood x time-fit x momentum combination, in a fixed order.
fn all_combinations() -> Vec<NewTask> {
    let mut out = Vec::new();
    for priority in PRIORITIES {
        for mood in MOODS {
            for fits in [true, false] {
                for momentum in [true, false] {
                    let minutes = if fits { 60 } else { 5 };
                    let prev = if momentum { vec![TaskId(1000)] } else { vec![] };
                    out.push(
                        NewTask::new(format!("{priority}/{mood}"), priority, due())
                            .with_description("twelve chars")
                            .with_time_available(minutes)
                            .with_mood(mood)
                            .with_previous_completed(prev),
                    );
                }
            }
        }
    }
    out
}

fn store_with_all() -> TaskStore {
    let mut store = TaskStore::new();
    for t in all_combinations() {
        store.add_task(t);
    }
    store
}

/// Bounds hold for every input combination.
#[test]
fn score_stays_within_priority_bounds() {
    let store = store_with_all();
    assert_eq!(store.len(), 36);

    for t in store.tasks() {
        let s = score(t);
        let (lo, hi) = match t.priority {
            Priority::High => (5, 11),
            Priority::Medium => (3, 9),
            Priority::Low => (1, 7),
        };
        assert!((lo..=hi).contains(&s), "{} scored {s}", t.title);
    }

    let scores: Vec<u32> = store.tasks().iter().map(score).collect();
    assert_eq!(scores.iter().max(), Some(&11));
    assert_eq!(scores.iter().min(), Some(&1));
}

#[test]
fn rank_is_a_sorted_permutation() {
    let store = store_with_all();
    let ranked = rank(store.tasks());
    assert_eq!(ranked.len(), store.len());

    let mut ids: Vec<TaskId> = ranked.iter().map(|t| t.id).collect();
    ids.sort();
    let mut expected: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    expected.sort();
    assert_eq!(ids, expected);

    for pair in ranked.windows(2) {
        assert!(score(pair[0]) >= score(pair[1]));
    }
}

#[test]
fn rank_is_idempotent_and_stable_on_ties() {
    let store = store_with_all();
    let first: Vec<TaskId> = rank(store.tasks()).iter().map(|t| t.id).collect();
    let second: Vec<TaskId> = rank(store.tasks()).iter().map(|t| t.id).collect();
    assert_eq!(first, second);

    // Within an equal-score run, ids (= insertion order) increase.
    let ranked = rank(store.tasks());
    for pair in ranked.windows(2) {
        if score(pair[0]) == score(pair[1]) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn worked_examples_rank_and_survive_completion() {
    let mut board = Board::default();
    let a = board
        .add(
            NewTask::new("A", Priority::High, due())
                .with_description("abcd")
                .with_time_available(10)
                .with_mood(Mood::Productive),
        )
        .outcome;
    let b = board
        .add(
            NewTask::new("B", Priority::Low, due())
                .with_description("a".repeat(20))
                .with_time_available(5)
                .with_mood(Mood::Relaxed)
                .with_previous_completed(vec![TaskId(77)]),
        )
        .outcome;

    assert_eq!(score(board.get(a).unwrap()), 10);
    assert_eq!(score(board.get(b).unwrap()), 2);
    assert_eq!(board.view().ids(), vec![a, b]);

    let published = board.complete(a);
    assert_eq!(published.outcome, Completion::Completed);
    assert_eq!(published.view.ids(), vec![a, b]);
    assert!(published.view.entries[0].completed);
    assert!(!published.view.entries[1].completed);
}

#[test]
fn storage_order_is_independent_of_display_order() {
    let mut store = TaskStore::new();
    let low = store.add_task(NewTask::new("low", Priority::Low, due()));
    let high = store.add_task(NewTask::new("high", Priority::High, due()));

    assert_eq!(rank(store.tasks())[0].id, high);
    let stored: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(stored, vec![low, high]);
}

#[test]
fn ranked_view_serializes_for_display() {
    let mut board = Board::default();
    board.add(NewTask::new("Write report", Priority::Medium, due()));
    let json = serde_json::to_value(board.view()).unwrap();

    let entry = &json["entries"][0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["priority"], "medium");
    assert_eq!(entry["due_date"], "2026-10-31");
    assert_eq!(entry["completed"], false);
    assert_eq!(entry["score"], 6);
}
