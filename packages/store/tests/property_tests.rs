//! Property tests for classification, progress and persistence.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

use store::deadline::classify_at;
use store::{
    step_progress, AuthStore, MemoryStore, NewTask, Priority, RegisterForm, Step, Task, TaskStore,
};

fn base_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

// ─── Strategies ─────────────────────────────────────────────────────────────

fn arb_priority() -> impl Strategy<Value = Option<Priority>> {
    proptest::option::of(prop::sample::select(Priority::ALL.to_vec()))
}

fn arb_step() -> impl Strategy<Value = Step> {
    ("[a-zA-Z0-9 ]{1,20}", any::<bool>()).prop_map(|(text, completed)| Step { text, completed })
}

fn arb_task() -> impl Strategy<Value = Task> {
    (
        "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}",
        "[a-zA-Z0-9 ]{2,40}",
        proptest::option::of("[a-zA-Z0-9 .,!]{0,80}"),
        arb_priority(),
        proptest::option::of("2026-0[1-9]-[12][0-9]T[01][0-9]:[0-5][05]"),
        any::<bool>(),
        prop::collection::vec(arb_step(), 0..6),
        "[a-z]{1,8}@[a-z]{1,8}\\.com",
    )
        .prop_map(
            |(id, title, description, priority, deadline, completed, steps, owner_email)| Task {
                id,
                title,
                description,
                priority,
                deadline,
                completed,
                steps,
                owner_email,
            },
        )
}

proptest! {
    #[test]
    fn task_collection_json_round_trip(tasks in prop::collection::vec(arb_task(), 0..10)) {
        let json = serde_json::to_string(&tasks).unwrap();
        let decoded: Vec<Task> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, tasks);
    }

    #[test]
    fn urgency_never_rises_as_time_passes(offset_s in -86_400i64..(30 * 86_400), elapsed_s in 0i64..86_400) {
        let deadline = base_now() + TimeDelta::seconds(offset_s);
        let earlier = classify_at(deadline, base_now());
        let later = classify_at(deadline, base_now() + TimeDelta::seconds(elapsed_s));
        prop_assert!(later.urgency <= earlier.urgency);
    }

    #[test]
    fn only_open_critical_tasks_refresh(offset_s in -3_600i64..(10 * 86_400), completed in any::<bool>()) {
        let status = classify_at(base_now() + TimeDelta::seconds(offset_s), base_now());
        let live = status.refresh_interval(completed).is_some();
        prop_assert_eq!(live, !completed && offset_s > 0 && offset_s < 3_600);
    }

    #[test]
    fn progress_is_bounded(done in prop::collection::vec(any::<bool>(), 0..50)) {
        let steps: Vec<Step> = done
            .iter()
            .map(|&completed| Step { text: "s".into(), completed })
            .collect();
        let p = step_progress(&steps);
        prop_assert!(p.completed <= p.total);
        prop_assert!(p.percent <= 100);
        prop_assert_eq!(p.total, steps.len());
        if p.total > 0 {
            prop_assert_eq!(p.percent == 100, p.completed == p.total);
        } else {
            prop_assert_eq!(p.percent, 0);
        }
    }

    #[test]
    fn read_model_only_shows_own_tasks(owners in prop::collection::vec(0usize..3, 0..20)) {
        let substrate = MemoryStore::new();
        let emails = ["a@x.com", "b@x.com", "c@x.com"];
        let sessions: Vec<_> = emails
            .iter()
            .map(|email| {
                let mut auth = AuthStore::open(substrate.clone());
                auth.register(&RegisterForm::new("n", *email, "password", "password")).unwrap();
                auth.session().clone()
            })
            .collect();

        let mut tasks = TaskStore::open(substrate);
        for (i, owner) in owners.iter().enumerate() {
            tasks.add(&sessions[*owner], NewTask::titled(format!("task {i}")));
        }

        for (idx, session) in sessions.iter().enumerate() {
            let visible = tasks.visible(session);
            prop_assert_eq!(visible.len(), owners.iter().filter(|o| **o == idx).count());
            prop_assert!(visible.iter().all(|t| t.owner_email == emails[idx]));
        }
        prop_assert_eq!(tasks.all().len(), owners.len());
    }
}
