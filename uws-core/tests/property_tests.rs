//! Property tests for the filter pipeline and job documents.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use uws_core::domain::{ExecutionPhase, Job, JobList, JobResult, Owner};
use uws_core::filter::{AfterFilter, JobFilter, PhaseFilter, list_jobs};
use uws_core::json::{job_json, job_result_json};

// ─── Strategies ─────────────────────────────────────────────────────────────

fn arb_time() -> impl Strategy<Value = DateTime<Utc>> {
    (1_000_000_000i64..2_000_000_000i64).prop_map(|s| Utc.timestamp_opt(s, 0).unwrap())
}

fn arb_phase() -> impl Strategy<Value = ExecutionPhase> {
    prop::sample::select(ExecutionPhase::ALL.to_vec())
}

fn arb_owner_id() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop::sample::select(vec![
        "alice".to_string(),
        "bob".to_string(),
        "carol".to_string(),
    ]))
}

fn arb_job() -> impl Strategy<Value = Job> {
    (
        "[a-z0-9]{6,12}",
        arb_phase(),
        proptest::option::of("[a-z0-9]{1,8}"),
        arb_owner_id(),
        arb_time(),
        proptest::option::of(arb_time()),
        proptest::option::of(0i64..86_400),
    )
        .prop_map(|(id, phase, run_id, owner, created, started, quote)| {
            let mut job = Job::new(id, created).with_phase(phase);
            job.run_id = run_id;
            job.owner = owner.map(Owner::new);
            job.start_time = started;
            job.quote = quote;
            job
        })
}

fn arb_job_list() -> impl Strategy<Value = JobList> {
    prop::collection::vec(arb_job(), 0..20).prop_map(|jobs| {
        let mut list = JobList::new("async");
        list.jobs = jobs;
        list
    })
}

fn arb_viewer() -> impl Strategy<Value = Option<Owner>> {
    (arb_owner_id(), any::<bool>())
        .prop_map(|(id, admin)| id.map(|id| Owner::new(id).with_admin(admin)))
}

// ─── Filters ────────────────────────────────────────────────────────────────

proptest! {
    /// A job that has not started is never kept, whatever the cutoff.
    #[test]
    fn after_filter_rejects_unstarted_jobs(cutoff in arb_time(), created in arb_time()) {
        let job = Job::new("j", created);
        prop_assert!(!AfterFilter::new(cutoff).matches(&job));
    }

    /// A started job is kept iff it started strictly after the cutoff.
    #[test]
    fn after_filter_is_strict(cutoff in arb_time(), start in arb_time()) {
        let job = Job::new("j", start).with_start_time(start);
        prop_assert_eq!(AfterFilter::new(cutoff).matches(&job), start > cutoff);

        let at_cutoff = Job::new("j", cutoff).with_start_time(cutoff);
        prop_assert!(!AfterFilter::new(cutoff).matches(&at_cutoff));
    }

    /// The filtered sequence is always a subsequence of the security selection.
    #[test]
    fn user_filter_never_widens_visibility(
        list in arb_job_list(),
        viewer in arb_viewer(),
        cutoff in arb_time(),
        phases in prop::collection::vec(arb_phase(), 1..4),
        accept_everything in any::<bool>(),
    ) {
        let visible: Vec<&Job> = list.jobs_visible_to(viewer.as_ref()).collect();

        let after = AfterFilter::new(cutoff);
        let by_phase = PhaseFilter::new(phases).unwrap();
        let everything = |_: &Job| true;
        let filters: [&dyn JobFilter; 3] = [&after, &by_phase, &everything];

        for filter in filters {
            let kept: Vec<&Job> = list_jobs(&list, viewer.as_ref(), Some(filter)).collect();
            let mut remaining = visible.iter();
            for job in &kept {
                prop_assert!(remaining.any(|v| std::ptr::eq(*v, *job)));
                if let Some(viewer) = &viewer {
                    prop_assert!(viewer.can_read(job));
                }
            }
        }

        let unfiltered: Vec<&Job> = list_jobs(&list, viewer.as_ref(), None).collect();
        prop_assert_eq!(unfiltered.len(), visible.len());
        if accept_everything {
            let kept = list_jobs(&list, viewer.as_ref(), Some(&everything)).count();
            prop_assert_eq!(kept, visible.len());
        }
    }
}

// ─── Documents ──────────────────────────────────────────────────────────────

proptest! {
    /// Negative sizes are left out, others are written exactly.
    #[test]
    fn result_size_written_only_when_known(size in -1_000i64..1_000_000) {
        let doc = job_result_json(Some(&JobResult::new("r").with_size(size))).unwrap();
        if size < 0 {
            prop_assert!(!doc.contains_key("size"));
        } else {
            prop_assert_eq!(doc["size"].as_i64(), Some(size));
        }
    }

    /// Reference documents stay compact; full documents always carry runId and errorSummary.
    #[test]
    fn reference_and_full_mode_fields(job in arb_job()) {
        let reference = job_json(Some(&job), None, true).unwrap();
        for key in ["quote", "executionDuration", "results", "errorSummary", "parameters"] {
            prop_assert!(!reference.contains_key(key), "reference mode wrote {}", key);
        }
        prop_assert_eq!(reference.contains_key("runId"), job.run_id.is_some());
        prop_assert!(reference.contains_key("creationTime"));

        let full = job_json(Some(&job), None, false).unwrap();
        prop_assert!(full.contains_key("runId"));
        prop_assert!(full["errorSummary"].is_object());
        prop_assert_eq!(full.contains_key("startTime"), job.start_time.is_some());
        prop_assert!(!full.contains_key("endTime"));
    }
}
