//! Integration tests for the entitlement decision flow.
//!
//! These tests wire the decision engine to the in-memory adapters and walk
//! the metering scenarios end to end: check -> act -> record -> check
//! again, trial windows opening and closing, credits folding into the
//! interview allotment, and the fail-open/fail-closed split under store
//! outages.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use talkprep::adapters::memory::{
    MemoryCreditLedger, MemorySubscriptionDirectory, MemoryTrialStore, MemoryUsageStore,
};
use talkprep::application::{CreditGrantService, EntitlementEngine};
use talkprep::config::PlanCatalog;
use talkprep::domain::entitlement::{AccessDecision, DenialReason, ResourceType};
use talkprep::domain::foundation::{PrincipalId, Timestamp};
use talkprep::ports::{PlanTag, TrialStore, UsageStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    directory: Arc<MemorySubscriptionDirectory>,
    trials: Arc<MemoryTrialStore>,
    usage: Arc<MemoryUsageStore>,
    ledger: Arc<MemoryCreditLedger>,
    engine: EntitlementEngine,
}

impl Harness {
    fn new() -> Self {
        let directory = Arc::new(MemorySubscriptionDirectory::new());
        let trials = Arc::new(MemoryTrialStore::new());
        let usage = Arc::new(MemoryUsageStore::new());
        let ledger = Arc::new(MemoryCreditLedger::new());

        let engine = EntitlementEngine::new(
            directory.clone(),
            trials.clone(),
            usage.clone(),
            ledger.clone(),
            PlanCatalog::default(),
        );

        Self {
            directory,
            trials,
            usage,
            ledger,
            engine,
        }
    }

    async fn record(&self, principal: &PrincipalId, resource: ResourceType, at: Timestamp) {
        self.usage.record(principal, resource, at).await.unwrap();
    }
}

fn ts(s: &str) -> Timestamp {
    Timestamp::from_datetime(DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc))
}

fn principal() -> PrincipalId {
    PrincipalId::new("principal-1").unwrap()
}

fn june() -> Timestamp {
    ts("2024-06-15T12:00:00Z")
}

// =============================================================================
// Tutor ladder and the upgrade scenario
// =============================================================================

#[tokio::test]
async fn free_tier_tutor_ladder_allows_three_then_denies() {
    let harness = Harness::new();
    let p = principal();

    for owned in 0..3u32 {
        let decision = harness
            .engine
            .can_consume_at(Some(&p), ResourceType::Tutor, june())
            .await;
        assert!(decision.is_allowed(), "tutor #{} should be allowed", owned + 1);

        // Caller records the event after the action succeeds.
        harness.record(&p, ResourceType::Tutor, june()).await;
    }

    let decision = harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Tutor, june())
        .await;
    assert_eq!(
        decision,
        AccessDecision::Denied(DenialReason::LimitReached {
            resource: ResourceType::Tutor,
            used: 3,
            allowed: 3,
        })
    );
}

#[tokio::test]
async fn upgrading_to_basic_unlocks_further_tutors() {
    let harness = Harness::new();
    let p = principal();

    for _ in 0..3 {
        assert!(harness
            .engine
            .can_consume_at(Some(&p), ResourceType::Tutor, june())
            .await
            .is_allowed());
        harness.record(&p, ResourceType::Tutor, june()).await;
    }
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Tutor, june())
        .await
        .is_denied());

    // Upgrade: the subscription directory now reports the basic tag, and
    // the standing tutor cap rises to 10.
    harness.directory.set_plan_tags(&p, &[PlanTag::Basic]);
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Tutor, june())
        .await
        .is_allowed());
}

#[tokio::test]
async fn tutor_cap_is_all_time_not_monthly() {
    let harness = Harness::new();
    let p = principal();

    // Tutors created months ago still count against the standing cap.
    harness.record(&p, ResourceType::Tutor, ts("2023-01-10T00:00:00Z")).await;
    harness.record(&p, ResourceType::Tutor, ts("2023-08-10T00:00:00Z")).await;
    harness.record(&p, ResourceType::Tutor, ts("2024-02-10T00:00:00Z")).await;

    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Tutor, june())
        .await
        .is_denied());
}

// =============================================================================
// Trial window
// =============================================================================

#[tokio::test]
async fn trial_overrides_plan_until_it_expires() {
    let harness = Harness::new();
    let p = principal();

    // Pro-tagged principal whose trial opened June 14.
    harness.directory.set_plan_tags(&p, &[PlanTag::Pro]);
    harness
        .trials
        .start_trial(&p, ts("2024-06-14T00:00:00Z"))
        .await
        .unwrap();

    // 3 interviews exhaust the trial (== free) allotment...
    for _ in 0..3 {
        harness.record(&p, ResourceType::Interview, june()).await;
    }
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, june())
        .await
        .is_denied());

    // ...but once the window closes the pro allotment applies.
    let after_trial = ts("2024-06-21T00:00:01Z");
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, after_trial)
        .await
        .is_allowed());
}

#[tokio::test]
async fn trial_window_is_seven_days_and_immutable() {
    let harness = Harness::new();
    let p = principal();

    let started = ts("2024-06-01T09:00:00Z");
    let record = harness.trials.start_trial(&p, started).await.unwrap();
    assert_eq!(record.ends_at, ts("2024-06-08T09:00:00Z"));

    // Restarting later must not move the window; repeated reads agree.
    let again = harness
        .trials
        .start_trial(&p, ts("2024-06-05T00:00:00Z"))
        .await
        .unwrap();
    assert_eq!(again, record);

    let read_one = harness.trials.find_trial(&p).await.unwrap().unwrap();
    let read_two = harness.trials.find_trial(&p).await.unwrap().unwrap();
    assert_eq!(read_one, read_two);
    assert_eq!(read_one, record);
}

#[tokio::test]
async fn trial_store_outage_does_not_block_a_paying_user() {
    let harness = Harness::new();
    let p = principal();

    harness.directory.set_plan_tags(&p, &[PlanTag::Basic]);
    harness.trials.set_failing(true);

    // Fail-open on the trial path: basic limits still apply.
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, june())
        .await
        .is_allowed());
}

// =============================================================================
// Credits
// =============================================================================

#[tokio::test]
async fn credits_extend_the_interview_allotment() {
    let harness = Harness::new();
    let p = principal();
    let grants = CreditGrantService::new(harness.ledger.clone());

    harness.directory.set_plan_tags(&p, &[PlanTag::Basic]);

    // 9 of 10 monthly interviews used, 2 credits earned.
    for _ in 0..9 {
        harness.record(&p, ResourceType::Interview, june()).await;
    }
    assert_eq!(grants.grant_interview_credit(&p).await.unwrap(), 1);
    assert_eq!(grants.grant_interview_credit(&p).await.unwrap(), 2);

    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, june())
        .await
        .is_allowed());

    // 12 used with no credits left to a different principal: denied.
    let q = PrincipalId::new("principal-2").unwrap();
    harness.directory.set_plan_tags(&q, &[PlanTag::Basic]);
    for _ in 0..12 {
        harness.record(&q, ResourceType::Interview, june()).await;
    }
    assert_eq!(
        harness
            .engine
            .can_consume_at(Some(&q), ResourceType::Interview, june())
            .await,
        AccessDecision::Denied(DenialReason::LimitReached {
            resource: ResourceType::Interview,
            used: 12,
            allowed: 10,
        })
    );
}

#[tokio::test]
async fn concurrent_grants_increase_balance_by_exactly_n() {
    let harness = Harness::new();
    let p = principal();
    let grants = Arc::new(CreditGrantService::new(harness.ledger.clone()));

    let mut handles = Vec::new();
    for _ in 0..25 {
        let grants = grants.clone();
        let p = p.clone();
        handles.push(tokio::spawn(async move {
            grants.grant_interview_credit(&p).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = harness.engine.usage_snapshot_at(&p, june()).await.unwrap();
    assert_eq!(snapshot.interview_credits, 25);
}

// =============================================================================
// Month boundary
// =============================================================================

#[tokio::test]
async fn last_instant_of_month_counts_toward_that_month() {
    let harness = Harness::new();
    let p = principal();

    // Free tier: 3 interviews per month.
    harness.record(&p, ResourceType::Interview, ts("2024-03-05T10:00:00Z")).await;
    harness.record(&p, ResourceType::Interview, ts("2024-03-20T10:00:00Z")).await;
    harness
        .record(&p, ResourceType::Interview, ts("2024-03-31T23:59:59.999Z"))
        .await;

    // Checked late on March 31: all three count, limit reached.
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, ts("2024-03-31T23:59:59.999Z"))
        .await
        .is_denied());

    // The first instant of April opens a fresh window.
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Interview, ts("2024-04-01T00:00:00Z"))
        .await
        .is_allowed());
}

#[tokio::test]
async fn first_instant_of_month_belongs_to_that_month_only() {
    let harness = Harness::new();
    let p = principal();

    harness
        .record(&p, ResourceType::Interview, ts("2024-04-01T00:00:00Z"))
        .await;

    // The event sits in April's window for the whole of April...
    let snapshot_april = harness
        .engine
        .usage_snapshot_at(&p, ts("2024-04-15T12:00:00Z"))
        .await
        .unwrap();
    assert_eq!(snapshot_april.interviews_this_month, 1);

    // ...and has rolled out of the window once May begins.
    let snapshot_may = harness
        .engine
        .usage_snapshot_at(&p, ts("2024-05-02T09:00:00Z"))
        .await
        .unwrap();
    assert_eq!(snapshot_may.interviews_this_month, 0);
}

// =============================================================================
// Failure directions
// =============================================================================

#[tokio::test]
async fn usage_count_outage_fails_closed_for_every_resource() {
    let harness = Harness::new();
    let p = principal();

    harness.directory.set_plan_tags(&p, &[PlanTag::Pro]);
    harness.usage.set_count_failing(true);

    for resource in [ResourceType::Tutor, ResourceType::Interview, ResourceType::Story] {
        assert_eq!(
            harness
                .engine
                .can_consume_at(Some(&p), resource, june())
                .await,
            AccessDecision::Denied(DenialReason::QuotaUnverifiable),
            "{resource} must be denied while counts are unverifiable"
        );
    }
}

#[tokio::test]
async fn credit_ledger_outage_fails_closed_for_interviews_only() {
    let harness = Harness::new();
    let p = principal();

    harness.directory.set_plan_tags(&p, &[PlanTag::Pro]);
    harness.ledger.set_failing(true);

    // Interviews read the ledger and must deny.
    assert_eq!(
        harness
            .engine
            .can_consume_at(Some(&p), ResourceType::Interview, june())
            .await,
        AccessDecision::Denied(DenialReason::QuotaUnverifiable)
    );

    // Stories and tutors never touch the ledger.
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Story, june())
        .await
        .is_allowed());
    assert!(harness
        .engine
        .can_consume_at(Some(&p), ResourceType::Tutor, june())
        .await
        .is_allowed());
}

// =============================================================================
// Display paths
// =============================================================================

#[tokio::test]
async fn plan_features_reports_the_effective_allotment() {
    let harness = Harness::new();
    let p = principal();

    harness.directory.set_plan_tags(&p, &[PlanTag::Pro]);

    let first = harness.engine.plan_features_at(Some(&p), june()).await;
    let second = harness.engine.plan_features_at(Some(&p), june()).await;
    assert_eq!(first, second);
    assert_eq!(first, PlanCatalog::default().pro);
    assert!(first.advanced_reporting);
}

#[tokio::test]
async fn unauthenticated_caller_is_denied_and_sees_locked_features() {
    let harness = Harness::new();

    assert_eq!(
        harness
            .engine
            .can_consume_at(None, ResourceType::Story, june())
            .await,
        AccessDecision::Denied(DenialReason::Unauthenticated)
    );

    let allotment = harness.engine.plan_features_at(None, june()).await;
    assert_eq!(allotment.tutor_limit, 0);
    assert_eq!(allotment.interviews_per_month, 0);
    assert_eq!(allotment.stories_per_month, 0);
}
