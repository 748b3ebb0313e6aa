mod common;

use std::{collections::HashMap, time::Duration};

use common::create_test_store;
use nutriplan_core::{
    CreatePlan, DeletePlan, ListPlans, OwnerScope, PlanKind, PlanRef, PlanStoreBuilder,
    StoreError, UpdatePlan,
};
use serde_json::json;
use tempfile::TempDir;

fn plan_params(kind: PlanKind, owner: &str, name: &str) -> CreatePlan {
    CreatePlan {
        kind,
        owner_id: owner.to_string(),
        name: name.to_string(),
        content: json!({ "title": name, "days": [] }),
        is_ai_generated: true,
    }
}

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_plan_workflow() {
    let (_temp_dir, store) = create_test_store().await;

    // Create two workout plans
    let a = store
        .create_plan(&plan_params(PlanKind::Workout, "u1", "Strength"))
        .await
        .expect("Failed to create plan");
    let b = store
        .create_plan(&plan_params(PlanKind::Workout, "u1", "Cardio"))
        .await
        .expect("Failed to create plan");

    let summaries = store
        .list_plans_summary(&ListPlans::all(PlanKind::Workout, "u1"))
        .await
        .expect("Failed to list plans");
    assert_eq!(summaries.len(), 2);
    assert!(summaries.active().is_none());

    // Activate, then switch
    store
        .activate_plan(&PlanRef::new(PlanKind::Workout, &a.id))
        .await
        .expect("Failed to activate plan");
    let switched = store
        .activate_plan_result(&PlanRef::new(PlanKind::Workout, &b.id))
        .await
        .expect("Failed to switch active plan");
    assert_eq!(switched.previous_id.as_deref(), Some(a.id.as_str()));

    let active = store
        .active_plan(&OwnerScope::new(PlanKind::Workout, "u1"))
        .await
        .expect("Failed to get active plan")
        .expect("A plan should be active");
    assert_eq!(active.id, b.id);

    // Rename the active plan; it stays active
    let updated = store
        .update_plan(&UpdatePlan {
            kind: PlanKind::Workout,
            id: b.id.clone(),
            name: Some("Cardio v2".to_string()),
            content: None,
            is_active: None,
        })
        .await
        .expect("Failed to update plan");
    assert_eq!(updated.name, "Cardio v2");
    assert!(updated.is_active);

    // Delete it and confirm nothing is active
    let deleted = store
        .delete_plan_confirmed(&DeletePlan {
            kind: PlanKind::Workout,
            id: b.id.clone(),
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan");
    assert!(deleted.to_string().contains("No workout plan is active now."));

    let remaining = store
        .list_plans(&ListPlans::all(PlanKind::Workout, "u1"))
        .await
        .expect("Failed to list plans");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, a.id);
    assert!(!remaining[0].is_active);
}

#[tokio::test]
async fn test_store_reopens_existing_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("plans.db");

    let plan_id = {
        let store = PlanStoreBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to create store");
        let plan = store
            .create_plan(&plan_params(PlanKind::Diet, "u1", "Persisted"))
            .await
            .expect("Failed to create plan");
        store
            .activate_plan(&PlanRef::new(PlanKind::Diet, &plan.id))
            .await
            .expect("Failed to activate plan");
        plan.id
    };

    let store = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen store");
    let plan = store
        .show_plan(&PlanRef::new(PlanKind::Diet, &plan_id))
        .await
        .expect("Plan should survive reopening");
    assert!(plan.is_active);
    assert_eq!(plan.name, "Persisted");
}

#[tokio::test]
async fn test_not_found_errors_map_to_404() {
    let (_temp_dir, store) = create_test_store().await;

    let err = store
        .activate_plan(&PlanRef::new(PlanKind::Diet, "nonexistent-id"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::PlanNotFound { .. }));
    assert_eq!(err.kind().http_status(), 404);
    assert!(!err.is_retryable());

    let err = store
        .delete_plan(&PlanRef::new(PlanKind::Workout, "nonexistent-id"))
        .await
        .unwrap_err();
    assert_eq!(err.kind().http_status(), 404);
}

#[tokio::test]
async fn test_validation_errors_map_to_400() {
    let (_temp_dir, store) = create_test_store().await;

    let err = store
        .create_plan(&plan_params(PlanKind::Diet, "u1", "  "))
        .await
        .unwrap_err();
    assert_eq!(err.kind().http_status(), 400);

    let err = store
        .list_plans(&ListPlans::all(PlanKind::Diet, ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind().http_status(), 400);

    let plan = store
        .create_plan(&plan_params(PlanKind::Diet, "u1", "Valid"))
        .await
        .unwrap();
    let err = store
        .update_plan(&UpdatePlan {
            kind: PlanKind::Diet,
            id: plan.id,
            name: None,
            content: None,
            is_active: Some(true),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind().http_status(), 400);
}

#[tokio::test]
async fn test_ai_generated_filter() {
    let (_temp_dir, store) = create_test_store().await;

    store
        .create_plan(&plan_params(PlanKind::Diet, "u1", "Generated"))
        .await
        .unwrap();
    store
        .create_plan(&CreatePlan {
            is_ai_generated: false,
            ..plan_params(PlanKind::Diet, "u1", "Handwritten")
        })
        .await
        .unwrap();

    let custom = store
        .list_plans(&ListPlans {
            ai_generated: Some(false),
            ..ListPlans::all(PlanKind::Diet, "u1")
        })
        .await
        .unwrap();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].name, "Handwritten");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_activations_leave_one_active() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = PlanStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("concurrent.db")))
        .with_busy_timeout(Duration::from_secs(30))
        .build()
        .await
        .expect("Failed to create store");

    let mut ids = Vec::new();
    for i in 0..8 {
        let plan = store
            .create_plan(&plan_params(PlanKind::Diet, "u1", &format!("Plan {i}")))
            .await
            .expect("Failed to create plan");
        ids.push(plan.id);
    }

    // Every plan is activated several times from competing tasks
    let mut handles = Vec::new();
    for _ in 0..3 {
        for id in &ids {
            let store = store.clone();
            let target = PlanRef::new(PlanKind::Diet, id);
            handles.push(tokio::spawn(async move { store.activate_plan(&target).await }));
        }
    }

    for handle in handles {
        let plan = handle
            .await
            .expect("Activation task panicked")
            .expect("Activation failed");
        assert!(plan.is_active);
    }

    let plans = store
        .list_plans(&ListPlans::all(PlanKind::Diet, "u1"))
        .await
        .expect("Failed to list plans");
    assert_eq!(plans.len(), ids.len());
    assert_eq!(plans.iter().filter(|p| p.is_active).count(), 1);

    let active = store
        .active_plan(&OwnerScope::new(PlanKind::Diet, "u1"))
        .await
        .unwrap()
        .expect("One plan should be active");
    assert!(ids.contains(&active.id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_owners_do_not_interfere() {
    let (_temp_dir, store) = create_test_store().await;

    let mut handles = Vec::new();
    for owner in ["u1", "u2", "u3"] {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let mut last = None;
            for i in 0..4 {
                let plan = store
                    .create_plan(&plan_params(PlanKind::Workout, owner, &format!("W{i}")))
                    .await?;
                store
                    .activate_plan(&PlanRef::new(PlanKind::Workout, &plan.id))
                    .await?;
                last = Some(plan.id);
            }
            Ok::<_, StoreError>((owner, last))
        }));
    }

    for handle in handles {
        let (owner, last) = handle
            .await
            .expect("Owner task panicked")
            .expect("Owner task failed");
        let active = store
            .active_plan(&OwnerScope::new(PlanKind::Workout, owner))
            .await
            .unwrap()
            .expect("Owner should have an active plan");
        assert_eq!(Some(active.id), last);

        let plans = store
            .list_plans(&ListPlans::all(PlanKind::Workout, owner))
            .await
            .unwrap();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans.iter().filter(|p| p.is_active).count(), 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_activations_report_consistent_handovers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = PlanStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("handover.db")))
        .with_busy_timeout(Duration::from_secs(30))
        .build()
        .await
        .expect("Failed to create store");

    let mut ids = Vec::new();
    for i in 0..6 {
        let plan = store
            .create_plan(&plan_params(PlanKind::Workout, "u1", &format!("W{i}")))
            .await
            .expect("Failed to create plan");
        ids.push(plan.id);
    }

    let mut handles = Vec::new();
    for _ in 0..4 {
        for id in &ids {
            let store = store.clone();
            let target = PlanRef::new(PlanKind::Workout, id);
            handles.push(tokio::spawn(async move {
                store.activate_plan_result(&target).await
            }));
        }
    }

    // Each reported hand-over moves the active flag from one plan to
    // another. Net flow per plan is +1 for the final active plan, -1 for the
    // first one activated, and 0 otherwise.
    let mut flow: HashMap<String, i64> = HashMap::new();
    for handle in handles {
        let result = handle
            .await
            .expect("Activation task panicked")
            .expect("Activation failed");
        if let Some(previous) = result.previous_id {
            assert_ne!(previous, result.plan.id);
            *flow.entry(result.plan.id).or_default() += 1;
            *flow.entry(previous).or_default() -= 1;
        }
    }

    let active = store
        .active_plan(&OwnerScope::new(PlanKind::Workout, "u1"))
        .await
        .unwrap()
        .expect("One plan should be active");

    let gains: Vec<&String> = flow.iter().filter(|(_, n)| **n > 0).map(|(id, _)| id).collect();
    let losses = flow.values().filter(|n| **n < 0).count();
    assert!(flow.values().all(|n| (-1..=1).contains(n)), "{flow:?}");
    assert!(gains.len() <= 1 && losses == gains.len(), "{flow:?}");
    if let Some(winner) = gains.first() {
        assert_eq!(**winner, active.id);
    }
}
