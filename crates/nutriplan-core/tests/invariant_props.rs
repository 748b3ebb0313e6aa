mod common;

use common::create_test_db;
use nutriplan_core::{Database, PlanKind, StoreError, UpdatePlanRequest};
use proptest::prelude::*;
use serde_json::json;

const OWNERS: [&str; 2] = ["u1", "u2"];

#[derive(Clone, Debug)]
enum Op {
    Create { kind: PlanKind, owner: usize },
    Activate(usize),
    Deactivate(usize),
    Rename(usize),
    Delete(usize),
}

/// What the store should contain, tracked independently of SQLite.
#[derive(Debug)]
struct ModelPlan {
    id: String,
    kind: PlanKind,
    owner: &'static str,
    active: bool,
    deleted: bool,
}

fn arb_kind() -> impl Strategy<Value = PlanKind> {
    prop_oneof![Just(PlanKind::Diet), Just(PlanKind::Workout)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Plan indices wrap around the plans created so far, so some ops target
    // deleted plans on purpose.
    prop_oneof![
        3 => (arb_kind(), 0..OWNERS.len()).prop_map(|(kind, owner)| Op::Create { kind, owner }),
        4 => any::<usize>().prop_map(Op::Activate),
        1 => any::<usize>().prop_map(Op::Deactivate),
        1 => any::<usize>().prop_map(Op::Rename),
        2 => any::<usize>().prop_map(Op::Delete),
    ]
}

fn pick(model: &[ModelPlan], i: usize) -> Option<usize> {
    (!model.is_empty()).then(|| i % model.len())
}

fn apply(db: &mut Database, model: &mut Vec<ModelPlan>, op: &Op) {
    match *op {
        Op::Create { kind, owner } => {
            let owner = OWNERS[owner];
            let plan = db
                .create_plan(kind, owner, "Generated", &json!({ "n": model.len() }), true)
                .expect("Create should succeed");
            assert!(!plan.is_active);
            model.push(ModelPlan {
                id: plan.id,
                kind,
                owner,
                active: false,
                deleted: false,
            });
        }
        Op::Activate(i) => {
            let Some(i) = pick(model, i) else { return };
            let (kind, id) = (model[i].kind, model[i].id.clone());
            let result = db.activate_plan(kind, &id);
            if model[i].deleted {
                assert!(matches!(result, Err(StoreError::PlanNotFound { .. })));
                return;
            }
            assert!(result.expect("Activate should succeed").is_active);
            let owner = model[i].owner;
            for plan in model.iter_mut() {
                if plan.kind == kind && plan.owner == owner {
                    plan.active = plan.id == id;
                }
            }
        }
        Op::Deactivate(i) => {
            let Some(i) = pick(model, i) else { return };
            let request = UpdatePlanRequest {
                is_active: Some(false),
                ..Default::default()
            };
            let result = db.update_plan(model[i].kind, &model[i].id, &request);
            if model[i].deleted {
                assert!(matches!(result, Err(StoreError::PlanNotFound { .. })));
                return;
            }
            assert!(!result.expect("Deactivate should succeed").is_active);
            model[i].active = false;
        }
        Op::Rename(i) => {
            let Some(i) = pick(model, i) else { return };
            let request = UpdatePlanRequest {
                name: Some(format!("Renamed {i}")),
                ..Default::default()
            };
            let result = db.update_plan(model[i].kind, &model[i].id, &request);
            if model[i].deleted {
                assert!(matches!(result, Err(StoreError::PlanNotFound { .. })));
                return;
            }
            assert_eq!(
                result.expect("Rename should succeed").is_active,
                model[i].active
            );
        }
        Op::Delete(i) => {
            let Some(i) = pick(model, i) else { return };
            let result = db.delete_plan(model[i].kind, &model[i].id);
            if model[i].deleted {
                assert!(matches!(result, Err(StoreError::PlanNotFound { .. })));
                return;
            }
            result.expect("Delete should succeed");
            model[i].deleted = true;
            model[i].active = false;
        }
    }
}

fn check(db: &Database, model: &[ModelPlan]) {
    for kind in PlanKind::ALL {
        for owner in OWNERS {
            let stored = db.list_plans(kind, owner, None).expect("List should succeed");

            let active = stored.iter().filter(|p| p.is_active).count();
            assert!(active <= 1, "{owner} has {active} active {kind} plans");

            let expected: Vec<(&str, bool)> = model
                .iter()
                .filter(|p| p.kind == kind && p.owner == owner && !p.deleted)
                .map(|p| (p.id.as_str(), p.active))
                .collect();
            let actual: Vec<(&str, bool)> = stored
                .iter()
                .map(|p| (p.id.as_str(), p.is_active))
                .collect();
            assert_eq!(actual, expected);

            let active_id = db
                .get_active_plan(kind, owner)
                .expect("Active lookup should succeed")
                .map(|p| p.id);
            let expected_active = expected
                .iter()
                .find(|(_, active)| *active)
                .map(|(id, _)| (*id).to_string());
            assert_eq!(active_id, expected_active);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn at_most_one_active_plan_per_owner_and_kind(ops in prop::collection::vec(arb_op(), 1..40)) {
        let (_temp_file, mut db) = create_test_db();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut db, &mut model, op);
            check(&db, &model);
        }
    }
}
