//! Plan CRUD operations, queries and the activation protocol.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, types::Type, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result, StoreError},
    ids::new_plan_id,
    models::{Plan, PlanFilter, PlanKind, UpdatePlanRequest},
    params::{validate_content, validate_name, validate_owner},
};

const PLAN_COLUMNS: &str =
    "id, owner_id, name, content, is_ai_generated, is_active, created_at, updated_at";

impl super::Database {
    /// Helper function to construct a Plan from a database row selected with
    /// [`PLAN_COLUMNS`].
    fn build_plan_from_row(kind: PlanKind, row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        let content_str: String = row.get(3)?;
        let content = serde_json::from_str(&content_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?;

        Ok(Plan {
            id: row.get(0)?,
            kind,
            owner_id: row.get(1)?,
            name: row.get(2)?,
            content,
            is_ai_generated: row.get(4)?,
            is_active: row.get(5)?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Looks up a plan on any connection, including an open transaction.
    fn select_plan(conn: &Connection, kind: PlanKind, id: &str) -> Result<Option<Plan>> {
        let table = kind.table();
        conn.query_row(
            &format!("SELECT {PLAN_COLUMNS} FROM {table} WHERE id = ?1"),
            params![id],
            |row| Self::build_plan_from_row(kind, row),
        )
        .optional()
        .db_context("Failed to query plan")
    }

    /// Creates a new, inactive plan owned by `owner_id`.
    pub fn create_plan(
        &mut self,
        kind: PlanKind,
        owner_id: &str,
        name: &str,
        content: &serde_json::Value,
        is_ai_generated: bool,
    ) -> Result<Plan> {
        validate_owner(owner_id)?;
        validate_name(name)?;
        validate_content(content)?;

        let table = kind.table();
        let id = new_plan_id();
        let now = Timestamp::now();
        let now_str = now.to_string();
        let content_str = serde_json::to_string(content)?;

        self.connection
            .execute(
                &format!(
                    "INSERT INTO {table} (id, owner_id, name, content, is_ai_generated, is_active, created_at, updated_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)"
                ),
                params![&id, owner_id, name, &content_str, is_ai_generated, &now_str, &now_str],
            )
            .db_context("Failed to insert plan")?;

        debug!("Created {kind} plan {id} for owner {owner_id}");

        Ok(Plan {
            id,
            kind,
            owner_id: owner_id.into(),
            name: name.into(),
            content: content.clone(),
            is_ai_generated,
            is_active: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, kind: PlanKind, id: &str) -> Result<Option<Plan>> {
        Self::select_plan(&self.connection, kind, id)
    }

    /// Lists an owner's plans of one kind in creation order, with optional
    /// filtering.
    pub fn list_plans(
        &self,
        kind: PlanKind,
        owner_id: &str,
        filter: Option<&PlanFilter>,
    ) -> Result<Vec<Plan>> {
        validate_owner(owner_id)?;

        let table = kind.table();
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM {table} WHERE owner_id = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(owner_id.to_string())];

        if let Some(f) = filter {
            if f.active_only {
                query.push_str(" AND is_active = 1");
            }
            if let Some(ai_generated) = f.ai_generated {
                query.push_str(" AND is_ai_generated = ?");
                params_vec.push(Box::new(ai_generated));
            }
        }

        query.push_str(" ORDER BY seq");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let plans = stmt
            .query_map(&params_refs[..], |row| Self::build_plan_from_row(kind, row))
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(plans)
    }

    /// Returns the owner's active plan of the given kind, if any.
    pub fn get_active_plan(&self, kind: PlanKind, owner_id: &str) -> Result<Option<Plan>> {
        validate_owner(owner_id)?;

        let table = kind.table();
        self.connection
            .query_row(
                &format!(
                    "SELECT {PLAN_COLUMNS} FROM {table} WHERE owner_id = ?1 AND is_active = 1"
                ),
                params![owner_id],
                |row| Self::build_plan_from_row(kind, row),
            )
            .optional()
            .db_context("Failed to query active plan")
    }

    /// Makes `id` the owner's only active plan of its kind.
    pub fn activate_plan(&mut self, kind: PlanKind, id: &str) -> Result<Plan> {
        self.switch_active_plan(kind, id).map(|(plan, _)| plan)
    }

    /// Makes `id` the owner's only active plan of its kind, also returning
    /// the ID of the plan it replaced.
    ///
    /// Sibling deactivation and target activation run in one `IMMEDIATE`
    /// transaction: the write lock is taken before the owner is looked up, so
    /// concurrent activations are serialized and a failure at any point rolls
    /// both phases back. The replaced plan is read inside the same
    /// transaction. Activating the already active plan changes nothing and
    /// replaces nothing.
    pub fn switch_active_plan(
        &mut self,
        kind: PlanKind,
        id: &str,
    ) -> Result<(Plan, Option<String>)> {
        let table = kind.table();
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin activation transaction")?;

        let Some(target) = Self::select_plan(&tx, kind, id)? else {
            return Err(StoreError::not_found(kind, id));
        };
        if target.is_active {
            return Ok((target, None));
        }

        let previous: Option<String> = tx
            .query_row(
                &format!("SELECT id FROM {table} WHERE owner_id = ?1 AND is_active = 1"),
                params![&target.owner_id],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to look up the current active plan")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        // Siblings first: the one-active index rejects a second active row.
        tx.execute(
            &format!(
                "UPDATE {table} SET is_active = 0, updated_at = ?1 \
                 WHERE owner_id = ?2 AND is_active = 1 AND id != ?3"
            ),
            params![&now_str, &target.owner_id, id],
        )
        .db_context("Failed to deactivate sibling plans")?;

        tx.execute(
            &format!("UPDATE {table} SET is_active = 1, updated_at = ?1 WHERE id = ?2"),
            params![&now_str, id],
        )
        .db_context("Failed to activate plan")?;

        tx.commit().map_err(|e| {
            StoreError::storage(format!(
                "Activation of {kind} plan {id} was rolled back; the previous active plan was kept"
            ))
            .with_source(e)
        })?;

        match &previous {
            Some(prev) => info!(
                "Active {kind} plan for owner {} switched from {prev} to {id}",
                target.owner_id
            ),
            None => info!("Activated {kind} plan {id} for owner {}", target.owner_id),
        }

        let plan = Plan {
            is_active: true,
            updated_at: now,
            ..target
        };
        Ok((plan, previous))
    }

    /// Merges the requested changes into a stored plan.
    ///
    /// `is_active` may only be cleared here; see [`Self::activate_plan`].
    /// `updated_at` is left untouched when nothing changes, and an empty
    /// request does not take the write lock.
    pub fn update_plan(
        &mut self,
        kind: PlanKind,
        id: &str,
        request: &UpdatePlanRequest,
    ) -> Result<Plan> {
        request.validate()?;
        if request.is_empty() {
            return self
                .get_plan(kind, id)?
                .ok_or_else(|| StoreError::not_found(kind, id));
        }

        let table = kind.table();
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let Some(current) = Self::select_plan(&tx, kind, id)? else {
            return Err(StoreError::not_found(kind, id));
        };

        let name = request.name.clone().unwrap_or_else(|| current.name.clone());
        let content = request
            .content
            .clone()
            .unwrap_or_else(|| current.content.clone());
        let is_active = request.is_active.unwrap_or(current.is_active);

        let unchanged =
            name == current.name && content == current.content && is_active == current.is_active;
        if unchanged {
            return Ok(current);
        }

        let now = Timestamp::now();
        let content_str = serde_json::to_string(&content)?;

        tx.execute(
            &format!(
                "UPDATE {table} SET name = ?1, content = ?2, is_active = ?3, updated_at = ?4 WHERE id = ?5"
            ),
            params![&name, &content_str, is_active, now.to_string(), id],
        )
        .db_context("Failed to update plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        if current.is_active && !is_active {
            info!("Deactivated {kind} plan {id} for owner {}", current.owner_id);
        } else {
            debug!("Updated {kind} plan {id}");
        }

        Ok(Plan {
            name,
            content,
            is_active,
            updated_at: now,
            ..current
        })
    }

    /// Permanently deletes a plan, returning the removed record.
    ///
    /// Deleting the active plan leaves the owner with no active plan of that
    /// kind.
    pub fn delete_plan(&mut self, kind: PlanKind, id: &str) -> Result<Plan> {
        let table = kind.table();
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let Some(plan) = Self::select_plan(&tx, kind, id)? else {
            return Err(StoreError::not_found(kind, id));
        };

        tx.execute(&format!("DELETE FROM {table} WHERE id = ?1"), params![id])
            .db_context("Failed to delete plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted {kind} plan {id}");

        Ok(plan)
    }
}
