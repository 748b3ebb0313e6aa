//! Command-line argument wrappers and command handlers
//!
//! Argument structures carry the clap derives; core parameter types stay
//! free of them. Most wrappers lack the plan kind and the owner (both come
//! from the surrounding command line), so they convert with an explicit
//! `into_params` rather than `From`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanStore → Display → Renderer
//! ```

use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use nutriplan_core::{
    params::{CreatePlan, DeletePlan, ListPlans, OwnerScope, PlanRef, UpdatePlan},
    OperationStatus, Plan, PlanKind, PlanStore,
};

use crate::renderer::TerminalRenderer;

/// Create a new, inactive plan
///
/// The plan body is arbitrary JSON, typically the output of the plan
/// generator. It is stored exactly as given.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// Plan body as a JSON document
    #[arg(
        long,
        conflicts_with = "content_file",
        required_unless_present = "content_file",
        help = "Plan body as a JSON document"
    )]
    pub content: Option<String>,
    /// Read the plan body from a JSON file
    #[arg(long, help = "Read the plan body from a JSON file")]
    pub content_file: Option<PathBuf>,
    /// Mark the plan as produced by the AI generator
    #[arg(long, help = "Mark the plan as produced by the AI generator")]
    pub ai: bool,
}

impl CreatePlanArgs {
    /// Convert CLI arguments to core parameters, reading and parsing the
    /// plan body.
    pub fn into_params(self, kind: PlanKind, owner_id: String) -> Result<CreatePlan> {
        let content = match (self.content, self.content_file) {
            (Some(raw), _) => parse_content(&raw)?,
            (None, Some(path)) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_content(&raw)?
            }
            (None, None) => return Err(anyhow!("Either --content or --content-file is required")),
        };

        Ok(CreatePlan {
            kind,
            owner_id,
            name: self.name,
            content,
            is_ai_generated: self.ai,
        })
    }
}

/// List the owner's plans in creation order
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show only the active plan
    #[arg(long, help = "Show only the active plan")]
    pub active_only: bool,
    /// Show only AI-generated plans
    #[arg(long, help = "Show only AI-generated plans")]
    pub ai_only: bool,
}

impl ListPlansArgs {
    pub fn into_params(self, kind: PlanKind, owner_id: String) -> ListPlans {
        ListPlans {
            kind,
            owner_id,
            active_only: self.active_only,
            ai_generated: self.ai_only.then_some(true),
        }
    }
}

/// Identify a plan by ID
#[derive(Args)]
pub struct PlanIdArgs {
    /// ID of the plan
    #[arg(help = "Unique identifier of the plan")]
    pub id: String,
}

impl PlanIdArgs {
    pub fn into_params(self, kind: PlanKind) -> PlanRef {
        PlanRef::new(kind, self.id)
    }
}

/// Update a plan's name or content
///
/// Activation is not available here; use `activate` so the previous
/// active plan is switched off in the same step.
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    #[arg(help = "Unique identifier of the plan to update")]
    pub id: String,
    /// New name for the plan
    #[arg(long, help = "New name for the plan")]
    pub name: Option<String>,
    /// Replacement plan body as a JSON document
    #[arg(long, help = "Replacement plan body as a JSON document")]
    pub content: Option<String>,
}

impl UpdatePlanArgs {
    pub fn into_params(self, kind: PlanKind) -> Result<UpdatePlan> {
        let content = self.content.as_deref().map(parse_content).transpose()?;

        Ok(UpdatePlan {
            kind,
            id: self.id,
            name: self.name,
            content,
            is_active: None,
        })
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl DeletePlanArgs {
    pub fn into_params(self, kind: PlanKind) -> DeletePlan {
        DeletePlan {
            kind,
            id: self.id,
            confirmed: self.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Show the currently active plan
    Active,
    /// Make a plan the active one, deactivating the previous active plan
    #[command(alias = "a")]
    Activate(PlanIdArgs),
    /// Deactivate a plan, leaving no plan of this kind active
    Deactivate(PlanIdArgs),
    /// Update a plan's name or content
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

fn parse_content(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).context("Plan content must be valid JSON")
}

/// Runs plan commands against the store on behalf of one owner.
pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
    owner: Option<String>,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer, owner: Option<String>) -> Self {
        Self {
            store,
            renderer,
            owner,
        }
    }

    fn owner(&self) -> Result<String> {
        self.owner
            .clone()
            .ok_or_else(|| anyhow!("No owner given; pass --owner or set NUTRIPLAN_OWNER"))
    }

    /// Looks up a plan by ID, treating other owners' plans as missing.
    async fn owned_plan(&self, kind: PlanKind, id: &str) -> Result<Plan> {
        let owner = self.owner()?;
        Ok(self
            .store
            .require_owned_plan(&PlanRef::new(kind, id), &owner)
            .await?)
    }

    pub async fn handle_plan_command(&self, kind: PlanKind, command: PlanCommands) -> Result<()> {
        debug!("Handling {kind} plan command");

        let output = match command {
            PlanCommands::Create(args) => {
                let params = args.into_params(kind, self.owner()?)?;
                self.store.create_plan_result(&params).await?.to_string()
            }
            PlanCommands::List(args) => {
                let params = args.into_params(kind, self.owner()?);
                self.store.list_plans_summary(&params).await?.to_string()
            }
            PlanCommands::Show(args) => self.owned_plan(kind, &args.id).await?.to_string(),
            PlanCommands::Active => {
                let scope = OwnerScope::new(kind, self.owner()?);
                match self.store.active_plan(&scope).await? {
                    Some(plan) => plan.to_string(),
                    None => format!("No active {kind} plan.\n"),
                }
            }
            PlanCommands::Activate(args) => {
                self.owned_plan(kind, &args.id).await?;
                self.store
                    .activate_plan_result(&args.into_params(kind))
                    .await?
                    .to_string()
            }
            PlanCommands::Deactivate(args) => {
                self.owned_plan(kind, &args.id).await?;
                let plan = self.store.deactivate_plan(&args.into_params(kind)).await?;
                OperationStatus::success(format!(
                    "{kind} plan '{}' (ID: {}) is inactive",
                    plan.name, plan.id
                ))
                .to_string()
            }
            PlanCommands::Update(args) => {
                self.owned_plan(kind, &args.id).await?;
                let params = args.into_params(kind)?;
                self.store.update_plan_result(&params).await?.to_string()
            }
            PlanCommands::Delete(args) => {
                self.owned_plan(kind, &args.id).await?;
                self.store
                    .delete_plan_confirmed(&args.into_params(kind))
                    .await?
                    .to_string()
            }
        };

        self.renderer.render(&output)
    }
}
