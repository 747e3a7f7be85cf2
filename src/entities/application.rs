//! Application entity - A business's enrollment request and its status.
//!
//! Status values can follow each other in any order. `submitted_at` is stamped
//! every time an update sets the status to `submitted`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Where an application is in the enrollment workflow
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "under_review")]
    UnderReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Application database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub business_owner_id: String,
    pub status: ApplicationStatus,
    /// Chosen health plan; not checked against the catalog
    pub selected_health_plan_id: Option<String>,
    /// Chosen life plan; not checked against the catalog
    pub selected_life_plan_id: Option<String>,
    /// Employee headcount captured when the application was created
    pub total_employees: i64,
    pub estimated_annual_savings: f64,
    pub notes: Option<String>,
    /// Time of the most recent submission
    pub submitted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each application belongs to one business owner
    #[sea_orm(
        belongs_to = "super::business_owner::Entity",
        from = "Column::BusinessOwnerId",
        to = "super::business_owner::Column::Id"
    )]
    BusinessOwner,
}

impl Related<super::business_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessOwner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
