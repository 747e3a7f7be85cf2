//! Employee entity - A person on a business owner's payroll.
//!
//! Salaries feed the FICA calculation and the employee count drives eligibility.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// UUID string assigned at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owner this employee works for
    pub business_owner_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    /// Gross annual salary in dollars
    pub annual_salary: f64,
    pub hire_date: Date,
    pub birth_date: Date,
    pub has_current_health_insurance: bool,
    pub has_current_life_insurance: bool,
    /// Monthly premium currently paid for health cover, if any
    pub current_health_premium: Option<f64>,
    /// Monthly premium currently paid for life cover, if any
    pub current_life_premium: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each employee belongs to one business owner
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
