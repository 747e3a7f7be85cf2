//! FICA calculation entity - Append-only audit record of one savings estimate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// FICA calculation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fica_calculations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub business_owner_id: String,
    /// Sum of all employee annual salaries
    pub total_employee_salaries: f64,
    /// Payroll tax owed at the combined 7.65% rate
    pub current_fica_tax: f64,
    pub projected_fica_savings: f64,
    pub annual_savings: f64,
    /// Yearly employer cost of the selected health plan
    pub health_benefit_cost: f64,
    /// Yearly employer cost of the selected life plan
    pub life_insurance_cost: f64,
    /// Savings minus total benefit cost (negative when benefits cost more)
    pub net_savings: f64,
    pub calculation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each calculation belongs to one business owner
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
