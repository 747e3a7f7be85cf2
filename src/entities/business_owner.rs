//! Business owner entity - The root aggregate of the system.
//!
//! A business owner describes one enrolling business. Employees, applications and
//! FICA calculations all point back to an owner through `business_owner_id`.
//! Owners are immutable once created.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Legal structure of the business
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// C corporation
    #[sea_orm(string_value = "corporation")]
    Corporation,
    /// Limited liability company
    #[sea_orm(string_value = "llc")]
    Llc,
    /// General or limited partnership
    #[sea_orm(string_value = "partnership")]
    Partnership,
    /// Single-owner unincorporated business
    #[sea_orm(string_value = "sole_proprietorship")]
    SoleProprietorship,
    /// S corporation
    #[sea_orm(string_value = "s_corp")]
    SCorp,
}

/// Industry the business operates in
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    #[sea_orm(string_value = "technology")]
    Technology,
    #[sea_orm(string_value = "healthcare")]
    Healthcare,
    #[sea_orm(string_value = "manufacturing")]
    Manufacturing,
    #[sea_orm(string_value = "retail")]
    Retail,
    #[sea_orm(string_value = "construction")]
    Construction,
    #[sea_orm(string_value = "professional_services")]
    ProfessionalServices,
    #[sea_orm(string_value = "hospitality")]
    Hospitality,
    /// Anything not listed above; flagged for special review
    #[sea_orm(string_value = "other")]
    Other,
}

/// Business owner database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_owners")]
pub struct Model {
    /// UUID string assigned at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owner's first name
    pub first_name: String,
    /// Owner's last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Registered business name
    pub business_name: String,
    /// Legal structure
    pub business_type: BusinessType,
    /// Industry classification
    pub industry: Industry,
    /// Federal tax identifier (EIN)
    pub tax_id: String,
    /// Whole years the business has been operating
    pub years_in_business: i32,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Postal code
    pub zip_code: String,
    /// When the owner was registered
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `BusinessOwner` and the records that reference it
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One owner has many employees
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
    /// One owner has many applications
    #[sea_orm(has_many = "super::application::Entity")]
    Applications,
    /// One owner has many FICA calculations
    #[sea_orm(has_many = "super::fica_calculation::Entity")]
    FicaCalculations,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::fica_calculation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FicaCalculations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
