//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity maps to one collection of the store and has a Model struct for
//! data and an Entity struct for operations.

pub mod application;
pub mod benefit_plan;
pub mod business_owner;
pub mod employee;
pub mod fica_calculation;

// Re-export specific types to avoid conflicts
pub use application::{
    ApplicationStatus, Column as ApplicationColumn, Entity as Application,
    Model as ApplicationModel,
};
pub use benefit_plan::{
    Column as BenefitPlanColumn, Entity as BenefitPlan, Features, Model as BenefitPlanModel,
    PlanType,
};
pub use business_owner::{
    BusinessType, Column as BusinessOwnerColumn, Entity as BusinessOwner, Industry,
    Model as BusinessOwnerModel,
};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use fica_calculation::{
    Column as FicaCalculationColumn, Entity as FicaCalculation, Model as FicaCalculationModel,
};
