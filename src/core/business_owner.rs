//! Business owner business logic - registering and looking up owners.
//!
//! Owners are the root aggregate: every other owner-scoped operation starts by
//! resolving the owner through [`get_business_owner`].

use crate::{
    entities::{BusinessOwner, business_owner},
    errors::{Error, Result},
    models::BusinessOwnerCreate,
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Maximum number of owners returned by [`get_all_business_owners`].
pub const OWNER_LIST_LIMIT: u64 = 1000;

/// Validates and stores a new business owner.
///
/// No uniqueness check is made on the email address.
///
/// # Errors
/// Returns [`Error::Validation`] for a malformed email or negative
/// `years_in_business`, or a database error if the insert fails.
pub async fn create_business_owner(
    db: &DatabaseConnection,
    input: BusinessOwnerCreate,
) -> Result<business_owner::Model> {
    input.validate()?;

    let owner = business_owner::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        phone: Set(input.phone),
        business_name: Set(input.business_name),
        business_type: Set(input.business_type),
        industry: Set(input.industry),
        tax_id: Set(input.tax_id),
        years_in_business: Set(input.years_in_business),
        address: Set(input.address),
        city: Set(input.city),
        state: Set(input.state),
        zip_code: Set(input.zip_code),
        created_at: Set(Utc::now()),
    };

    let owner = owner.insert(db).await?;
    info!(owner_id = %owner.id, business = %owner.business_name, "Registered business owner");
    Ok(owner)
}

/// Finds an owner by id.
///
/// # Errors
/// Returns [`Error::NotFound`] when no owner has this id.
pub async fn get_business_owner(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<business_owner::Model> {
    BusinessOwner::find_by_id(owner_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Business owner", owner_id))
}

/// Lists owners in registration order, capped at [`OWNER_LIST_LIMIT`].
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_business_owners(
    db: &DatabaseConnection,
) -> Result<Vec<business_owner::Model>> {
    BusinessOwner::find()
        .order_by_asc(business_owner::Column::CreatedAt)
        .limit(OWNER_LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{BusinessType, Industry};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let input = owner_input("Test Business LLC");

        let created = create_business_owner(&db, input.clone()).await?;
        let fetched = get_business_owner(&db, &created.id).await?;

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.first_name, input.first_name);
        assert_eq!(fetched.last_name, input.last_name);
        assert_eq!(fetched.email, input.email);
        assert_eq!(fetched.phone, input.phone);
        assert_eq!(fetched.business_name, input.business_name);
        assert_eq!(fetched.business_type, BusinessType::Llc);
        assert_eq!(fetched.industry, Industry::Technology);
        assert_eq!(fetched.tax_id, input.tax_id);
        assert_eq!(fetched.years_in_business, input.years_in_business);
        assert_eq!(fetched.address, input.address);
        assert_eq!(fetched.city, input.city);
        assert_eq!(fetched.state, input.state);
        assert_eq!(fetched.zip_code, input.zip_code);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_owner_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_business_owner(&db, "does-not-exist").await;
        assert!(matches!(result, Err(Error::NotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_insert() -> Result<()> {
        let db = setup_test_db().await?;
        let mut input = owner_input("Bad Email Inc");
        input.email = "not-an-email".to_string();

        let result = create_business_owner(&db, input).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(get_all_business_owners(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_years_in_business_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let mut input = owner_input("Time Travel LLC");
        input.years_in_business = -1;

        let result = create_business_owner(&db, input).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(get_all_business_owners(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_emails_are_allowed() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_business_owner(&db, owner_input("First Co")).await?;
        let second = create_business_owner(&db, owner_input("Second Co")).await?;
        assert_eq!(first.email, second.email);
        assert_ne!(first.id, second.id);

        let owners = get_all_business_owners(&db).await?;
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0].id, first.id);
        assert_eq!(owners[1].id, second.id);

        Ok(())
    }
}
