use shared::constants::{QUOTA_TOTAL, UNITS_GRANULARITY};
use shared::errors::Error;
use shared::types::ContractRegistration;

/// Validate a contract registration before any state is touched.
pub fn validate_registration(registration: &ContractRegistration) -> Result<(), Error> {
    if registration.units_total == 0 || registration.units_total % UNITS_GRANULARITY != 0 {
        return Err(Error::BadUnitsAmount);
    }

    let mut quota_sum: u32 = 0;
    for entry in registration.sellers.iter() {
        quota_sum = quota_sum.checked_add(entry.quota).ok_or(Error::BadQuota)?;
    }
    if quota_sum != QUOTA_TOTAL {
        return Err(Error::BadQuota);
    }

    if registration.unit_price_usd < 0 || registration.reward_per_unit < 0 {
        return Err(Error::InvInput);
    }

    Ok(())
}
