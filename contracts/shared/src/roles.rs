use soroban_sdk::{contracttype, Address};

use crate::errors::Error;

/// Principals recognized by privileged operations across the workspace.
/// Each contract stores the address registered for the roles it checks.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Minter,
    Marketplace,
    Registry,
    RewardPool,
}

/// Central role gate: the caller must authenticate and match the address
/// registered for the role. Contract callers are authorized by the host's
/// direct-invoker rule when they pass their own address.
pub fn require_role(registered: &Address, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if registered != caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
