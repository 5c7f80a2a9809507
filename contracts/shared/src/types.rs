use soroban_sdk::{contracttype, Address, String, Vec};

use crate::constants::QUOTA_TOTAL;

/// Token and currency amounts.
pub type Amount = i128;

/// One seller of an installment contract and its share of the allocation,
/// expressed as a percentage of `units_total`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerQuota {
    pub seller: Address,
    pub quota: u32,
}

/// Arguments taken by the registry when a new installment contract is
/// registered by the minter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractRegistration {
    /// Unique contract identifier, chosen by the minter
    pub id: u64,
    /// Sellers and their quotas; quotas must sum to 100
    pub sellers: Vec<SellerQuota>,
    /// Designated buyers, eligible for interest-inclusive pricing
    pub buyers: Vec<Address>,
    /// Metadata URI shared by every unit of the contract
    pub metadata_uri: String,
    /// Number of installment units; must be a positive multiple of 100
    pub units_total: u64,
    /// Price of a single unit in USD
    pub unit_price_usd: Amount,
    /// Reward token amount paid out per purchased unit
    pub reward_per_unit: Amount,
}

/// An installment-sale contract as stored by the registry.
///
/// Units occupy the global id range `[unit_from, unit_to)`; `cursor` is the
/// next unit id to be sold and is shared by designated buyers and third
/// parties alike.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleContract {
    pub id: u64,
    pub sellers: Vec<SellerQuota>,
    pub buyers: Vec<Address>,
    pub metadata_uri: String,
    pub units_total: u64,
    pub unit_price_usd: Amount,
    pub reward_per_unit: Amount,
    pub unit_from: u64,
    pub unit_to: u64,
    pub cursor: u64,
    pub closed: bool,
}

impl SaleContract {
    /// Units delivered to buyers so far.
    pub fn progress(&self) -> u64 {
        self.cursor - self.unit_from
    }

    /// Whether every unit has been sold.
    pub fn completed(&self) -> bool {
        self.progress() == self.units_total
    }

    /// Whether `unit_id` belongs to this contract's range.
    pub fn contains_unit(&self, unit_id: u64) -> bool {
        unit_id >= self.unit_from && unit_id < self.unit_to
    }

    /// Whether `address` is one of the contract's designated buyers.
    pub fn is_buyer(&self, address: &Address) -> bool {
        self.buyers.iter().any(|b| b == *address)
    }

    /// The seller whose quota slot covers `unit_id`.
    ///
    /// Quota ranges are laid out in seller declaration order, so the slot of
    /// a unit never moves once the contract is created.
    pub fn seller_of_slot(&self, unit_id: u64) -> Option<Address> {
        if !self.contains_unit(unit_id) {
            return None;
        }
        let relative = unit_id - self.unit_from;
        let mut upper: u64 = 0;
        for entry in self.sellers.iter() {
            upper += self.units_total * entry.quota as u64 / QUOTA_TOTAL as u64;
            if relative < upper {
                return Some(entry.seller);
            }
        }
        None
    }
}

/// A materialized installment unit. Units are lazily created: a record
/// exists only once the unit has been transferred out of its seller slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub id: u64,
    pub contract_id: u64,
    pub owner: Address,
}

/// Presale lifecycle. `Succeeded`/`Failed` are derived from `sold` against
/// the soft cap at close time, never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresaleStatus {
    Open,
    Succeeded,
    Failed,
}
