use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvInput = 4,
    NotFound = 5,

    // Reward token errors
    OwnerCapExceeded = 6,
    PoolCapExceeded = 7,
    InsufBalance = 8,
    BurnExceedsPoolMinted = 9,

    // Reward pool errors
    InsufLiquidity = 10,
    NotEnoughReserved = 11,

    // Installment registry errors
    DupContract = 12,
    BadQuota = 13,
    BadUnitsAmount = 14,
    NotTokenOwner = 15,
    OpNotAllowed = 16,

    // Marketplace errors
    BadInterestRate = 17,
    InsufFunds = 18,
    TokenHasNoOwner = 19,
    CallerOwnsToken = 20,

    // Presale errors
    PresaleClosed = 21,
    PresaleOpen = 22,
    PresaleFailed = 23,
    PresaleNotFailed = 24,
    CapReached = 25,
    NothingToClaim = 26,
    NothingToRefund = 27,
}
