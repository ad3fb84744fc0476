use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Only the raffle owner can perform this action")]
    NotOwner,
    #[msg("Only the oracle authority can deliver randomness")]
    NotOracle,
    #[msg("Raffle is locked")]
    AlreadyLocked,
    #[msg("Token contract not set")]
    TokenContractNotSet,
    #[msg("Token mint is not the registered token contract or not mintable by the raffle")]
    InvalidTokenContract,
    #[msg("Raffle has not been configured")]
    NotConfigured,
    #[msg("Entry cost must be greater than zero")]
    InvalidEntryCost,
    #[msg("Total winners must be greater than zero")]
    InvalidWinnerCount,
    #[msg("Deposit period cannot start after end")]
    DepositPeriodInverted,
    #[msg("Minting cannot begin before deposit ends")]
    MintBeforeDepositEnd,
    #[msg("Mint period cannot end before it starts")]
    MintPeriodInverted,
    #[msg("Withdrawals cannot begin before minting ends")]
    WithdrawBeforeMintEnd,
    #[msg("Lockup period must exceed 1 week")]
    LockupTooShort,
    #[msg("Deposit window is closed")]
    WindowClosed,
    #[msg("Deposit must equal the entry cost")]
    WrongAmount,
    #[msg("Entrant has already deposited")]
    DuplicateEntry,
    #[msg("Raffle has reached its maximum number of entrants")]
    RaffleFull,
    #[msg("Deposit window is still open")]
    WindowOpen,
    #[msg("A randomness request is already pending")]
    RequestAlreadyPending,
    #[msg("Randomness has already been delivered")]
    SeedAlreadyDelivered,
    #[msg("Randomness request id does not match the outstanding request")]
    UnknownRequest,
    #[msg("Deposit window has not ended")]
    BeforeDepositEnd,
    #[msg("Minting has already started")]
    AfterMintStart,
    #[msg("Randomness has not been delivered")]
    SeedNotReady,
    #[msg("Not enough winner slots or candidates left")]
    OutOfCapacity,
    #[msg("Withdrawals have not opened")]
    TooEarly,
    #[msg("No balance to withdraw")]
    NoBalance,
    #[msg("Claiming is not active")]
    NotActive,
    #[msg("Caller did not win")]
    DidNotWin,
    #[msg("Token has already been claimed")]
    AlreadyClaimed,
    #[msg("Token mint failed")]
    MintFailed,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    #[msg("Invalid treasury account")]
    InvalidTreasury,
    #[msg("Candidate pool and entry ledger are out of sync")]
    LedgerCorrupted,
}
