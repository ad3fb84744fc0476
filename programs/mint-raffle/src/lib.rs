use anchor_lang::prelude::*;
use instructions::*;
use state::RaffleConfig;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("9n8fyuwZPMdyZaDNE7DWujs3mXuTc3GeNNJidWqZW6XR");

#[program]
pub mod mint_raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, oracle: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, oracle)
    }

    pub fn set_token_contract(ctx: Context<SetTokenContract>) -> Result<()> {
        instructions::set_token_contract::set_token_contract(ctx)
    }

    pub fn configure_raffle(ctx: Context<ConfigureRaffle>, config: RaffleConfig) -> Result<()> {
        instructions::configure_raffle::configure_raffle(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn request_seed(ctx: Context<RequestSeed>) -> Result<()> {
        instructions::request_seed::request_seed(ctx)
    }

    pub fn deliver_seed(
        ctx: Context<DeliverSeed>,
        request_id: [u8; 32],
        seed: [u8; 32],
    ) -> Result<()> {
        instructions::deliver_seed::deliver_seed(ctx, request_id, seed)
    }

    pub fn select_winners(ctx: Context<SelectWinners>, count: u32) -> Result<()> {
        instructions::select_winners::select_winners(ctx, count)
    }

    pub fn withdraw_entry_cost(ctx: Context<WithdrawEntryCost>) -> Result<()> {
        instructions::withdraw_entry_cost::withdraw_entry_cost(ctx)
    }

    pub fn withdraw_owner_funds(ctx: Context<WithdrawOwnerFunds>) -> Result<()> {
        instructions::withdraw_owner_funds::withdraw_owner_funds(ctx)
    }

    pub fn claim_token(ctx: Context<ClaimToken>) -> Result<()> {
        instructions::claim_token::claim_token(ctx)
    }
}
