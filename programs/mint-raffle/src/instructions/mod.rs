pub mod claim_token;
pub mod configure_raffle;
pub mod deliver_seed;
pub mod enter_raffle;
pub mod initialize;
pub mod request_seed;
pub mod select_winners;
pub mod set_token_contract;
pub mod withdraw_entry_cost;
pub mod withdraw_owner_funds;

pub use claim_token::*;
pub use configure_raffle::*;
pub use deliver_seed::*;
pub use enter_raffle::*;
pub use initialize::*;
pub use request_seed::*;
pub use select_winners::*;
pub use set_token_contract::*;
pub use withdraw_entry_cost::*;
pub use withdraw_owner_funds::*;
