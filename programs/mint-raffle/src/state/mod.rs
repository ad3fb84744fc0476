pub use candidate_pool::*;
pub use config::*;
pub use entry::*;
pub use raffle::*;
pub use randomness::*;
pub use treasury::*;

pub mod candidate_pool;
pub mod config;
pub mod entry;
pub mod raffle;
pub mod randomness;
pub mod treasury;
