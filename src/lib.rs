//! # uniswap-v2-sdk
//!
//! A Rust SDK for building applications on top of Uniswap V2.
//! Migration from the TypeScript [Uniswap/v2-sdk](https://github.com/Uniswap/v2-sdk).
//!
//! ## Features
//!
//! - Usage of [alloy-rs](https://github.com/alloy-rs) types and
//!   [uniswap-sdk-core](https://docs.rs/uniswap-sdk-core) entities
//! - Offline [`Pair`] construction and pure CREATE2 pair address derivation in
//!   [`compute_pair_address`](./src/utils/compute_pair_address.rs)
//! - A [`fetcher`](./src/fetcher.rs) module for constructing [`Token`]s and [`Pair`]s
//!   from on-chain data through any alloy provider, amortizing repeated decimals
//!   lookups with a [`DecimalsCache`]

pub mod abi;
pub mod constants;
pub mod entities;
pub mod fetcher;
pub mod utils;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{abi::*, constants::*, entities::*, fetcher::*, utils::*, Error};
}
#[cfg(doc)]
use crate::prelude::*;
#[cfg(doc)]
use uniswap_sdk_core::prelude::Token;

use alloy::contract::Error as ContractError;
use alloy_primitives::{Address, ChainId};
use uniswap_sdk_core::error::Error as CoreError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Thrown when an error occurs in the core library.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Thrown when the token passed to [`Pair::reserve_of`] or [`Pair::price_of`] is not one of
    /// the pair's tokens.
    #[error("Invalid token")]
    InvalidToken,

    /// Thrown when the two tokens passed to [`fetch_pair_data`] belong to different chains.
    /// Raised before any network access.
    #[error("Chain ids do not match: {0} and {1}")]
    ChainMismatch(ChainId, ChainId),

    /// Thrown when the decimals read for a token fails. The decimals cache is left unmodified.
    #[error("Failed to fetch decimals for token {address} on chain {chain_id}")]
    MetadataFetch {
        chain_id: ChainId,
        address: Address,
        #[source]
        source: ContractError,
    },

    /// Thrown when the reserves read against the derived pair address fails.
    #[error("Failed to fetch reserves for pair {address}")]
    PairFetch {
        address: Address,
        #[source]
        source: ContractError,
    },

    /// Thrown when no default RPC endpoint is known for a chain.
    #[error("No default RPC endpoint for chain {0}")]
    UnsupportedChain(ChainId),
}
