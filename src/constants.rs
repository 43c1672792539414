use alloy_primitives::{address, b256, Address, B256, ChainId};
use uniswap_sdk_core::prelude::ChainId as Chain;

pub const FACTORY_ADDRESS: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

pub const ADDRESS_ZERO: Address = Address::ZERO;

pub const PAIR_INIT_CODE_HASH: B256 =
    b256!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// Public endpoint backing [`default_provider`](crate::fetcher::default_provider) for callers
/// that do not supply their own transport.
pub fn default_rpc_url(chain_id: ChainId) -> Option<&'static str> {
    const MAINNET: ChainId = Chain::MAINNET as u64;
    const BNB: ChainId = Chain::BNB as u64;
    const POLYGON: ChainId = Chain::POLYGON as u64;
    const SEPOLIA: ChainId = Chain::SEPOLIA as u64;
    match chain_id {
        MAINNET => Some("https://ethereum-rpc.publicnode.com"),
        BNB => Some("https://bsc-rpc.publicnode.com"),
        POLYGON => Some("https://polygon-bor-rpc.publicnode.com"),
        SEPOLIA => Some("https://ethereum-sepolia-rpc.publicnode.com"),
        _ => None,
    }
}
