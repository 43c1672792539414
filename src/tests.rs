//! Shared test fixtures.

use alloy_primitives::{address, Address};
use once_cell::sync::Lazy;
use uniswap_sdk_core::{prelude::*, token};

pub const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
pub const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const WETH_ADDRESS: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

pub static TOKEN0: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "0000000000000000000000000000000000000001",
        18,
        "t0",
        "token0"
    )
});
pub static TOKEN1: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "0000000000000000000000000000000000000002",
        18,
        "t1",
        "token1"
    )
});
pub static USDC: Lazy<Token> = Lazy::new(|| token!(1, USDC_ADDRESS, 6, "USDC", "USD Coin"));
pub static DAI: Lazy<Token> = Lazy::new(|| token!(1, DAI_ADDRESS, 18, "DAI", "DAI Stablecoin"));
pub static POLYGON_DAI: Lazy<Token> = Lazy::new(|| {
    token!(
        137,
        "8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063",
        18,
        "DAI",
        "(PoS) Dai Stablecoin"
    )
});
