//! ## Fetcher
//! This module constructs [`Token`] and [`Pair`] instances from on-chain data through any alloy
//! provider: a token resolver backed by a [`DecimalsCache`] and a reserve fetcher that attributes
//! each reserve to the token it belongs to, regardless of caller argument order.

use crate::prelude::*;
use alloy::{
    network::Network,
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use alloy_primitives::{address, Address, ChainId};
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};
use uniswap_sdk_core::prelude::{BaseCurrencyCore, ChainId as Chain, CurrencyAmount, Token};

const MAINNET: ChainId = Chain::MAINNET as u64;

/// Well-known tokens whose decimals never need an on-chain read.
const SEEDED_DECIMALS: &[(ChainId, Address, u8)] = &[
    (MAINNET, address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), 18), // WETH
    (MAINNET, address!("6B175474E89094C44Da98b954EedeAC495271d0F"), 18), // DAI
    (MAINNET, address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), 6),  // USDC
    (MAINNET, address!("dAC17F958D2ee523a2206206994597C13D831ec7"), 6),  // USDT
    (MAINNET, address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599"), 8),  // WBTC
    (MAINNET, address!("E0B7927c4aF23765Cb51314A0E0521A9645F0E2A"), 9),  // DGD
    (MAINNET, address!("B6eD7644C69416d67B522e20bC294A9a9B405B31"), 8),  // 0xBTC
];

/// Cache of token decimals keyed by chain id and token address.
///
/// Decimals are immutable once a token contract is deployed, so entries are never evicted and the
/// cache only grows. [`Address`] keys are fixed bytes, so differently-cased spellings of the same
/// address collapse to a single entry. Interior locking makes the cache shareable across
/// concurrent resolutions; redundant same-key writes are harmless since the values agree.
#[derive(Debug)]
pub struct DecimalsCache(RwLock<HashMap<(ChainId, Address), u8>>);

impl Default for DecimalsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalsCache {
    /// Creates a cache pre-seeded with well-known mainnet tokens.
    pub fn new() -> Self {
        Self(RwLock::new(
            SEEDED_DECIMALS
                .iter()
                .map(|(chain_id, address, decimals)| ((*chain_id, *address), *decimals))
                .collect(),
        ))
    }

    /// Creates a cache with no seed entries.
    pub fn empty() -> Self {
        Self(RwLock::new(HashMap::new()))
    }

    pub fn get(&self, chain_id: ChainId, address: Address) -> Option<u8> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(chain_id, address))
            .copied()
    }

    /// Inserts or overwrites an entry. Last write wins, so a poisoned lock is recovered rather
    /// than propagated; concurrent writers are expected to agree on the value.
    pub fn insert(&self, chain_id: ChainId, address: Address, decimals: u8) {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((chain_id, address), decimals);
    }

    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

/// Optional ERC-20 metadata passed through verbatim to the constructed [`Token`].
///
/// Neither field is fetched on-chain; an absent field stays absent on the token.
#[derive(Clone, Debug, Default)]
pub struct TokenMetadata {
    pub symbol: Option<String>,
    pub name: Option<String>,
}

/// Returns an HTTP provider over a public endpoint for the given chain, for callers that do not
/// bring their own transport. Fails with [`Error::UnsupportedChain`] if no endpoint is known for
/// the chain.
pub fn default_provider(chain_id: ChainId) -> Result<impl Provider + Clone, Error> {
    let url = default_rpc_url(chain_id).ok_or(Error::UnsupportedChain(chain_id))?;
    let url: Url = url.parse().expect("static endpoint urls are valid");
    Ok(ProviderBuilder::new().on_http(url))
}

/// Fetches information for a given token on the given chain, using the given provider
///
/// On a cache hit the token is constructed without network access. On a miss exactly one
/// `decimals()` read is issued and the result is stored in the cache before the token is
/// returned; a failed read leaves the cache untouched.
///
/// ## Arguments
///
/// * `cache`: The decimals cache consulted and populated by the lookup
/// * `chain_id`: Chain of the token
/// * `address`: Address of the token on the chain
/// * `provider`: The provider used to fetch the token
/// * `meta`: Optional symbol and name of the token, passed through verbatim
pub async fn fetch_token_data<N, P>(
    cache: &DecimalsCache,
    chain_id: ChainId,
    address: Address,
    provider: P,
    meta: TokenMetadata,
) -> Result<Token, Error>
where
    N: Network,
    P: Provider<N>,
{
    let decimals = match cache.get(chain_id, address) {
        Some(decimals) => decimals,
        None => {
            let decimals = IERC20::new(address, provider)
                .decimals()
                .call()
                .await
                .map_err(|source| Error::MetadataFetch {
                    chain_id,
                    address,
                    source,
                })?
                ._0;
            cache.insert(chain_id, address, decimals);
            decimals
        }
    };
    Ok(Token::new(
        chain_id, address, decimals, meta.symbol, meta.name, 0, 0,
    ))
}

/// Fetches the reserves of the pair holding the two tokens and constructs a [`Pair`]
///
/// The pair address is derived deterministically from the two token identities, and exactly one
/// `getReserves()` read is issued against it. The pair contract reports reserves in its own
/// storage order, which is the ascending address order also used to derive the pair address;
/// the returned [`Pair`] attributes each reserve to the corresponding token no matter the order
/// the caller passed them in.
///
/// ## Arguments
///
/// * `token_a`: One of the tokens in the pair
/// * `token_b`: The other token in the pair
/// * `provider`: The provider used to fetch the reserves
pub async fn fetch_pair_data<N, P>(
    token_a: Token,
    token_b: Token,
    provider: P,
) -> Result<Pair, Error>
where
    N: Network,
    P: Provider<N>,
{
    if token_a.chain_id() != token_b.chain_id() {
        return Err(Error::ChainMismatch(token_a.chain_id(), token_b.chain_id()));
    }
    // Pure, so evaluated before any network access; also rejects equal addresses.
    let a_is_token0 = token_a.sorts_before(&token_b)?;
    let address = Pair::get_address(&token_a, &token_b, None, None);
    let reserves = IUniswapV2Pair::new(address, provider)
        .getReserves()
        .call()
        .await
        .map_err(|source| Error::PairFetch { address, source })?;
    let (reserve_a, reserve_b) = if a_is_token0 {
        (reserves.reserve0, reserves.reserve1)
    } else {
        (reserves.reserve1, reserves.reserve0)
    };
    Pair::new(
        CurrencyAmount::from_raw_amount(token_a, reserve_a.to::<u128>())?,
        CurrencyAmount::from_raw_amount(token_b, reserve_b.to::<u128>())?,
    )
}
