use crate::prelude::{Error, *};
use alloy_primitives::{Address, ChainId, B256};
use uniswap_sdk_core::prelude::*;

/// Represents a V2 pair and its two reserves
///
/// The two [`CurrencyAmount`]s are stored sorted by token address, matching the storage order of
/// the deployed pair contract, and each amount is the reserve held for that token specifically.
#[derive(Clone, Debug)]
pub struct Pair {
    token_amounts: [CurrencyAmount<Token>; 2],
    /// The ERC-20 describing this pair's liquidity token, deployed at the pair address.
    pub liquidity_token: Token,
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.token0().equals(other.token0()) && self.token1().equals(other.token1())
    }
}

impl Pair {
    /// Returns the address of the pair holding the two tokens, irrespective of argument order
    ///
    /// ## Arguments
    ///
    /// * `token_a`: One of the tokens in the pair
    /// * `token_b`: The other token in the pair
    /// * `init_code_hash_manual_override`: Override the init code hash used to compute the pair
    ///   address if necessary
    /// * `factory_address_override`: Override the factory address if necessary
    pub fn get_address(
        token_a: &Token,
        token_b: &Token,
        init_code_hash_manual_override: Option<B256>,
        factory_address_override: Option<Address>,
    ) -> Address {
        compute_pair_address(
            factory_address_override.unwrap_or(FACTORY_ADDRESS),
            token_a.address(),
            token_b.address(),
            init_code_hash_manual_override,
        )
    }

    /// Constructs a pair from the reserves of its two tokens
    ///
    /// The amounts may be passed in either order; they are sorted into canonical order. Fails if
    /// the two tokens are on different chains or share an address.
    pub fn new(
        currency_amount_a: CurrencyAmount<Token>,
        currency_amount_b: CurrencyAmount<Token>,
    ) -> Result<Self, Error> {
        let token_amounts = if currency_amount_a
            .meta
            .currency
            .sorts_before(&currency_amount_b.meta.currency)?
        {
            [currency_amount_a, currency_amount_b]
        } else {
            [currency_amount_b, currency_amount_a]
        };
        let liquidity_token = Token::new(
            token_amounts[0].meta.currency.chain_id(),
            Self::get_address(
                &token_amounts[0].meta.currency,
                &token_amounts[1].meta.currency,
                None,
                None,
            ),
            18,
            Some("UNI-V2".to_string()),
            Some("Uniswap V2".to_string()),
            0,
            0,
        );
        Ok(Self {
            token_amounts,
            liquidity_token,
        })
    }

    pub fn chain_id(&self) -> ChainId {
        self.token0().chain_id()
    }

    /// The token that sorts before the other, stored in slot 0 of the pair contract
    pub fn token0(&self) -> &Token {
        &self.token_amounts[0].meta.currency
    }

    /// The token that sorts after the other, stored in slot 1 of the pair contract
    pub fn token1(&self) -> &Token {
        &self.token_amounts[1].meta.currency
    }

    pub fn reserve0(&self) -> &CurrencyAmount<Token> {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &CurrencyAmount<Token> {
        &self.token_amounts[1]
    }

    /// Returns true if the token is either token0 or token1
    ///
    /// ## Arguments
    ///
    /// * `token`: The token to check
    pub fn involves_token(&self, token: &Token) -> bool {
        token.equals(self.token0()) || token.equals(self.token1())
    }

    /// Returns the reserve held by the pair for the given token
    ///
    /// ## Arguments
    ///
    /// * `token`: The token to return the reserve of
    pub fn reserve_of(&self, token: &Token) -> Result<&CurrencyAmount<Token>, Error> {
        if token.equals(self.token0()) {
            Ok(self.reserve0())
        } else if token.equals(self.token1()) {
            Ok(self.reserve1())
        } else {
            Err(Error::InvalidToken)
        }
    }

    /// Returns the current mid price of the pair in terms of token0, i.e. the ratio of reserve1
    /// to reserve0
    pub fn token0_price(&self) -> Price<Token, Token> {
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.reserve0().quotient(),
            self.reserve1().quotient(),
        )
    }

    /// Returns the current mid price of the pair in terms of token1, i.e. the ratio of reserve0
    /// to reserve1
    pub fn token1_price(&self) -> Price<Token, Token> {
        Price::new(
            self.token1().clone(),
            self.token0().clone(),
            self.reserve1().quotient(),
            self.reserve0().quotient(),
        )
    }

    /// Returns the price of the given token in terms of the other token in the pair
    ///
    /// ## Arguments
    ///
    /// * `token`: The token to return the price of
    pub fn price_of(&self, token: &Token) -> Result<Price<Token, Token>, Error> {
        if token.equals(self.token0()) {
            Ok(self.token0_price())
        } else if token.equals(self.token1()) {
            Ok(self.token1_price())
        } else {
            Err(Error::InvalidToken)
        }
    }
}
