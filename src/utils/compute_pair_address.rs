use crate::constants::PAIR_INIT_CODE_HASH;
use alloy_primitives::{keccak256, Address, B256};
use alloy_sol_types::SolValue;

/// Computes a pair address
///
/// The two token addresses are sorted ascending before hashing, so the result is independent of
/// argument order. The same ascending order determines which token the pair contract stores as
/// `token0`.
///
/// ## Arguments
///
/// * `factory`: The Uniswap V2 factory address
/// * `token_a`: The first token of the pair, irrespective of sort order
/// * `token_b`: The second token of the pair, irrespective of sort order
/// * `init_code_hash_manual_override`: Override the init code hash used to compute the pair
///   address if necessary
///
/// ## Returns
///
/// The computed pair address
///
/// ## Examples
///
/// ```
/// use alloy_primitives::{address, Address};
/// use uniswap_v2_sdk::prelude::*;
///
/// const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
/// let result = compute_pair_address(FACTORY_ADDRESS, USDC_ADDRESS, DAI_ADDRESS, None);
/// assert_eq!(result, address!("AE461cA67B15dc8dc81CE7615e0320dA1A9aB8D5"));
/// assert_eq!(
///     result,
///     compute_pair_address(FACTORY_ADDRESS, DAI_ADDRESS, USDC_ADDRESS, None)
/// );
/// ```
#[inline]
#[must_use]
pub fn compute_pair_address(
    factory: Address,
    token_a: Address,
    token_b: Address,
    init_code_hash_manual_override: Option<B256>,
) -> Address {
    assert_ne!(token_a, token_b, "ADDRESSES");
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let salt = keccak256((token_0, token_1).abi_encode_packed());
    factory.create2(salt, init_code_hash_manual_override.unwrap_or(PAIR_INIT_CODE_HASH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FACTORY_ADDRESS;
    use alloy_primitives::address;

    const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

    #[test]
    fn test_compute_pair_address_matches_mainnet_deployments() {
        assert_eq!(
            compute_pair_address(FACTORY_ADDRESS, USDC, DAI, None),
            address!("AE461cA67B15dc8dc81CE7615e0320dA1A9aB8D5")
        );
        assert_eq!(
            compute_pair_address(FACTORY_ADDRESS, USDC, WETH, None),
            address!("B4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc")
        );
        assert_eq!(
            compute_pair_address(FACTORY_ADDRESS, DAI, WETH, None),
            address!("A478c2975Ab1Ea89e8196811F51A7B7Ade33eB11")
        );
    }

    #[test]
    fn test_compute_pair_address_is_order_independent() {
        assert_eq!(
            compute_pair_address(FACTORY_ADDRESS, USDC, DAI, None),
            compute_pair_address(FACTORY_ADDRESS, DAI, USDC, None)
        );
    }

    #[test]
    fn test_compute_pair_address_honors_init_code_hash_override() {
        let override_hash = Some(keccak256(b"not the canonical pair bytecode"));
        assert_ne!(
            compute_pair_address(FACTORY_ADDRESS, USDC, DAI, override_hash),
            compute_pair_address(FACTORY_ADDRESS, USDC, DAI, None)
        );
    }

    #[test]
    #[should_panic(expected = "ADDRESSES")]
    fn test_compute_pair_address_rejects_identical_tokens() {
        compute_pair_address(FACTORY_ADDRESS, USDC, USDC, None);
    }
}
