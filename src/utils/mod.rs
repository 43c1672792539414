mod compute_pair_address;
pub use compute_pair_address::compute_pair_address;
