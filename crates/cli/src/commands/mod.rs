pub mod deploy;
pub mod nft;
pub mod peer;
pub mod runs;
