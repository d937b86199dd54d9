//! Locations of the forge deploy scripts, relative to the contracts root.
//! A `:Contract` suffix selects a contract inside the script file.

pub const MOCK_TOKEN_SCRIPT: &str = "script/MockToken.s.sol";

pub const DISTRIBUTOR_SCRIPT: &str = "script/Distributor.s.sol:DistributorScript";
pub const STREAMING_NFT_SCRIPT: &str = "script/Distributor.s.sol:StreamingNFTScript";
pub const CLAIM_BATCH_PROCESSOR_SCRIPT: &str = "script/Distributor.s.sol:ClaimBatchProcessorScript";

pub const WRAPPED_NFT_SCRIPT: &str = "script/WrappedNFT.s.sol:WrappedNFTScript";
pub const WRAPPED_NFT_EID_SETUP_SCRIPT: &str = "script/WrappedNFT.s.sol:WrappedNFTEidSetupScript";

pub const BERA_NFT_SCRIPT: &str = "script/BeraNft.s.sol:BeraNftScript";
pub const BERA_NFT_EID_SETUP_SCRIPT: &str = "script/BeraNft.s.sol:BeraNftEidSetupScript";

pub const ONFT_ADAPTER_SCRIPT: &str = "script/OnftAdapter.s.sol:OnftAdapterScript";
pub const ONFT_ADAPTER_EID_SETUP_SCRIPT: &str =
    "script/OnftAdapter.s.sol:OnftAdapterEidSetupScript";
