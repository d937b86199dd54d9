use std::path::PathBuf;

use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::traits::FileConfig;

/// Connection parameters for one chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,
    /// LayerZero endpoint contract on this chain.
    pub lz_endpoint: Address,
    /// LayerZero endpoint id of this chain.
    pub lz_eid: u32,
}

/// One StreamingNFT deployment, keyed by the credential NFT it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamingNftParams {
    pub credential_nft: Address,
    /// Token ids excluded from the allocation. Serialized as 0x-hex.
    #[serde(default)]
    pub blacklisted_token_ids: Vec<U256>,
    /// Stream allocation per NFT, in wei. Serialized as 0x-hex.
    pub allocation_per_nft: U256,
}

/// Deployment configuration, loaded once at startup.
///
/// Every external parameter the deploy scripts need is a named field here;
/// loading fails with a descriptive error when a required field is absent
/// instead of falling back to ambient defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub ethereum: ChainConfig,
    pub berachain: ChainConfig,
    /// Trusted signer for distributor claims.
    pub signer_addr: Address,
    /// StreamingNFT deployments performed by `deploy all`.
    #[serde(default)]
    pub streaming_nfts: Vec<StreamingNftParams>,
    /// Foundry project root holding the deploy scripts. Defaults to the
    /// current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts_path: Option<PathBuf>,
}

impl FileConfig for DeployConfig {}

impl DeployConfig {
    pub fn contracts_root(&self) -> PathBuf {
        self.contracts_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ReadConfig, SaveConfig};
    use xshell::Shell;

    const EXAMPLE: &str = r#"
ethereum:
  rpc_url: https://eth.example
  lz_endpoint: "0x1a44076050125825900e736c501f859c50fE728c"
  lz_eid: 30101
berachain:
  rpc_url: https://bera.example
  lz_endpoint: "0x6F475642a6e85809B1c36Fa62763669b1b48DD5B"
  lz_eid: 30362
signer_addr: "0x000000000000000000000000000000000000dEaD"
streaming_nfts:
  - credential_nft: "0x6c9612Beb7be2c16359803898df830C8b9b5Cde7"
    blacklisted_token_ids: ["0x1", "0x7"]
    allocation_per_nft: "0xde0b6b3a7640000"
"#;

    #[test]
    fn test_parses_full_config() {
        let config: DeployConfig = serde_yaml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.ethereum.lz_eid, 30101);
        assert_eq!(config.berachain.lz_eid, 30362);
        assert_eq!(config.streaming_nfts.len(), 1);
        assert_eq!(
            config.streaming_nfts[0].allocation_per_nft,
            U256::exp10(18)
        );
        assert!(config.contracts_path.is_none());
    }

    #[test]
    fn test_missing_field_is_descriptive() {
        let err = serde_yaml::from_str::<DeployConfig>("ethereum:\n  rpc_url: x\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing field"), "unexpected error: {err}");
    }

    #[test]
    fn test_file_round_trip() {
        let shell = Shell::new().unwrap();
        let dir = shell.create_temp_dir().unwrap();
        let path = dir.path().join("deploy.yaml");

        let config: DeployConfig = serde_yaml::from_str(EXAMPLE).unwrap();
        config.save(&shell, &path).unwrap();
        let reloaded = DeployConfig::read(&shell, &path).unwrap();
        assert_eq!(reloaded.signer_addr, config.signer_addr);
        assert_eq!(reloaded.ethereum.rpc_url, config.ethereum.rpc_url);
    }

    #[test]
    fn test_read_error_names_the_file() {
        let shell = Shell::new().unwrap();
        let err = DeployConfig::read(&shell, "/nonexistent/deploy.yaml").unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/deploy.yaml"));
    }
}
