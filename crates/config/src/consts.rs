/// Default name of the deployment config file.
pub const DEPLOY_CONFIG_FILE: &str = "deploy.yaml";

/// Env var overriding where runner sessions are persisted.
pub const RUNS_ROOT_ENV: &str = "ONFT_DEPLOY_RUNS_ROOT";

/// Env var carrying the deployer private key into the forge scripts.
pub const CONFIG_DEPLOYER_ENV: &str = "CONFIG_DEPLOYER";
