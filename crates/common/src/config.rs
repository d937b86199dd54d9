use once_cell::sync::OnceCell;

static CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Process-wide CLI settings, set once at startup.
#[derive(Debug, Default)]
pub struct GlobalConfig {
    pub verbose: bool,
}

pub fn init_global_config(config: GlobalConfig) {
    // Second initialization is a no-op; tests may race on this.
    let _ = CONFIG.set(config);
}

pub fn global_config() -> &'static GlobalConfig {
    CONFIG.get_or_init(GlobalConfig::default)
}
