//! Logger setup shared by the binaries

/// Default filter: status lines from the tool crates, warnings from everything else
const DEFAULT_FILTER: &str = "warn,sg_tools=info,sg_core=info,sg_config=info,sg_shaders=info,sg_testdata=info";

/// Initialise `env_logger`, honouring `RUST_LOG` when set
///
/// Called once at the top of each binary's `main`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
