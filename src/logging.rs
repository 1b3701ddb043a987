use env_logger::Env;

pub const DEFAULT_FILTER: &str = "warn";

pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).init();
}
