/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the tracing subscriber from `RUST_LOG`
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
