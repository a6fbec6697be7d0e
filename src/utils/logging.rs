use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

pub fn init_logger(level: Level) {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    // Only the first call installs; later calls keep the existing subscriber
    let _ = set_global_default(subscriber);
}
