pub use hexmap_test_macros::test;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logger_with_env_like() {
    let env = env_logger::Env::default().default_filter_or("info");
    // tests share a process, another harness may have installed a logger already
    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

/// Test setup executed before each test.
pub fn setup_test() {
    INIT.call_once(|| {
        init_logger_with_env_like();
        color_backtrace::install();
        log::trace!("test setup completed");
    });
}
