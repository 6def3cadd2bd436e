//! Tracing setup for examples and tools embedding the loader.

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();
}
