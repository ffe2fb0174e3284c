/*! Integration tests for messbot.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - menu: Tests for the Menu and Weekly Menu catalogs
 * - dispatcher: Tests for keyword classification and reply rendering
 * - app: Tests for chat replies, feedback reset and view state driven by a FixedClock
 * - config: Tests for loading BotConfig from disk
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("messbot=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod app;
mod config;
mod dispatcher;
mod helpers;
mod menu;
