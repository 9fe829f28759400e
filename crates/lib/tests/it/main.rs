/*! Integration tests for the tracker library.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - account: Tests for the account store and password hashing
 * - record: Tests for record stores and the CSV file format
 * - session: Tests for the session manager, including end-to-end flows
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tracker=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod account;
mod helpers;
mod record;
mod session;
