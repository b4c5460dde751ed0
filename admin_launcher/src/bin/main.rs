/// Main entry point for the SkyFly airlines admin console.
///
/// Opens the admin window and connects it to the SkyFly backend. The
/// operator must already be logged in: the session token is read from
/// the cookie store on every backend call.
///
/// # Usage
///
/// ```sh
/// cargo run
/// ```
///
/// # Environment
///
/// - `SKYFLY_API_URL`: backend root, defaults to the production API.
/// - `SKYFLY_COOKIE_FILE`: cookie store holding the `_token` cookie,
///   defaults to `cookies.txt` in the working directory.
/// - `SKYFLY_LOG_DIR`: directory for the diagnostics log file, defaults
///   to the working directory.
///
/// # Return Values
///
/// - `Ok(())` - The console was closed normally.
/// - `Err(String)` - The window or the backend client could not be set up.
fn main() -> Result<(), String> {
    graphical_interface::run().map_err(|e| e.to_string())
}
