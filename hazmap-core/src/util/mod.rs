pub mod filter;

use std::fmt::Display;

/// Retries a fallible operation up to `attempts` times.
///
/// Failed attempts are logged; the error of the last attempt is returned.
pub fn retry_n<T, E, F>(attempts: usize, mut f: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    debug_assert!(attempts > 0);
    let mut attempt = 1;
    loop {
        match f() {
            Ok(res) => return Ok(res),
            Err(err) if attempt < attempts => {
                log::warn!("Attempt {attempt}/{attempts} failed: {err}");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
