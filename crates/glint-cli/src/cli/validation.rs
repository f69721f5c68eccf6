/// Parse a listening port.
///
/// Port 0 is accepted and asks the OS for any free port.
///
/// # Errors
///
/// Returns an error message if the value is not a number in `0..=65535`.
pub fn parse_port(s: &str) -> Result<u16, String> {
    s.trim()
        .parse::<u16>()
        .map_err(|_| format!("Port must be a number between 0 and 65535: '{}'", s))
}

/// Parse and validate the debounce quiet period in milliseconds.
///
/// # Errors
///
/// Returns an error message if the value is not a positive integer.
pub fn parse_debounce_ms(s: &str) -> Result<u64, String> {
    let ms = s
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("Debounce must be a whole number of milliseconds: '{}'", s))?;

    if ms == 0 {
        return Err("Debounce must be at least 1 millisecond".to_string());
    }

    Ok(ms)
}
