use std::time::Duration;

/// Format a number into a readable string with SI suffix.
///
/// # Examples
/// ```rust
/// # use twenty48_lib::utils::format_number;
///
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(1.1), "1.1");
/// assert_eq!(format_number(1000.0), "1k");
/// assert_eq!(format_number(50000.0), "50k");
/// assert_eq!(format_number(1250000.0), "1.25M");
/// ```
#[allow(
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss,
  clippy::missing_panics_doc
)]
pub fn format_number(input: f32) -> String {
  const SUFFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

  let exponent = if input < 1000.0 {
    0
  } else {
    (input.log(1000.0).floor() as usize).min(SUFFIXES.len() - 1)
  };

  let scaled = input / 1000f32.powi(exponent as i32);

  let number = format!("{scaled:.2}")
    .trim_end_matches('0')
    .trim_end_matches('.')
    .to_owned();

  format!("{number}{}", SUFFIXES[exponent])
}

/// Format a duration with a unit that keeps the number short.
///
/// ```rust
/// # use std::time::Duration;
/// # use twenty48_lib::utils::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(850)), "850 \u{03bc}s");
/// assert_eq!(format_duration(Duration::from_millis(420)), "420 ms");
/// assert_eq!(format_duration(Duration::from_secs(42)), "42 s");
/// ```
pub fn format_duration(duration: Duration) -> String {
  let micros = duration.as_micros();

  if micros < 10_000 {
    format!("{micros} \u{03bc}s")
  } else if micros < 10_000_000 {
    format!("{} ms", micros / 1000)
  } else {
    format!("{} s", micros / 1_000_000)
  }
}
