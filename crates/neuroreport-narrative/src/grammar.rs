/// Join items as running prose: "a", "a and b", "a, b, and c".
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// "250Hz", "1kHz", "1.5kHz".
pub fn format_frequency(hz: u32) -> String {
    if hz >= 1000 {
        format!("{}kHz", f64::from(hz) / 1000.0)
    } else {
        format!("{hz}Hz")
    }
}

/// Frequencies as a prose list in Hz: "250Hz and 500Hz".
pub fn frequency_list(frequencies: &[u32]) -> String {
    let labels: Vec<String> = frequencies.iter().map(|f| format!("{f}Hz")).collect();
    join_list(&labels)
}

