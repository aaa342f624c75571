use std::io::{self, BufRead, Write};

/// Ask a yes/no question and read one line from stdin.
///
/// Only a `y` or `Y` reply confirms; anything else, including EOF, declines.
pub fn confirm(question: &str) -> bool {
    print!("{}", question);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}
