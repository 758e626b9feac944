//! Yes/no confirmation on a line-oriented input.
use std::io::{self, BufRead, Write};

/// Ask `msg` up to `attempts` times.
///
/// An answer of one to four characters starting with `y` accepts, starting
/// with `n` declines; anything else asks again. End of input declines.
/// With `assume_yes` the prompt is still printed, followed by `y`.
pub fn confirm<R, W>(
    input: &mut R,
    out: &mut W,
    msg: &str,
    attempts: u32,
    assume_yes: bool,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    for _ in 0..attempts {
        write!(out, "{msg} [y/N]: ")?;
        let answer = if assume_yes {
            writeln!(out, "y")?;
            String::from("y")
        } else {
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            line.trim().to_lowercase()
        };

        if (1..=4).contains(&answer.len()) {
            match answer.as_bytes()[0] {
                b'y' => return Ok(true),
                b'n' => return Ok(false),
                _ => {}
            }
        }
    }
    Ok(false)
}
