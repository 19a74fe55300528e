//! Interactive read-evaluate loop.

use std::io::Write;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::SimulatorError;
use crate::estimate::CrackEstimate;
use crate::profiles::{ATTACKER_PROFILES, AttackerProfile};
use crate::report::{write_banner, write_report};

pub const PROMPT: &str = "\nEnter a password to test (or 'q' to quit): ";
pub const STOPPED_NOTICE: &str = "\nSimulator stopped.";
const QUIT_SENTINEL: &str = "q";

/// What the loop does after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user typed the quit sentinel.
    Quit,
    /// An interrupt arrived while waiting for input.
    Interrupted,
    /// Stdin reached end of file.
    InputClosed,
}

/// Outcome of one wait for input.
#[cfg(feature = "async")]
enum Input {
    Line(String),
    Interrupted,
    Closed,
    Failed(std::io::Error),
}

/// Console session that evaluates passwords against a set of attacker profiles.
pub struct Simulator<'a, W: Write> {
    out: W,
    profiles: &'a [AttackerProfile],
}

impl<W: Write> Simulator<'static, W> {
    pub fn new(out: W) -> Self {
        Self::with_profiles(out, &ATTACKER_PROFILES)
    }
}

impl<'a, W: Write> Simulator<'a, W> {
    pub fn with_profiles(out: W, profiles: &'a [AttackerProfile]) -> Self {
        Self { out, profiles }
    }

    pub fn write_banner(&mut self) -> Result<(), SimulatorError> {
        write_banner(&mut self.out, self.profiles)?;
        Ok(())
    }

    pub fn write_prompt(&mut self) -> Result<(), SimulatorError> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Handles one line of input, without its line terminator.
    ///
    /// # Returns
    /// - `Step::Quit` for `q` / `Q`, with nothing written
    /// - `Step::Continue` for an empty line, with nothing written
    /// - `Step::Continue` after writing a report for anything else
    pub fn handle_line(&mut self, line: &str) -> Result<Step, SimulatorError> {
        if line.eq_ignore_ascii_case(QUIT_SENTINEL) {
            return Ok(Step::Quit);
        }
        if line.is_empty() {
            return Ok(Step::Continue);
        }

        let password = SecretString::new(line.into());
        let estimate = CrackEstimate::new(&password);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Evaluated password: length {}, character set {}",
            estimate.length,
            estimate.charset_size
        );

        write_report(&mut self.out, &estimate, self.profiles)?;
        self.out.flush()?;
        Ok(Step::Continue)
    }

    /// Runs the prompt loop until quit, interrupt, or end of input.
    ///
    /// Cancelling `token` ends the session at the next wait for input, after
    /// printing a stop notice.
    #[cfg(feature = "async")]
    pub async fn run(
        &mut self,
        lines: &mut mpsc::Receiver<std::io::Result<String>>,
        token: CancellationToken,
    ) -> Result<Exit, SimulatorError> {
        #[cfg(feature = "tracing")]
        tracing::info!("Simulator session started");

        let exit = loop {
            self.write_prompt()?;

            let input = tokio::select! {
                biased;
                _ = token.cancelled() => Input::Interrupted,
                next = lines.recv() => match next {
                    Some(Ok(line)) => Input::Line(line),
                    Some(Err(e)) => Input::Failed(e),
                    None => Input::Closed,
                },
            };

            match input {
                Input::Line(line) => {
                    if self.handle_line(&line)? == Step::Quit {
                        break Exit::Quit;
                    }
                }
                Input::Interrupted => {
                    writeln!(self.out, "{}", STOPPED_NOTICE)?;
                    break Exit::Interrupted;
                }
                Input::Closed => {
                    writeln!(self.out)?;
                    break Exit::InputClosed;
                }
                Input::Failed(e) => return Err(e.into()),
            }
        };

        self.out.flush()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Simulator session ended: {:?}", exit);

        Ok(exit)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Strips one trailing `\n` or `\r\n`, leaving every other character intact.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Decodes one raw input line, replacing invalid UTF-8 with `U+FFFD`.
pub fn decode_line(bytes: &[u8]) -> String {
    trim_line_ending(&String::from_utf8_lossy(bytes)).to_string()
}

/// Reads stdin line by line on a dedicated thread.
///
/// Lines are read as bytes, so input that is not valid UTF-8 still arrives as
/// a password; only real read failures are sent as `Err`. The thread blocks
/// in `read_until`, so it is never joined; it ends with the process. The
/// channel closes at end of input or after a read error.
#[cfg(feature = "async")]
pub fn spawn_stdin_reader() -> mpsc::Receiver<std::io::Result<String>> {
    use std::io::BufRead;

    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        loop {
            let mut buf = Vec::new();
            let message = match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => Ok(decode_line(&buf)),
                Err(e) => Err(e),
            };
            let failed = message.is_err();
            if tx.blocking_send(message).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Cancels `token` when the process receives an interrupt (Ctrl-C).
///
/// The signal listener is registered before this returns, so an interrupt
/// that arrives before the first prompt still ends the session cleanly.
/// Must be called from within a tokio runtime.
#[cfg(feature = "async")]
pub fn install_interrupt_handler(token: CancellationToken) -> std::io::Result<()> {
    #[cfg(unix)]
    let mut interrupt =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
    #[cfg(windows)]
    let mut interrupt = tokio::signal::windows::ctrl_c()?;

    tokio::spawn(async move {
        if interrupt.recv().await.is_some() {
            #[cfg(feature = "tracing")]
            tracing::info!("Interrupt received");
            token.cancel();
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> Simulator<'static, Vec<u8>> {
        Simulator::new(Vec::new())
    }

    fn output(sim: Simulator<'_, Vec<u8>>) -> String {
        String::from_utf8(sim.into_inner()).expect("output is UTF-8")
    }

    #[test]
    fn test_handle_quit_sentinel() {
        for sentinel in ["q", "Q"] {
            let mut sim = simulator();
            assert_eq!(sim.handle_line(sentinel).unwrap(), Step::Quit);
            assert!(output(sim).is_empty());
        }
    }

    #[test]
    fn test_handle_empty_line_is_silent() {
        let mut sim = simulator();
        assert_eq!(sim.handle_line("").unwrap(), Step::Continue);
        assert!(output(sim).is_empty());
    }

    #[test]
    fn test_handle_password_writes_report() {
        let mut sim = simulator();
        assert_eq!(sim.handle_line("abc123").unwrap(), Step::Continue);
        let text = output(sim);
        assert!(text.contains("Password Length: 6"));
        assert!(text.contains("Character Set Size: 36"));
        assert!(text.contains("Total Combinations: 2,176,782,336"));
        assert!(text.contains("[Standard GPU]: 4.0 hours"));
        assert!(text.contains("[High-End GPU]: 33.0 minutes"));
    }

    #[test]
    fn test_handle_words_starting_with_q_are_passwords() {
        let mut sim = simulator();
        assert_eq!(sim.handle_line("qq").unwrap(), Step::Continue);
        assert_eq!(sim.handle_line(" q").unwrap(), Step::Continue);
        let text = output(sim);
        assert_eq!(text.matches("Password Length: 2").count(), 2);
    }

    #[test]
    fn test_handle_whitespace_is_a_password() {
        let mut sim = simulator();
        sim.handle_line("   ").unwrap();
        let text = output(sim);
        assert!(text.contains("Password Length: 3"));
        assert!(text.contains("Character Set Size: 32"));
    }

    #[test]
    fn test_banner_and_prompt() {
        let mut sim = simulator();
        sim.write_banner().unwrap();
        sim.write_prompt().unwrap();
        let text = output(sim);
        assert!(text.starts_with("--- WPA2 Password Crack-Time Simulator ---\n"));
        assert!(text.ends_with(PROMPT));
    }

    #[test]
    fn test_decode_line_accepts_invalid_utf8() {
        assert_eq!(decode_line(b"p\xffss\n"), "p\u{FFFD}ss");
        assert_eq!(decode_line(b"abc123\r\n"), "abc123");
        assert_eq!(decode_line(b"q"), "q");
    }

    #[test]
    fn test_handle_invalid_utf8_line_is_a_password() {
        let mut sim = simulator();
        let line = decode_line(b"p\xffss\n");
        assert_eq!(sim.handle_line(&line).unwrap(), Step::Continue);
        let text = output(sim);
        assert!(text.contains("Password Length: 4"));
        // U+FFFD is not alphanumeric
        assert!(text.contains("Character Set Size: 58"));
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("abc\n"), "abc");
        assert_eq!(trim_line_ending("abc\r\n"), "abc");
        assert_eq!(trim_line_ending("abc"), "abc");
        assert_eq!(trim_line_ending(" abc \n"), " abc ");
        assert_eq!(trim_line_ending("\n"), "");
    }
}
