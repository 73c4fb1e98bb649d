use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_broken_pipe(&mut stdout, text.as_bytes())?;
    flush_tolerating_broken_pipe(&mut stdout)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_broken_pipe(&mut stdout, text.as_bytes())?;
    write_tolerating_broken_pipe(&mut stdout, b"\n")?;
    flush_tolerating_broken_pipe(&mut stdout)
}

/// Output piped into `head` and friends may close early; that is not a failure.
fn write_tolerating_broken_pipe(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    ignore_broken_pipe(writer.write_all(bytes))
}

fn flush_tolerating_broken_pipe(writer: &mut dyn Write) -> io::Result<()> {
    ignore_broken_pipe(writer.flush())
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
