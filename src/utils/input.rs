use std::io;
use std::io::Write;

/// Print `prompt` and read one line. `Ok(None)` at end of input.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?; // make sure the prompt shows before blocking

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn input_trim(prompt: &str) -> io::Result<Option<String>> {
    Ok(input(prompt)?.map(|line| line.trim().to_string()))
}

/// Run blocking I/O on tokio's blocking pool so the runtime keeps going.
pub async fn blocking<T, F>(f: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(io::Error::other)?
}

/// [`input_trim`] for use inside the async runtime.
pub async fn input_trim_async(prompt: &'static str) -> io::Result<Option<String>> {
    blocking(move || input_trim(prompt)).await
}
