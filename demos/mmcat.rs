use std::io::Write;
use std::process::ExitCode;

// Maps the named file (default: this crate's README) and writes its
// bytes to stdout.
fn main() -> ExitCode {
    let name = std::env::args().nth(1).unwrap_or_else(|| "README.md".to_string());

    let Some(map) = mmfio::MappedFile::open(&name, "r") else {
        eprintln!("mmcat: {}", mmfio::last_error());
        return ExitCode::FAILURE;
    };

    match std::io::stdout().write_all(&map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mmcat: {err}");
            ExitCode::FAILURE
        }
    }
}
