use std::process::ExitCode;

fn main() -> ExitCode {
    quillpress::cli::run()
}
