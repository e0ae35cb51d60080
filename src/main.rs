use burrow::flags::Flags;
use burrow::report::Reporter;
use burrow::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        Reporter::default().error(e);
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("burrow {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let reporter = Reporter::from_flags(&flags);
    let status = Shell::new(&flags).and_then(|mut shell| shell.run());
    match status {
        Ok(code) => ExitCode::from((code & 0xff) as u8),
        Err(e) => {
            reporter.error(e);
            ExitCode::FAILURE
        }
    }
}
