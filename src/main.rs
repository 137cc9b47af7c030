use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "icp",
    version,
    about = "Copy a single file, asking before overwriting the destination",
    long_about = "`icp` copies one file to another. If the destination already exists it asks
on stdin whether to overwrite it; declining leaves the destination untouched
and exits successfully.

EXAMPLE:
    # Copy a file, answering the overwrite prompt interactively
    icp notes.txt backup/notes.txt"
)]
struct Args {
    // Progress & output
    /// Verbose level (implies "summary"): -v INFO / -vv DEBUG / -vvv TRACE (default: ERROR)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "Progress & output")]
    verbose: u8,

    /// Print summary at the end
    #[arg(long, help_heading = "Progress & output")]
    summary: bool,

    /// Quiet mode, don't report errors
    #[arg(short = 'q', long = "quiet", help_heading = "Progress & output")]
    quiet: bool,

    // ARGUMENTS
    /// File to copy from
    #[arg()]
    source: std::path::PathBuf,

    /// File to copy to; created if absent, truncated if present
    #[arg()]
    dest: std::path::PathBuf,
}

fn run(args: &Args) -> anyhow::Result<icp::copy::Outcome> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let outcome = icp::copy::copy_file(&args.source, &args.dest, &mut stdin, &mut stdout)?;
    Ok(outcome)
}

fn main() {
    // every failure mode exits 1, including usage errors (clap defaults to 2);
    // --help and --version keep exit 0
    let args = Args::try_parse().unwrap_or_else(|error| {
        let _ = error.print();
        std::process::exit(if error.use_stderr() { 1 } else { 0 });
    });
    icp::init_logging(args.quiet, args.verbose);
    match run(&args) {
        Ok(icp::copy::Outcome::Copied(summary)) => {
            tracing::info!("copy succeeded");
            if args.summary || args.verbose > 0 {
                println!("{}", &summary);
            }
        }
        Ok(icp::copy::Outcome::Cancelled) => {
            println!("Copy operation canceled by the user.");
        }
        Err(error) => {
            tracing::error!("{:#}", &error);
            std::process::exit(1);
        }
    }
}
