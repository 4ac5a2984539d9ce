use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use road_navigator::script::{parse_script, OutputFormat, Session};

/// Builds a road map from a command script and prints the answer to every
/// `navigate` command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command script, read from stdin if omitted
    #[arg(short, long)]
    script: Option<PathBuf>,
    /// How navigation results are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    /// Print `true`/`false` for every intersection and road command
    #[arg(short, long)]
    echo_additions: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let commands = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open script {}", path.display()))?;
            parse_script(BufReader::new(file))?
        }
        None => parse_script(io::stdin().lock())?,
    };
    log::info!("read {} commands", commands.len());

    let mut session = Session::new(args.format, args.echo_additions);
    let mut out = BufWriter::new(io::stdout().lock());
    for command in &commands {
        session
            .execute(command, &mut out)
            .context("could not write result")?;
    }
    out.flush()?;

    Ok(())
}
