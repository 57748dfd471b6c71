//! ferrocreole CLI - Wiki Creole to XHTML converter

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ferrocreole::{Event, HtmlWriter, Options};

#[derive(Parser)]
#[command(name = "ferrocreole")]
#[command(about = "Convert Wiki Creole markup to XHTML", version)]
struct Args {
    /// Input file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the event stream instead of XHTML
    #[arg(long)]
    events: bool,

    /// Leave bare http:// URLs as text
    #[arg(long)]
    no_autolinks: bool,

    /// Leave {| |- |} table markup as text
    #[arg(long)]
    no_mediawiki_tables: bool,

    /// Leave " -- " as two hyphens
    #[arg(long)]
    no_dashes: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            autolinks: !self.no_autolinks,
            mediawiki_tables: !self.no_mediawiki_tables,
            typographic_dashes: !self.no_dashes,
        }
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        if self.input.as_os_str() == "-" {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        } else {
            fs::read(&self.input).with_context(|| format!("failed to read {}", self.input.display()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let input = args.read_input()?;
    let options = args.options();
    log::info!("converting {} bytes", input.len());

    let rendered = if args.events {
        let mut events: Vec<Event> = Vec::new();
        ferrocreole::parse_bytes(&input, &mut events, &options).context("cannot parse input")?;
        events.iter().fold(String::new(), |mut out, ev| {
            out.push_str(&format!("{ev:?}\n"));
            out
        })
    } else {
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        ferrocreole::parse_bytes(&input, &mut writer, &options).context("cannot parse input")?;
        writer.into_string()
    };

    match &args.output {
        Some(path) => fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write stdout")?,
    }

    Ok(())
}
