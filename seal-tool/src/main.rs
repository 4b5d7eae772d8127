use std::path::PathBuf;

use clap::Parser as _;
use color_eyre::eyre::{eyre, Result};
use content_gate_vault::{open_utf8, seal, EmbeddedPayload, KdfParams};

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Seal a markup file into the JSON payload a page embeds
    Seal {
        /// Password the page will be unlocked with.
        #[arg(short, long)]
        password: String,

        /// PBKDF2 iteration count. The opening side must use the same value.
        #[arg(long, default_value_t = KdfParams::DEFAULT.iterations)]
        iterations: u32,

        /// Plaintext markup file.
        input: PathBuf,

        /// Where to write the payload; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open a payload to check its password, printing the markup
    Verify {
        /// Password to try.
        #[arg(short, long)]
        password: String,

        /// PBKDF2 iteration count the payload was sealed with.
        #[arg(long, default_value_t = KdfParams::DEFAULT.iterations)]
        iterations: u32,

        /// Payload JSON file.
        payload: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match Args::parse().command {
        Command::Seal {
            password,
            iterations,
            input,
            output,
        } => {
            if !tokio::fs::try_exists(&input).await.unwrap_or_default() {
                return Err(eyre!("File not found: {}", input.display()));
            }

            let plaintext = tokio::fs::read(&input).await?;
            let blob = seal(&plaintext, &password, KdfParams { iterations })?;
            let json = EmbeddedPayload::from(&blob).to_json()?;

            match output {
                Some(path) => tokio::fs::write(path, json).await?,
                None => println!("{json}"),
            }
        }
        Command::Verify {
            password,
            iterations,
            payload,
        } => {
            let json = tokio::fs::read_to_string(&payload).await?;
            let markup = EmbeddedPayload::from_json(&json)
                .and_then(|payload| payload.blob())
                .and_then(|blob| open_utf8(&blob, &password, KdfParams { iterations }))
                .map_err(|_| eyre!("The payload did not open with that password"))?;

            println!("{markup}");
        }
    }

    Ok(())
}
