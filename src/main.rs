use clap::Parser;

use gdsweep::cli::Cli;
use gdsweep::error::SweepError;
use gdsweep::findings::AwsFindingClient;
use gdsweep::sweep::Sweeper;
use gdsweep::{regions, session};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), SweepError> {
    println!("GuardDuty finding archiver: start");

    let profile = cli.profile();
    let shared = session::establish(&profile).await?;

    // Informational only; a failure here must not block the sweep.
    match session::caller_identity(&shared).await {
        Ok(identity) => {
            println!("archive executor:");
            println!("{}", identity);
        }
        Err(e) => eprintln!("could not resolve caller identity: {}", e),
    }

    let sweeper = Sweeper::new(AwsFindingClient::new(shared));
    sweeper.run(&regions::all_regions()).await;

    println!("Finished");
    Ok(())
}
