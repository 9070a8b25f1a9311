mod cli;
mod log;
mod prompt;
mod commands;

use anyhow::Result;
use clap::Parser;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solxen_client::RetryPolicy;

use cli::Cli;
use commands::check;
use prompt::{Prompter, TermPrompter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let rpc_client = RpcClient::new_with_commitment(cli.rpc_url, CommitmentConfig::confirmed());
    let policy = RetryPolicy::default();

    let mut prompter = TermPrompter::new(!cli.no_clear);
    prompter.clear()?;
    log::print_splash();
    prompter.pause()?;

    let client = &rpc_client;
    let policy = &policy;
    prompt::interactive_loop(&mut prompter, move |input| async move {
        check::handle_check(client, policy, &input).await
    })
    .await?;

    log::print_info("Goodbye!");
    Ok(())
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        "warn,solxen_client=debug,solxen_claims=debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .target(env_logger::Target::Stderr)
        .init();
}
