use indicatif::{ProgressBar, ProgressStyle};
use solana_client::nonblocking::rpc_client::RpcClient;
use solxen_client::{check_address, CheckError, ClaimReport, RetryPolicy, SweepStep, READS_PER_CHECK};
use tokio::time::Duration;

use crate::log;

/// Runs one address check and prints the outcome. Failures are reported, not
/// returned, so the prompt loop always continues.
pub async fn handle_check(client: &RpcClient, policy: &RetryPolicy, input: &str) {
    log::print_message(&format!("Using RPC endpoint: {}", client.url()));
    log::print_divider();

    let pb = ProgressBar::new(READS_PER_CHECK as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.white/gray}] {pos}/{len} {wide_msg}")
            .expect("Failed to set progress style"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut reads = 0;
    let result = check_address(client, policy, input, |step| {
        pb.set_position(reads);
        pb.set_message(describe_step(step));
        reads += 1;
    })
    .await;

    pb.finish_and_clear();

    match result {
        Ok(report) => print_report(&report),
        Err(e) => print_failure(input, &e),
    }
}

fn describe_step(step: SweepStep) -> String {
    match step {
        SweepStep::MinerRecord { program_index, kind } => {
            format!("Reading Miner Program {}, Kind {}...", program_index, kind)
        }
        SweepStep::TokensRecord => "Reading minted tokens record...".to_string(),
    }
}

fn print_failure(input: &str, err: &CheckError) {
    log::print_error(&format!("Check failed for '{}': {}", input.trim(), err));
    match err {
        CheckError::RetriesExhausted { .. } => {
            log::print_info("The RPC endpoint kept rate limiting. Try again later, or set SOLANA_RPC_ENDPOINT to another provider.");
        }
        CheckError::Timeout(_) => {
            log::print_info("The RPC endpoint did not answer in time.");
        }
        _ => {}
    }
}

fn print_report(report: &ClaimReport) {
    let summary = &report.summary;

    log::print_section_header("Mined Points");
    log::print_message(&format!("Address: {}", report.user));

    for (index, program) in report.programs.iter().enumerate() {
        for (kind, record) in program.kinds.iter().enumerate() {
            if let Some(record) = record {
                log::print_message(&format!(
                    "Miner Program {}, Kind {}: Mined points = {}",
                    index, kind, record.points
                ));
                ::log::debug!(
                    "Miner Program {}, Kind {}: {} hashes, {} superhashes",
                    index, kind, record.hash_count, record.superhash_count
                );
            }
        }
        log::print_count(&format!("Total points for Miner Program {}: {}", index, program.mined));
    }

    log::print_section_header("Minted Points");

    match (report.tokens, summary.total_minted) {
        (Some(tokens), Some(total_minted)) => {
            log::print_count(&format!("Total minted points: {}", total_minted));
            log::print_count(&format!("Tokens minted: {}", tokens.tokens_minted));

            for (index, program) in report.programs.iter().enumerate() {
                log::print_title(&format!("Miner Program {}:", index));
                log::print_message(&format!("Mined points: {}", program.mined));
                log::print_message(&format!("Minted points: {}", report.minted(index).unwrap_or(0)));
                log::print_message(&format!("Unclaimed points: {}", report.unclaimed(index)));
            }

            log::print_divider();
            log::print_count(&format!("Total mined points across all programs: {}", summary.total_mined));
            log::print_count(&format!("Total minted points: {}", total_minted));
            log::print_count(&format!("Total unclaimed points: {}", summary.total_unclaimed));
        }
        _ => {
            log::print_message("No minted tokens record found.");
            log::print_count(&format!("Total mined points across all programs: {}", summary.total_mined));
        }
    }

    log::print_count(&format!("Unclaimed tokens: {}", summary.unclaimed_tokens));

    if summary.unclaimed_tokens > 0 {
        log::print_highlight(&format!("UNCLAIMED SOL-XEN FOUND: {} tokens", summary.unclaimed_tokens));
    }
}
