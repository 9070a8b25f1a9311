use clap::Parser;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Parser, Debug)]
#[command(
    name = "solxen-claims",
    about = "Check a Solana wallet for unclaimed solXEN points across the four miner programs.",
    version
)]
pub struct Cli {
    #[arg(
        short = 'u',
        long = "url",
        env = "SOLANA_RPC_ENDPOINT",
        default_value = DEFAULT_RPC_URL,
        help = "RPC endpoint to query"
    )]
    pub rpc_url: String,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output")]
    pub verbose: bool,

    #[arg(long = "no-clear", help = "Keep previous output instead of clearing the screen")]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RPC_ENV: &str = "SOLANA_RPC_ENDPOINT";

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["solxen-claims", "-u", "https://rpc.example.com", "-v", "--no-clear"]).unwrap();
        assert_eq!(cli.rpc_url, "https://rpc.example.com");
        assert!(cli.verbose);
        assert!(cli.no_clear);
    }

    // Every env-dependent assertion lives in this one test so parallel tests
    // never observe a half-set variable.
    #[test]
    fn test_rpc_url_from_env() {
        std::env::remove_var(RPC_ENV);
        let cli = Cli::try_parse_from(["solxen-claims"]).unwrap();
        assert_eq!(cli.rpc_url, DEFAULT_RPC_URL);

        std::env::set_var(RPC_ENV, "https://rpc.example.com/?api-key=abc");
        let cli = Cli::try_parse_from(["solxen-claims"]).unwrap();
        assert_eq!(cli.rpc_url, "https://rpc.example.com/?api-key=abc");

        // Taken verbatim; no cluster shortcuts, no scheme check.
        std::env::set_var(RPC_ENV, "d");
        assert_eq!(Cli::try_parse_from(["solxen-claims"]).unwrap().rpc_url, "d");

        std::env::set_var(RPC_ENV, "rpc.example.com:8899");
        assert_eq!(Cli::try_parse_from(["solxen-claims"]).unwrap().rpc_url, "rpc.example.com:8899");

        // The flag wins over the variable.
        let cli = Cli::try_parse_from(["solxen-claims", "--url", "http://127.0.0.1:8899"]).unwrap();
        assert_eq!(cli.rpc_url, "http://127.0.0.1:8899");

        std::env::remove_var(RPC_ENV);
    }
}
