//! tld-sweep - check which TLDs a domain name is registered under

use std::env;
use std::process;
use tld_sweep::{AvailabilityChecker, CheckConfig, Reporter, Result, TldSource};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return;
    }

    if args.len() < 2 {
        println!("Error: Please provide a domain name as a command line argument");
        println!("Usage: tld-sweep <domain_name> <optional_comma_separated_list_of_TLDs>");
        process::exit(1);
    }

    if let Err(e) = tld_sweep::init() {
        println!("{}", e.user_message());
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)).await {
        println!("{}", e.user_message());
        process::exit(1);
    }
}

/// Validate, resolve the TLD list, check every TLD and print the report
async fn run(domain: &str, tld_arg: Option<&str>) -> Result<()> {
    tld_sweep::domain::validate_domain(domain)?;
    if let Some(arg) = tld_arg {
        tld_sweep::domain::validate_tlds(arg)?;
    }

    let config = CheckConfig::from_env()?;
    let source = TldSource::from_arg(tld_arg, &config)?;
    let tlds = source.resolve(&config).await?;

    let checker = AvailabilityChecker::new();
    let mut reporter = Reporter::stdout();
    checker.run(domain, &tlds, &mut reporter).await?;

    Ok(())
}

/// Print help information
fn print_help() {
    println!("tld-sweep {}", tld_sweep::VERSION);
    println!("Check which top-level domains a name is registered under");
    println!();
    println!("USAGE:");
    println!("    tld-sweep <domain_name> [comma,separated,tld,list]");
    println!();
    println!("EXAMPLES:");
    println!("    tld-sweep example                  # Check every TLD in the IANA registry");
    println!("    tld-sweep example com,net,org      # Check only these TLDs");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    TLD_SWEEP_REGISTRY_URL         TLD list URL (default: {})", tld_sweep::IANA_TLD_LIST_URL);
    println!("    TLD_SWEEP_FETCH_TIMEOUT_SECS   Timeout for the TLD list fetch (default: none)");
    println!("    RUST_LOG                       Log filter for stderr diagnostics (default: warn)");
    println!();
    println!("A name is reported available when its NS lookup says the host does not");
    println!("exist. This is a heuristic: confirm with your registrar before buying.");
}
