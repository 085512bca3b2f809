use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(results) = args.results {
        if results == 0 {
            return Err("invalid --results, expected positive integer".to_string());
        }
        if results > 5000 {
            return Err("invalid --results, the API serves at most 5000 per page".to_string());
        }
    }
    if let Some(raw) = args.nat.as_deref() {
        crate::utils::parse_nat_csv(raw).map_err(|e| format!("invalid --nat '{raw}': {e}"))?;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid --timeout, expected positive integer".to_string());
        }
    }
    if let Some(open) = args.open {
        if open == 0 {
            return Err("invalid --open, card numbers start at 1".to_string());
        }
    }
    Ok(())
}
