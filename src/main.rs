use clap::Parser;
use std::io::{self, BufReader};
use wifi_passcheck::config::prompt::Prompter;
use wifi_passcheck::core::report::write_json_report;
use wifi_passcheck::core::wordlist::read_candidates;
use wifi_passcheck::utils::logger;
use wifi_passcheck::{AuditEngine, AuditError, AuditSettings, CliConfig, NmcliConnector};

fn exit_with(e: &AuditError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn connector_for(settings: &AuditSettings) -> NmcliConnector {
    NmcliConnector::with_program(settings.program.clone()).ifname(settings.ifname.clone())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting wifi-passcheck");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    println!("Wi-Fi Password Check");

    // 合併參數、配置檔, 不足的部分互動詢問
    let mut prompter = Prompter::new(BufReader::new(io::stdin()), io::stdout());
    let settings = match cli.load_settings(&mut prompter) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let connector = connector_for(&settings);

    if cli.dry_run {
        let candidates = match read_candidates(&settings.wordlist_path, settings.policy) {
            Ok(candidates) => candidates,
            Err(e) => exit_with(&e),
        };
        if candidates.is_empty() {
            println!("No passwords to attempt.");
        }
        for attempt in candidates.attempts(&settings.ssid) {
            println!("{}", connector.invocation(&attempt));
        }
        return Ok(());
    }

    let engine = AuditEngine::new(settings.clone(), connector);
    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    for line in report.summary_lines() {
        println!("{}", line);
    }

    if let Some(path) = &settings.report_path {
        if let Err(e) = write_json_report(&report, path) {
            exit_with(&e);
        }
        tracing::info!("📁 Report saved to: {}", path);
        println!("📁 Report saved to: {}", path);
    }

    Ok(())
}
