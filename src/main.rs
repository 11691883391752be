use clap::Parser;
use pesel_tools::config::{Command, PeselArgs, ScrambleArgs};
use pesel_tools::utils::{logger, validation::Validate};
use pesel_tools::core::report::{code_lines, validate_batch, OutputFormat};
use pesel_tools::{CliConfig, LocalStorage, ScrambleJob, TomlConfig, ToolError};
use tokio::io::AsyncReadExt;

fn fail(e: ToolError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match &cli.command {
        Command::Pesel(args) => {
            if let Err(e) = config.validate() {
                fail(e);
            }
            run_pesel(args, &config).await
        }
        Command::Scramble(args) => {
            args.apply_to(&mut config);
            if let Err(e) = config.validate() {
                fail(e);
            }
            run_scramble(args, config).await
        }
    };

    std::process::exit(exit_code);
}

async fn read_codes(args: &PeselArgs) -> Result<Vec<String>, ToolError> {
    if !args.codes.is_empty() {
        return Ok(args.codes.clone());
    }

    tracing::debug!("No codes given, reading from stdin");
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(code_lines(&input))
}

async fn run_pesel(args: &PeselArgs, config: &TomlConfig) -> i32 {
    let codes = match read_codes(args).await {
        Ok(codes) => codes,
        Err(e) => fail(e),
    };
    let format = if args.json || config.json_output() {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match validate_batch(&codes, format, &mut std::io::stdout().lock()) {
        Ok(summary) => summary.exit_code(),
        Err(e) => fail(e),
    }
}

async fn run_scramble(args: &ScrambleArgs, config: TomlConfig) -> i32 {
    let storage = LocalStorage::new(config.scramble.output_path.clone());
    let job = match ScrambleJob::new(storage, config) {
        Ok(job) => job,
        Err(e) => fail(e),
    };

    if args.stdout {
        match job.scramble_file(&args.input).await {
            Ok(report) => print!("{}", report.text),
            Err(e) => fail(e),
        }
        return 0;
    }

    match job.run(&args.input).await {
        Ok(report) => {
            tracing::info!("✅ Scrambling completed successfully!");
            if let Some(output) = report.output {
                println!("✅ Scrambled {} of {} words", report.scrambled_words, report.words);
                println!("📁 Output saved to: {}", output);
            }
            0
        }
        Err(e) => fail(e),
    }
}
