use clap::Parser;
use parse_azure_config::config::cli::load_env_file;
use parse_azure_config::engine::render::write_output;
use parse_azure_config::utils::{logger, validation::Validate};
use parse_azure_config::{render, BuildOptions, CliConfig, ConfigBuilder, Environment};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_app_service_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting parse-azure-config");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 讀取環境變數，必要時補上 env 檔內容
    let mut env = Environment::from_process();
    if let Some(path) = &config.env_file {
        match load_env_file(path) {
            Ok(pairs) => {
                tracing::info!("📁 Loaded {} variables from {}", pairs.len(), path.display());
                env = env.merge_missing(pairs);
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    let api_config = ConfigBuilder::new(config.site_root.clone())
        .with_options(BuildOptions {
            emit_dump: !config.quiet,
        })
        .build(&env);

    if config.strict {
        if let Err(e) = api_config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    let shown = if config.show_secrets {
        api_config
    } else {
        api_config.redacted()
    };
    let text = render(&shown, config.format)?;

    match &config.output {
        Some(path) => {
            write_output(path, &text)?;
            tracing::info!("✅ Configuration written to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
