use dotenvy::dotenv;
use log::error;
use std::sync::Arc;

use neuroui::cli::{parse_generate_args, run_generate, USAGE};
use neuroui::config::AppConfig;
use neuroui::main_module::run_axum_server;
use neuroui::shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::from_env();

    match args.get(1).map(String::as_str) {
        None | Some("serve") => {
            let app_state = Arc::new(AppState::new(config));
            run_axum_server(app_state).await?;
        }
        Some("generate") => {
            let generate_args = parse_generate_args(&args[2..])?;
            let app_state = AppState::new(config);
            if let Err(e) = run_generate(&app_state.generator, &generate_args).await {
                error!("{:#}", e);
                return Err(e);
            }
        }
        Some("--help") | Some("-h") => println!("{}", USAGE),
        Some(command) => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run 'neuroui --help' for usage information");
            anyhow::bail!("Unknown command: {}", command);
        }
    }

    Ok(())
}
