use clap::Parser;
use lumira::cli::{generate_completions, Args, Commands};
use lumira::config::AppConfig;
use lumira::diagnostic::render_diagnostics;
use lumira::{sample, Interpreter};
use owo_colors::OwoColorize;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return ExitCode::SUCCESS;
    }

    let config = AppConfig::from_args(&args);
    config.init_tracing();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(message) => {
            error_message(&config, &message);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(script = %config.script_name, bytes = source.len(), "loaded script");
    execute_script(&source, &config)
}

fn read_source(args: &Args) -> Result<String, String> {
    if let Some(path) = &args.script {
        read_file(path)
    } else if let Some(source) = &args.eval {
        Ok(source.clone())
    } else if args.demo {
        Ok(sample::WELCOME.to_string())
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read script from stdin: {}", e))?;
        Ok(buffer)
    }
}

fn execute_script(source: &str, config: &AppConfig) -> ExitCode {
    let mut interpreter = Interpreter::new();
    match interpreter.run(source) {
        Ok(()) => {
            tracing::debug!(bindings = interpreter.store().len(), "script finished");
            for (name, value) in interpreter.store().iter() {
                tracing::debug!(name, kind = value.kind_name(), value = %value, "binding");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "script aborted");
            let diagnostics = vec![err.to_diagnostic()];
            eprint!("{}", render_diagnostics(source, &config.script_name, &diagnostics, config.color_enabled));
            ExitCode::FAILURE
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
