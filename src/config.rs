use crate::cli::{Args, ColorChoice};

pub struct AppConfig {
    pub color_enabled: bool,
    pub verbose: bool,
    /// Name shown for the script in diagnostics
    pub script_name: String,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        let color_enabled = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr) && atty::is(atty::Stream::Stdout),
        };

        let script_name = if let Some(path) = &args.script {
            path.display().to_string()
        } else if args.eval.is_some() {
            "<eval>".to_string()
        } else if args.demo {
            "<demo>".to_string()
        } else {
            "<stdin>".to_string()
        };

        AppConfig {
            color_enabled,
            verbose: args.verbose,
            script_name,
        }
    }

    /// Install the stderr log subscriber when `-v` is given or `RUST_LOG` is set.
    pub fn init_tracing(&self) {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if self.verbose {
            EnvFilter::new("lumira=debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(self.color_enabled).with_target(true))
            .with(filter)
            .init();
    }
}
