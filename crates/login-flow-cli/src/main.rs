use clap::{Parser, Subcommand};
use login_flow_cli::commands::{
    GlobalArgs, LangArgs, RunArgs, ValidateArgs, run_lang, run_tui, run_validate,
};
use login_flow_cli::utils::ui::{self, LogTarget};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "login-flow")]
#[command(about = "Login and sign-up screens in English, Hindi, Punjabi and Tamil")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive login screen (default)
    Run(RunArgs),

    /// Show or change the stored language
    Lang(LangArgs),

    /// Check an email and password the way the login form does
    Validate(ValidateArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default()));

    // The interactive screen sets up its own logging once the config is read.
    if !matches!(command, Commands::Run(_)) {
        ui::init_logging(cli.global.verbose, LogTarget::Stderr);
    }

    let result = match command {
        Commands::Run(args) => run_tui(args, &cli.global),
        Commands::Lang(args) => run_lang(args, &cli.global),
        Commands::Validate(args) => run_validate(args, &cli.global),
    };

    result.map_err(miette::Report::new)
}
