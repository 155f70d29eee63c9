use clap::Parser;
use std::path::PathBuf;

use scoreiq::artifact;
use scoreiq::output;
use scoreiq::profile::StudentProfile;
use scoreiq::scoring;
use scoreiq::tui;

#[derive(Parser, Debug)]
#[command(name = "scoreiq")]
#[command(about = "Student performance prediction dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory containing model.json and scaler.json
    /// (defaults to ~/.config/scoreiq/)
    #[arg(short, long)]
    model_dir: Option<String>,

    /// Print a plain-text analysis instead of launching the dashboard
    #[arg(short, long)]
    report: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Build the model exactly once; everything downstream borrows this value.
    let model_dir = cli.model_dir.map(PathBuf::from);
    let (model, source) = match artifact::load_or_train(model_dir, cli.verbose) {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("Failed to initialize scoring model: {e:#}");
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Scoring model ready: {}", source.describe());
    }

    // Reject a bad starting profile before anything renders.
    let profile = StudentProfile::default();
    if let Err(errors) = scoring::validate_profile(&profile) {
        eprintln!("Invalid profile:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(1);
    }

    // Piped output gets the plain report; a terminal gets the dashboard.
    let is_tty = output::should_use_colors();
    if cli.report || !is_tty {
        let report = output::format_report(&profile, &model, &source, is_tty);
        println!("{}", report);
        return;
    }

    let app = tui::App::new(model, source);
    if let Err(e) = tui::run_tui(app).await {
        eprintln!("Dashboard error: {e:#}");
        std::process::exit(1);
    }
}
