use langident_trainer::run_training;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run_training() {
        eprintln!("Training failed: {e:#}");
        std::process::exit(1);
    }
}
