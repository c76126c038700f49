use git_prompt::areas::repository::Repository;

#[cfg(feature = "debug_prompt")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "debug_prompt"))]
fn init_logging() {}

fn main() {
    init_logging();

    let repository = Repository::from_shell(Box::new(std::io::stdout()));

    // a prompt must never show an error: any failure renders as nothing
    if let Err(error) = repository.prompt() {
        tracing::error!("{error:#}");
    }
}
