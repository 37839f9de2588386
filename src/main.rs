use skelgen::{cli, logging, runner};

fn main() {
    let app = cli::parse();
    logging::init(app.verbose);
    if let Err(err) = runner::run(app) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
