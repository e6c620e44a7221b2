use registry_sync::cli::{Args, Runner};
use registry_sync::cli::args::PROGRAM;
use registry_sync::logging::Logger;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if Args::is_bare_invocation(std::env::args_os()) {
        println!("{}", Args::usage_hint());
        std::process::exit(0);
    }

    let config = match Args::parse_args().into_config().apply_env() {
        Ok(config) => config,
        Err(e) => {
            Logger::new_quiet(PROGRAM).critical(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            Logger::new_quiet(PROGRAM).critical(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = runner.run().await {
        runner
            .logger()
            .critical(&format!("Sync aborted ({} failure): {}", e.kind(), e));
        std::process::exit(e.exit_code());
    }
}
