use std::io;
use std::process::ExitCode;

use group_term::application::cli;
use group_term::application::ui;
use group_term::destruct_terminal_for_panic;
use group_term::infrastructure::logging::LogSink;
use group_term::Config;
use group_term::CrosstermViewport;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli::build().get_matches();
    let config = Config::load(&matches);

    // Flushed and closed when main returns, whichever way it returns.
    let _log_sink = LogSink::init(&config);

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = ui::run(&config, &CrosstermViewport).await;
    return ExitCode::from(ui::report(&result, &mut io::stdout()));
}
