use clap::Parser;
use gpx_route_status::app::RouteStatusCliArguments;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = RouteStatusCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running gpx-route-status: {e}");
            eprintln!("An error occurred: {e}");
            std::process::exit(1);
        }
    }
}
