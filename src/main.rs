use actix_web::{middleware, App, HttpServer};
use std::{env, io, process};
use tracing::info;
use vision_assist::config::{Settings, SERVICE_NAME};
use vision_assist::server;
use vision_assist::util::init_tracing;

const USAGE: &str = "usage: ./vision-assist [config file]";

fn get_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        println!("{USAGE}");
        process::exit(1);
    }

    args.get(1).cloned()
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config_file = get_args();
    let settings = match Settings::load(config_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    };

    init_tracing(&settings.log);

    let bind_address = settings.bind_address();
    let max_payload_bytes = settings.max_payload_bytes;
    info!("starting {SERVICE_NAME} on {bind_address}");

    let mut http = HttpServer::new(move || {
        App::new()
            .wrap(server::cors())
            .wrap(middleware::Logger::default())
            .configure(server::configure(max_payload_bytes))
    });
    if let Some(workers) = settings.workers {
        http = http.workers(workers);
    }

    http.bind(bind_address)?.run().await
}
