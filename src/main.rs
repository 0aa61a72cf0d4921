use rust_lib_mobile_car_sim::api::{GET_DEVICE_IP_ADDRESS, MethodResult};
use rust_lib_mobile_car_sim::{config, format_address, logging};

fn main() {
    // Load .env before tracing so RUST_LOG from the file applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    logging::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // --raw <int> formats a raw platform value without querying the device
    if let Some(pos) = args.iter().position(|arg| arg == "--raw") {
        match args.get(pos + 1).map(|v| v.parse::<i32>()) {
            Some(Ok(raw)) => println!("{}", format_address(raw)),
            Some(Err(e)) => {
                tracing::error!("Invalid raw address: {}", e);
                std::process::exit(2);
            }
            None => {
                tracing::error!("--raw requires a 32-bit integer argument");
                std::process::exit(2);
            }
        }
        return;
    }

    if args.is_empty() {
        args.push(GET_DEVICE_IP_ADDRESS.to_string());
    }

    let config = config::Config::from_env();
    let channel = config.channel();
    tracing::info!("Invoking {} method(s) on channel '{}'", args.len(), channel.name());

    for method in &args {
        match channel.handle(method) {
            MethodResult::Success(value) => println!("{}", value),
            MethodResult::Error { code, message } => println!("error {}: {}", code, message),
            MethodResult::NotImplemented => println!("not implemented: {}", method),
        }
    }
}
