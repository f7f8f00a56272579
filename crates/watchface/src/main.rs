use watchface::FaceType;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let face = args.next().unwrap_or_else(|| "unix".to_string());

    let face = match face.as_str() {
        "unix" | "unix_clock" => FaceType::Unix,
        other => {
            eprintln!("Unknown face '{}'. Supported: unix", other);
            std::process::exit(1);
        }
    };

    log::info!("starting simulated watch");
    if let Err(err) = watchface::run(face) {
        eprintln!("watch host failed: {err:#}");
        std::process::exit(1);
    }
}
