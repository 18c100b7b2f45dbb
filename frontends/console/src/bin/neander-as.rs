
use neander_console::{args, run};

fn main() {
    let matches = args("neander-as").get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
