use std::io;
use std::process;

use fastagen::config::{Console, Opt};
use fastagen::execute;
use fastagen::logger;

use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = logger::init_logger(logger::level_from_verbosity(opt.verbose)) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let code = execute(&opt, &mut Console::stdio(), &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}
