use std::io::{self, BufWriter};

mod args;
mod run;

use args::Command;

fn print_version() {
    let unknown = "unknown";
    println!(
        "GIT VERSION: {}",
        option_env!("GIT_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
    );
    println!("GIT COMMIT : {}", option_env!("GIT_COMMIT").unwrap_or(unknown));
    println!("GIT DATE   : {}", option_env!("GIT_DATE").unwrap_or(unknown));
    println!("BUILD DATE : {}", option_env!("BUILD_DATE").unwrap_or(unknown));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match args::parse_args(std::env::args().skip(1))? {
        Command::Version => print_version(),
        Command::Usage => print!("{}", args::usage()),
        Command::Run(settings) => {
            log::debug!("{settings:?}");
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            run::run(&settings, &mut out)?;
        }
    }
    Ok(())
}
