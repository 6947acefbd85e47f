use std::env;
use uish::config::ShellConfig;
use uish::flags::Flags;
use uish::shell::Shell;

fn main() -> Result<(), uish::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("uish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags)?;

    let default_filter = if config.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut shell = Shell::new(config)?;
    shell.run()
}
