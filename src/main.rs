use std::io;

use anyhow::Context;
use sorteo::config::Config;
use sorteo::logging;
use sorteo::session::Session;

fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    logging::init_log_filter(&cfg.log_filter);

    let mut rng = cfg.rng();
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());

    // Bowl vacío también termina normal; sólo la entrada inválida es error.
    session.run(&mut rng).context("could not run the draw")?;
    Ok(())
}
