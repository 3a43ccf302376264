#[macro_use]
extern crate log;
extern crate degree_confusion;
use env_logger::Env;
use std::io::BufWriter;
fn main() -> degree_confusion::Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or(degree_confusion::LOG_ENV, "warn")).init();
    let stdin = std::io::stdin();
    let wtr = BufWriter::new(std::io::stdout());
    degree_confusion::run_indexed(stdin.lock(), wtr).map_err(|why| {
        error!("{}", why);
        why
    })
}
