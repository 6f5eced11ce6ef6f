use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = filenest::cli::parse();
    app::run(args)
}
