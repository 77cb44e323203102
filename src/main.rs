use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cfg = math_visualizer::config::Config::parse();
    math_visualizer::app::run(cfg)
}
