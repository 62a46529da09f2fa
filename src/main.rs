mod color;
mod data;
mod pipeline;
mod report;
mod vision;

use anyhow::Result;

use pipeline::PipelineConfig;

fn main() -> Result<()> {
    env_logger::init();
    pipeline::run(&PipelineConfig::default())
}
