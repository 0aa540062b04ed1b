use std::io;

use server::{ServeConfig, ServerErr};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = ServeConfig::from_env().map_err(ServerErr::from)?;
    server::serve(config).await?;
    Ok(())
}
