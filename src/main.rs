use hello_agent::{factory::ENV_FILE, run_from_env, setup_logging, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging();

    let mut stdout = std::io::stdout().lock();
    run_from_env(ENV_FILE, &mut stdout).await?;

    Ok(())
}
