use anyhow::Context;
use tokio::io::BufReader;
use tokio::runtime::Builder as TokioRuntimeBuilder;

use fest_carousel::app::FestivalPage;

fn main() -> anyhow::Result<()> {
    // Render output goes to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fest_carousel=info".parse()?),
        )
        .init();

    let runtime = TokioRuntimeBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        let mut page = FestivalPage::mount()?;
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        page.run(stdin, &mut stdout).await
    })
}
