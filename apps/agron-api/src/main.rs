use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = agron_api::Args::parse();
	agron_api::run(args).await
}
