use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = dln_search::Args::parse();

	dln_search::run(args).await
}
