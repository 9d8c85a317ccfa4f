use std::{
	io::{self, Write},
	path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use dln_client::RankingClient;
use dln_domain::{ResultPage, SearchMode, WeightVector};
use dln_session::{SearchSession, SessionState};

#[derive(Debug, Parser)]
#[command(
	version = dln_cli::VERSION,
	rename_all = "kebab",
	styles = dln_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Run a single search and exit instead of starting the prompt loop.
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = dln_config::load(&args.config)?;

	init_tracing(&config);

	let mode = SearchMode::from_label(&config.search.mode)
		.ok_or_else(|| eyre::eyre!("Unsupported search mode: {}.", config.search.mode))?;
	let weights = WeightVector::new(
		config.search.weights.alpha,
		config.search.weights.beta,
		config.search.weights.gamma,
	);
	let client = RankingClient::new(&config.service.api_base, config.service.timeout_ms)?;

	if !client.is_alive().await {
		tracing::warn!(api_base = %config.service.api_base, "Ranking service did not answer the health probe.");
	}

	let mut session = SearchSession::with_weights(client, mode, weights);

	if let Some(query) = args.query.as_deref() {
		session.submit(query).await;
		render(session.state());

		return Ok(());
	}

	prompt_loop(&mut session).await
}

fn init_tracing(config: &dln_config::Config) {
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn prompt_loop(session: &mut SearchSession) -> color_eyre::Result<()> {
	print_help(session);

	let mut lines = BufReader::new(tokio::io::stdin()).lines();

	loop {
		print!("dln> ");
		io::stdout().flush()?;

		let Some(line) = lines.next_line().await? else {
			break;
		};
		let line = line.trim();

		match line {
			"" => {},
			":q" | ":quit" => break,
			":h" | ":help" => print_help(session),
			":r" | ":reset" => {
				session.reset();
				println!("Session reset.");
			},
			":n" | ":next" => {
				session.next_page().await;
				render(session.state());
			},
			":p" | ":prev" => {
				session.previous_page().await;
				render(session.state());
			},
			_ => {
				if let Some(rest) = line.strip_prefix(":g") {
					go_to_page(session, rest).await;
				} else if let Some(rest) = line.strip_prefix(":w") {
					set_weights(session, rest);
				} else if line.starts_with(':') {
					println!("Unknown command: {line}");
				} else {
					session.submit(line).await;
					render(session.state());
				}
			},
		}
	}

	Ok(())
}

async fn go_to_page(session: &mut SearchSession, rest: &str) {
	let Ok(page) = rest.trim().parse::<u32>() else {
		println!("Usage: :g <page>");

		return;
	};

	session.go_to_page(page).await;
	render(session.state());
}

fn set_weights(session: &mut SearchSession, rest: &str) {
	let parts: Vec<f64> =
		rest.split_whitespace().filter_map(|raw| raw.parse().ok()).collect();
	let [alpha, beta, gamma] = parts.as_slice() else {
		println!("Usage: :w <alpha> <beta> <gamma>");

		return;
	};

	session.set_weights(WeightVector::new(*alpha, *beta, *gamma));
	println!("Weights set to {alpha} / {beta} / {gamma}.");
}

fn print_help(session: &SearchSession) {
	let weights = session.weights();

	println!("dln search ({} mode)", session.mode().label());
	println!("  <text>             submit a search");
	println!("  :n | :p | :g <N>   next / previous / jump to page");
	println!("  :w <a> <b> <g>     set relevance weights (now {} / {} / {})", weights.alpha, weights.beta, weights.gamma);
	println!("  :r                 reset the session");
	println!("  :q                 quit");
}

fn render(state: &SessionState) {
	match state {
		SessionState::Idle => println!("(no results)"),
		SessionState::Loading => println!("Loading..."),
		SessionState::Success(page) => render_page(page),
		SessionState::Error { message, retained } => {
			println!("error: {message}");

			if let Some(page) = retained {
				render_page(page);
			}
		},
	}
}

fn render_page(page: &ResultPage) {
	if page.results.is_empty() {
		println!("No documents matched.");
	}

	for (index, doc) in page.results.iter().enumerate() {
		let title = if doc.title.is_empty() { "(untitled)" } else { doc.title.as_str() };

		println!("{:>3}. [{:.4}] {title}", index + 1, doc.score);
		println!("     {}  doc={}", doc.url, doc.doc_id);
	}

	println!("page {}/{}", page.pagination.current_page, page.pagination.total_pages);
}
