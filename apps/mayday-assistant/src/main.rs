use clap::Parser;

use mayday_assistant::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	mayday_assistant::run(args)
}
