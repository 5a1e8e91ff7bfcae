use clap::Parser;
use minefield::args::GameArgs;
use minefield::ui;

fn main() -> color_eyre::Result<()> {
    let args = GameArgs::parse();
    ui::main(args)
}
