use crate::args::GameArgs;
use crate::game::Game;
use crate::generator::MINE;
use crate::guess::Guess;
use crate::logging;
use crate::util::Pos;
use crate::win_state::WinState;
use color_eyre::Result;
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize, style};
use std::fmt::{self, Display, Formatter, Write as _};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "Enter 'F' or 'D' (Flag or Destroy), followed by coordinates, \
starting at 1,1 from the bottom left.\nEx: F 1,1 -> flags the bottom left hand corner";

pub fn main(args: GameArgs) -> Result<()> {
    color_eyre::install()?;
    logging::init(&args)?;

    let game = Game::new(args.width, args.height, args.mines, &mut args.rng())?;
    let color = io::stdout().is_terminal();
    let app = App {
        game,
        color,
        debug_layout: args.debug_layout,
    };
    app.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// What a single cell looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Hidden,
    Flag,
    Mine,
    Count(u8),
}

impl Glyph {
    pub fn of(game: &Game, pos: Pos) -> Self {
        if !game.mask()[pos] {
            Self::Hidden
        } else if game.flags()[pos] {
            Self::Flag
        } else {
            Self::from_value(game.mines()[pos])
        }
    }

    pub fn from_value(value: u8) -> Self {
        match value {
            MINE => Self::Mine,
            n => Self::Count(n),
        }
    }

    fn color(self) -> Color {
        use Color::*;
        match self {
            Self::Hidden => Reset,
            Self::Flag => Yellow,
            Self::Mine => Red,
            Self::Count(n) => match n {
                0 => DarkGrey,
                1 => Blue,
                2 => Green,
                3 => Red,
                4 => DarkBlue,
                5 => DarkRed,
                6 => Cyan,
                7 => Magenta,
                8.. => Grey,
            },
        }
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Self::Hidden => 'X',
            Self::Flag => 'F',
            Self::Mine => '*',
            Self::Count(0) => '.',
            Self::Count(n) => std::char::from_digit(n as u32, 10).unwrap_or('?'),
        };
        f.write_char(c)
    }
}

/// Terminal front end: prints the board, reads one guess per line.
#[derive(Debug)]
pub struct App {
    pub game: Game,
    /// Emit ANSI colours.
    pub color: bool,
    pub debug_layout: bool,
}

impl App {
    /// Runs until the game ends or the input does. Returns the final state, if any.
    pub fn run(mut self, mut input: impl BufRead, mut out: impl Write) -> Result<Option<WinState>> {
        writeln!(out, "Welcome to Minesweeper.")?;
        if self.debug_layout {
            writeln!(out, "DEBUG:")?;
            let mines = self.game.mines();
            self.draw(&mut out, |pos| Glyph::from_value(mines[pos]))?;
            writeln!(out)?;
        }

        let mut line = Vec::new();
        let end = loop {
            self.draw(&mut out, |pos| Glyph::of(&self.game, pos))?;
            writeln!(
                out,
                "Flags: {}/{}",
                self.game.flag_count(),
                self.game.mine_count()
            )?;
            writeln!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                log::info!("input closed");
                return Ok(None);
            }
            // bytes that aren't UTF-8 become U+FFFD and fail to parse below
            let text = String::from_utf8_lossy(&line);
            let text = text.trim();
            if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            let guess: Guess = match text.parse() {
                Ok(guess) => guess,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };
            if !self.game.mines().contains(guess.pos()) {
                let (w, h) = self.game.dimensions();
                writeln!(out, "{text} is outside the {w}x{h} board")?;
                continue;
            }
            match self.game.take_turn(guess)? {
                WinState::Playing => continue,
                end => break end,
            }
        };

        let message = match end {
            WinState::Lost => "You hit a mine! Game over.",
            _ => "You flagged every mine! You win!",
        };
        writeln!(out, "\n{message}\n")?;

        self.game.reveal_all();
        self.draw(&mut out, |pos| Glyph::of(&self.game, pos))?;
        out.flush()?;
        Ok(Some(end))
    }

    /// Draws the board top row first, so `(1,1)` ends up bottom left.
    fn draw(&self, out: &mut impl Write, glyph: impl Fn(Pos) -> Glyph) -> io::Result<()> {
        let (w, h) = self.game.dimensions();
        let label = h.to_string().len();
        let cell = w.to_string().len();

        for y in (0..h).rev() {
            queue!(out, Print(format!("{:>label$} |", y + 1)))?;
            for x in 0..w {
                let g = glyph((x, y));
                queue!(out, Print(format!("{:>cell$}", ' ')))?;
                if self.color {
                    queue!(out, PrintStyledContent(style(g).with(g.color())))?;
                } else {
                    queue!(out, Print(g))?;
                }
            }
            queue!(out, Print('\n'))?;
        }

        queue!(out, Print(format!("{:>label$} +", ' ')))?;
        queue!(out, Print("-".repeat((cell + 1) * w as usize)))?;
        queue!(out, Print('\n'))?;
        queue!(out, Print(format!("{:>label$}  ", ' ')))?;
        for x in 0..w {
            queue!(out, Print(format!(" {:>cell$}", x + 1)))?;
        }
        queue!(out, Print('\n'))?;
        Ok(())
    }
}
