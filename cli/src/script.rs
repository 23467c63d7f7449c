//! Drawing scripts: one command per line, `#` starts a comment.
//!
//! ```text
//! cls blue/yellow
//! border 2
//! circle 128 96 40 white/blue/1
//! line 0 0 255 191 0x02
//! ```

use anyhow::{anyhow, bail, Context};
use log::{debug, trace};
use zxgfx::{attribute, DisplayFile, BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cls(i32),
    ClearBitmap,
    Border(u8),
    Plot(i32, i32, i32),
    Line(i32, i32, i32, i32, i32),
    Rect(i32, i32, i32, i32, i32),
    FillRect(i32, i32, i32, i32, i32),
    Circle(i32, i32, i32, i32),
    FillCircle(i32, i32, i32, i32),
}

impl Command {
    pub fn apply(self, screen: &mut DisplayFile) {
        trace!("{self:?}");
        match self {
            Command::Cls(attr) => screen.clear(attr.clamp(0, 0xff) as u8),
            Command::ClearBitmap => screen.clear_bitmap(),
            Command::Border(colour) => screen.set_border(colour),
            Command::Plot(x, y, attr) => screen.plot(x, y, attr),
            Command::Line(x1, y1, x2, y2, attr) => screen.line(x1, y1, x2, y2, attr),
            Command::Rect(x1, y1, x2, y2, attr) => screen.rect(x1, y1, x2, y2, attr),
            Command::FillRect(x1, y1, x2, y2, attr) => screen.filled_rect(x1, y1, x2, y2, attr),
            Command::Circle(x, y, r, attr) => screen.circle(x, y, r, attr),
            Command::FillCircle(x, y, r, attr) => screen.filled_circle(x, y, r, attr),
        }
    }
}

/// Parse every line of `source`, failing on the first bad one.
pub fn parse(source: &str) -> anyhow::Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (n, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", n + 1))? {
            commands.push(command);
        }
    }

    debug!("parsed {} commands", commands.len());
    Ok(commands)
}

/// Parse and run `source` against `screen`.
pub fn run(source: &str, screen: &mut DisplayFile) -> anyhow::Result<()> {
    for command in parse(source)? {
        command.apply(screen);
    }
    Ok(())
}

fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = match line.split_once('#') {
        Some((code, _)) => code,
        None => line,
    };

    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match name.to_ascii_lowercase().as_str() {
        "cls" => {
            let [attr] = arity(name, &args)?;
            Command::Cls(parse_attr(attr)?)
        }
        "clsdf" => {
            let [] = arity(name, &args)?;
            Command::ClearBitmap
        }
        "border" => {
            let [colour] = arity(name, &args)?;
            Command::Border(parse_border(colour)?)
        }
        "plot" => {
            let [x, y, attr] = arity(name, &args)?;
            Command::Plot(parse_int(x)?, parse_int(y)?, parse_attr(attr)?)
        }
        "line" | "rect" | "fillrect" => {
            let [x1, y1, x2, y2, attr] = arity(name, &args)?;
            let (x1, y1, x2, y2) = (parse_int(x1)?, parse_int(y1)?, parse_int(x2)?, parse_int(y2)?);
            let attr = parse_attr(attr)?;
            match name.to_ascii_lowercase().as_str() {
                "line" => Command::Line(x1, y1, x2, y2, attr),
                "rect" => Command::Rect(x1, y1, x2, y2, attr),
                _ => Command::FillRect(x1, y1, x2, y2, attr),
            }
        }
        "circle" => {
            let [x, y, r, attr] = arity(name, &args)?;
            Command::Circle(parse_int(x)?, parse_int(y)?, parse_int(r)?, parse_attr(attr)?)
        }
        "fillcircle" => {
            let [x, y, r, attr] = arity(name, &args)?;
            Command::FillCircle(parse_int(x)?, parse_int(y)?, parse_int(r)?, parse_attr(attr)?)
        }
        _ => bail!("unknown command `{name}`"),
    };

    Ok(Some(command))
}

fn arity<'a, const N: usize>(name: &str, args: &[&'a str]) -> anyhow::Result<[&'a str; N]> {
    args.try_into()
        .map_err(|_| anyhow!("`{name}` takes {N} arguments, got {}", args.len()))
}

/// Decimal, `0x` hex or `0b` binary, optionally negative.
fn parse_int(word: &str) -> anyhow::Result<i32> {
    let (negative, digits) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word),
    };

    let value = if let Some(hex) = digits.strip_prefix("0x") {
        i32::from_str_radix(hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        i32::from_str_radix(bin, 2)
    } else {
        digits.parse()
    }
    .map_err(|_| anyhow!("`{word}` is not a number"))?;

    Ok(if negative { -value } else { value })
}

fn parse_colour(word: &str) -> anyhow::Result<u8> {
    let colour = match word.to_ascii_lowercase().as_str() {
        "black" => BLACK,
        "blue" => BLUE,
        "red" => RED,
        "magenta" => MAGENTA,
        "green" => GREEN,
        "cyan" => CYAN,
        "yellow" => YELLOW,
        "white" => WHITE,
        _ => match parse_int(word)? {
            n @ 0..=7 => n as u8,
            n => bail!("colour {n} is out of range 0-7"),
        },
    };
    Ok(colour)
}

/// Any byte is accepted; only the low three bits reach the border.
fn parse_border(word: &str) -> anyhow::Result<u8> {
    parse_colour(word).or_else(|_| {
        let n = parse_int(word)?;
        u8::try_from(n).map_err(|_| anyhow!("border {n} is out of range"))
    })
}

fn parse_flag(word: &str) -> anyhow::Result<u8> {
    match parse_int(word)? {
        n @ 0..=1 => Ok(n as u8),
        n => bail!("flag {n} must be 0 or 1"),
    }
}

/// An attribute is either a plain number or `INK/PAPER[/BRIGHT[/FLASH]]`.
fn parse_attr(word: &str) -> anyhow::Result<i32> {
    if !word.contains('/') {
        return parse_int(word);
    }

    let parts: Vec<&str> = word.split('/').collect();
    let (ink, paper, bright, flash) = match parts.as_slice() {
        [ink, paper] => (ink, paper, "0", "0"),
        [ink, paper, bright] => (ink, paper, *bright, "0"),
        [ink, paper, bright, flash] => (ink, paper, *bright, *flash),
        _ => bail!("attribute `{word}` should be INK/PAPER[/BRIGHT[/FLASH]]"),
    };

    Ok(attribute(
        parse_colour(ink)?,
        parse_colour(paper)?,
        parse_flag(bright)?,
        parse_flag(flash)?,
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let source = "
            # a title screen
            cls 0x38
            border red
            plot 10 20 7   # ink only
            LINE 0 0 255 191 0b10
            fillcircle 128 96 -3 white/blue/1/1
            clsdf
        ";

        assert_eq!(
            parse(source).unwrap(),
            vec![
                Command::Cls(0x38),
                Command::Border(RED),
                Command::Plot(10, 20, 7),
                Command::Line(0, 0, 255, 191, 2),
                Command::FillCircle(128, 96, -3, 0xcf),
                Command::ClearBitmap,
            ]
        );
    }

    #[test]
    fn test_parse_attr() {
        assert_eq!(parse_attr("red/white/1").unwrap(), 122);
        assert_eq!(parse_attr("2/7").unwrap(), 58);
        assert_eq!(parse_attr("300").unwrap(), 300);
        assert!(parse_attr("red/white/2").is_err());
        assert!(parse_attr("pink/white").is_err());
        assert!(parse_attr("1/2/0/0/0").is_err());
    }

    #[test]
    fn test_errors_name_the_line() {
        let err = parse("cls 0\ncircle 1 2 3\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert_eq!(
            err.root_cause().to_string(),
            "`circle` takes 4 arguments, got 3"
        );

        let err = parse("\n\nspray 1 2").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
        assert!(format!("{err:#}").contains("unknown command `spray`"));
    }

    #[test]
    fn test_run_draws() {
        let mut screen = DisplayFile::new();
        run("border 9\nrect 0 0 7 7 0x45\nplot 3 3 0x45", &mut screen).unwrap();

        assert_eq!(screen.border(), 1);
        assert_eq!(screen.pixel(0, 0), Some(true));
        assert_eq!(screen.pixel(3, 3), Some(true));
        assert_eq!(screen.pixel(2, 3), Some(false));
        assert_eq!(screen.cell(0, 0), Some(0x45));
    }
}
