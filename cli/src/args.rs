use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use shared::Pattern;

pub const DEFAULT_COLUMNS: usize = 60;
pub const DEFAULT_ROWS: usize = 60;
pub const DEFAULT_GENERATIONS: u64 = 900;
pub const FRAME_DELAY: Duration = Duration::from_millis(100);
// Roughly three cells in twenty start alive.
pub const LIVE_DENSITY: f64 = 0.15;

/// A named pattern and where to put its top-left corner. `None` centers it.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub pattern: Pattern,
    pub anchor: Option<(isize, isize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub cols: usize,
    pub rows: usize,
    pub generations: u64,
    /// Digits used for the generation counter.
    pub counter_width: usize,
    pub placements: Vec<Placement>,
    pub seed: Option<u64>,
    pub density: f64,
    pub delay: Duration,
    pub clear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            generations: DEFAULT_GENERATIONS,
            counter_width: digits(DEFAULT_GENERATIONS),
            placements: Vec::new(),
            seed: None,
            density: LIVE_DENSITY,
            delay: FRAME_DELAY,
            clear: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Settings),
    Usage,
    Version,
}

pub fn usage() -> String {
    let names: Vec<&str> = Pattern::ALL.iter().map(|pattern| pattern.name()).collect();
    format!(
        "Usage: conway-life [columns] [rows] [generations] [options]\n\
         \n\
         Options:\n\
         \x20 --pattern NAME[@COL,ROW]  stamp a pattern (repeatable; default anchor is the center)\n\
         \x20 --seed N                  seed for the random soup\n\
         \x20 --density P               fraction of cells alive in the random soup (default {LIVE_DENSITY})\n\
         \x20 --delay MS                pause between frames (default {} ms)\n\
         \x20 --no-clear                print frames one after another instead of redrawing\n\
         \n\
         Sizes must be integers; a non-positive size falls back to \
         {DEFAULT_COLUMNS}x{DEFAULT_ROWS}x{DEFAULT_GENERATIONS}.\n\
         \n\
         Patterns: {}\n",
        FRAME_DELAY.as_millis(),
        names.join(", ")
    )
}

/// Parses everything after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() == 1 && args[0] == "version" {
        return Ok(Command::Version);
    }

    let mut settings = Settings::default();
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pattern" => {
                i += 1;
                settings.placements.push(parse_placement(next_arg(&args, i, "--pattern")?)?);
            }
            "--seed" => {
                i += 1;
                let seed = next_arg(&args, i, "--seed")?;
                settings.seed = Some(
                    seed.parse()
                        .with_context(|| format!("invalid seed `{seed}`"))?,
                );
            }
            "--density" => {
                i += 1;
                let raw = next_arg(&args, i, "--density")?;
                let density: f64 = raw
                    .parse()
                    .with_context(|| format!("invalid density `{raw}`"))?;
                if !(0.0..=1.0).contains(&density) {
                    bail!("density must be between 0 and 1, got {density}");
                }
                settings.density = density;
            }
            "--delay" => {
                i += 1;
                let raw = next_arg(&args, i, "--delay")?;
                let ms: u64 = raw
                    .parse()
                    .with_context(|| format!("invalid delay `{raw}`"))?;
                settings.delay = Duration::from_millis(ms);
            }
            "--no-clear" => settings.clear = false,
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            other => positional.push(other),
        }
        i += 1;
    }

    match positional.as_slice() {
        [cols, rows, generations] => {
            let cols = parse_int(cols, "columns")?;
            let rows = parse_int(rows, "rows")?;
            let gens = parse_int(generations, "generations")?;
            settings.counter_width = generations.len();
            if cols <= 0 || rows <= 0 || gens < 0 {
                log::warn!(
                    "invalid size {cols}x{rows}x{gens}, using {DEFAULT_COLUMNS}x{DEFAULT_ROWS}x{DEFAULT_GENERATIONS}"
                );
            } else {
                settings.cols = usize::try_from(cols).context("too many columns")?;
                settings.rows = usize::try_from(rows).context("too many rows")?;
                settings.generations = gens as u64;
            }
            Ok(Command::Run(settings))
        }
        _ => Ok(Command::Usage),
    }
}

fn next_arg<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn parse_int(raw: &str, what: &str) -> Result<i64> {
    raw.parse()
        .with_context(|| format!("{what} must be an integer, got `{raw}`"))
}

fn parse_placement(raw: &str) -> Result<Placement> {
    let (name, anchor) = match raw.split_once('@') {
        Some((name, at)) => {
            let (c, r) = at
                .split_once(',')
                .ok_or_else(|| anyhow!("pattern anchor must be COL,ROW, got `{at}`"))?;
            let c = c
                .trim()
                .parse()
                .with_context(|| format!("invalid anchor column `{c}`"))?;
            let r = r
                .trim()
                .parse()
                .with_context(|| format!("invalid anchor row `{r}`"))?;
            (name, Some((c, r)))
        }
        None => (raw, None),
    };
    Ok(Placement {
        pattern: name.parse()?,
        anchor,
    })
}

fn digits(n: u64) -> usize {
    n.to_string().len()
}
