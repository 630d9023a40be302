use std::io::Write;
use std::thread;

use anyhow::{Context, Result};
use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{render, Grid};

use crate::args::Settings;

/// Builds the first generation: the requested patterns, or a random soup when
/// none were given.
pub fn seed_grid(settings: &Settings) -> Result<Grid> {
    let mut grid = Grid::new(settings.cols, settings.rows).context("create grid")?;

    if settings.placements.is_empty() {
        match settings.seed {
            Some(seed) => grid.randomize_with(&mut StdRng::seed_from_u64(seed), settings.density),
            None => grid.randomize(settings.density),
        }
        return Ok(grid);
    }

    for placement in &settings.placements {
        let (c, r) = placement.anchor.unwrap_or_else(|| {
            let (w, h) = placement.pattern.extent();
            (
                (settings.cols as isize - w as isize) / 2,
                (settings.rows as isize - h as isize) / 2,
            )
        });
        grid.put_pattern(placement.pattern, c, r)
            .with_context(|| format!("place {}", placement.pattern))?;
    }
    Ok(grid)
}

/// Prints `settings.generations` frames, the first being the seed.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let mut grid = seed_grid(settings)?;
    log::info!(
        "running {} generations on a {}x{} grid, {} cells alive",
        settings.generations,
        settings.cols,
        settings.rows,
        grid.population()
    );
    log::trace!("seed grid:\n{}", render::dump(&grid));

    // Counter line plus the bordered frame.
    let drawn_lines = render::frame_height(settings.rows) + 1;
    let mut settled = false;

    for n in 0..settings.generations {
        if n > 0 {
            let changed = grid
                .advance()
                .with_context(|| format!("advance to generation {}", n + 1))?;
            if !changed && !settled {
                log::info!("grid settled at generation {}", n + 1);
            }
            settled = !changed;

            if settings.clear {
                for _ in 0..drawn_lines {
                    queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
                }
            }
        }

        out.write_all(
            render::header(n + 1, settings.generations, settings.counter_width).as_bytes(),
        )?;
        out.write_all(render::frame(&grid).as_bytes())?;
        out.flush()?;

        if !settings.delay.is_zero() {
            thread::sleep(settings.delay);
        }
    }

    log::debug!("finished with {} cells alive", grid.population());
    grid.destroy();
    Ok(())
}
