//! Twisty Cube
//!
//! An interactive 3x3x3 twisty puzzle. Arrow keys spin the whole assembly
//! freely; the numeric pad turns individual layers, with Shift switching
//! between horizontal and vertical turns. Layers are located geometrically
//! from the cubies' current positions, so turns work at any orientation.

mod audio;
mod visualization;

use clap::{Parser, Subcommand};

use twisty::lattice::REFERENCE_SLOT;
use twisty::Cube;

/// Simulates a 3x3x3 twisty puzzle with free-look rotation.
#[derive(Parser)]
#[command(name = "twisty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive cube window.
    Play {
        /// Apply this many random turns before the window opens.
        #[arg(long, default_value_t = 0)]
        scramble: usize,
    },
    /// Print the reference cubie's transform columns and exit.
    Dump,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play { scramble }) => run_play(scramble),
        Some(Command::Dump) => run_dump(),
        None => run_play(0),
    }
}

/// Builds the cube, optionally scrambles it, and opens the viewer.
fn run_play(scramble: usize) {
    let mut cube = Cube::new();

    if scramble > 0 {
        let mut rng = rand::rng();
        let sequence = cube.scramble(scramble, &mut rng);
        let listing: Vec<String> = sequence.iter().map(|turn| turn.to_string()).collect();
        println!("Scrambled with {} turns: {}", sequence.len(), listing.join(" "));
    }

    println!("Controls: arrows rotate, numpad turns layers (hold Shift for vertical),");
    println!("          R resets, Space dumps the reference cubie transform");
    visualization::display(cube);
}

/// Prints the debug dump for a fresh lattice.
fn run_dump() {
    let cube = Cube::new();
    print!("{}", cube.lattice().cubie(REFERENCE_SLOT).format_columns());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cubie_dump() {
        let cube = Cube::new();
        let dump = cube.lattice().cubie(REFERENCE_SLOT).format_columns();
        insta::assert_snapshot!("reference_cubie_dump", dump);
    }
}
