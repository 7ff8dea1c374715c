mod input;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use polysym::api::{self as ps, Polyhedron};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use input::{read_faces, Report};

#[derive(Parser)]
#[command(name = "polysym", version = polysym::VERSION)]
#[command(about = "Find the symmetries and point group of a polyhedron")]
struct Cmd {
    /// Log search milestones at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a face list read from JSON
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Classify one of the built-in solids
    Solid {
        name: SolidName,
        /// Polygon sides for axial solids; point count for `random`
        #[arg(long, default_value_t = 5)]
        sides: usize,
        /// Axial height; defaults to a regular solid where one exists
        #[arg(long)]
        height: Option<f64>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SolidName {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    Prism,
    Antiprism,
    Pyramid,
    Bipyramid,
    Random,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Classify { input, json } => {
            tracing::info!(input = %input.display(), "classify");
            let poly = read_faces(&input)?;
            emit(&poly, json)
        }
        Action::Solid {
            name,
            sides,
            height,
            seed,
            json,
        } => {
            tracing::info!(?name, sides, ?height, seed, "solid");
            let poly = build_solid(name, sides, height, seed)?;
            emit(&poly, json)
        }
    }
}

fn build_solid(
    name: SolidName,
    sides: usize,
    height: Option<f64>,
    seed: u64,
) -> Result<Polyhedron> {
    let h = height.unwrap_or(1.0);
    let poly = match name {
        SolidName::Tetrahedron => ps::tetrahedron(),
        SolidName::Cube => ps::cube(),
        SolidName::Octahedron => ps::octahedron(),
        SolidName::Dodecahedron => ps::dodecahedron(),
        SolidName::Icosahedron => ps::icosahedron(),
        SolidName::Prism => match height {
            Some(h) => ps::prism(sides, h),
            None => ps::regular_prism(sides),
        },
        SolidName::Antiprism => ps::antiprism(sides, h),
        SolidName::Pyramid => ps::pyramid(sides, h),
        SolidName::Bipyramid => ps::bipyramid(sides, h),
        SolidName::Random => ps::random_hull(sides, seed),
    }?;
    Ok(poly)
}

fn emit(poly: &Polyhedron, json: bool) -> Result<()> {
    let report = Report::build(poly)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_global_verbose_after_subcommand() {
        let cmd = Cmd::try_parse_from(["polysym", "solid", "prism", "--sides", "6", "-v"]).unwrap();
        assert!(cmd.verbose);
        assert!(matches!(
            cmd.action,
            Action::Solid {
                name: SolidName::Prism,
                sides: 6,
                height: None,
                ..
            }
        ));
    }

    #[test]
    fn built_in_solids_classify() {
        let label = |name, sides, height| {
            let poly = build_solid(name, sides, height, 0).unwrap();
            Report::build(&poly).unwrap().label
        };
        assert_eq!(label(SolidName::Cube, 5, None), "Oh");
        assert_eq!(label(SolidName::Prism, 5, None), "D5h");
        assert_eq!(label(SolidName::Antiprism, 5, None), "D5d");
        assert_eq!(label(SolidName::Pyramid, 6, Some(0.5)), "C6v");
    }

    #[test]
    fn too_few_sides_is_an_error() {
        assert!(build_solid(SolidName::Prism, 2, None, 0).is_err());
    }
}
