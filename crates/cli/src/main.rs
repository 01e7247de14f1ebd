//! Diagnostic front-end: prints polygons and polygon sequences to stdout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use polygons::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Print regular polygons and their derived quantities")]
struct Cmd {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace with cache events)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print one polygon and its derived quantities
    Polygon {
        #[arg(long, default_value_t = DEFAULT_EDGES)]
        edges: usize,
        #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,
    },
    /// Print the polygons with 3..=max edges sharing one radius
    Sequence {
        #[arg(long, default_value_t = DEFAULT_EDGES)]
        max_edges: usize,
        #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level(cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    let text = match cmd.action {
        Action::Polygon { edges, radius } => polygon(edges, radius)?,
        Action::Sequence { max_edges, radius } => sequence(max_edges, radius)?,
    };
    print!("{text}");
    Ok(())
}

fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn polygon(edges: usize, radius: f64) -> Result<String> {
    tracing::info!(edges, radius, "polygon");
    let p = Polygon::new(edges, radius).context("building polygon")?;
    let s = p.summary();
    Ok(format!(
        "{p}\n  vertices:           {}\n  interior angle deg: {}\n  edge length:        {}\n  \
         apothem:            {}\n  area:               {}\n  perimeter:          {}\n",
        p.vertex_count(),
        s.interior_angle_deg,
        s.edge_length,
        s.apothem,
        s.area,
        s.perimeter
    ))
}

fn sequence(max_edges: usize, radius: f64) -> Result<String> {
    tracing::info!(max_edges, radius, "sequence");
    let seq = PolygonSequence::new(max_edges, radius).context("building polygon sequence")?;
    let mut out = format!("{seq}\n");
    for p in &seq {
        let s = p.summary();
        out.push_str(&format!(
            "{p}: angle={:.4} edge={:.4} apothem={:.4} area={:.4} perimeter={:.4}\n",
            s.interior_angle_deg, s.edge_length, s.apothem, s.area, s.perimeter
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sequence_with_verbosity() {
        let cmd =
            Cmd::try_parse_from(["cli", "-vv", "sequence", "--max-edges", "6", "--radius", "2"])
                .unwrap();
        assert_eq!(cmd.verbose, 2);
        match cmd.action {
            Action::Sequence { max_edges, radius } => {
                assert_eq!(max_edges, 6);
                assert_eq!(radius, 2.0);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn polygon_defaults_and_negative_radius() {
        let cmd = Cmd::try_parse_from(["cli", "polygon"]).unwrap();
        assert!(matches!(cmd.action, Action::Polygon { edges: 3, .. }));
        let cmd = Cmd::try_parse_from(["cli", "polygon", "--radius", "-1.5"]).unwrap();
        assert!(matches!(cmd.action, Action::Polygon { radius, .. } if radius == -1.5));
    }

    #[test]
    fn non_integer_edges_rejected_by_parser() {
        assert!(Cmd::try_parse_from(["cli", "polygon", "--edges", "3.5"]).is_err());
    }

    #[test]
    fn export_flags_are_not_accepted() {
        assert!(Cmd::try_parse_from(["cli", "sequence", "--out", "t.csv"]).is_err());
    }

    #[test]
    fn too_few_edges_is_an_error() {
        let err = polygon(2, 1.0).unwrap_err();
        assert!(format!("{err:#}").contains("at least 3 edges"));
        assert!(sequence(2, 1.0).is_err());
    }

    #[test]
    fn polygon_text_lists_quantities() {
        let text = polygon(3, 1.0).unwrap();
        assert!(text.starts_with("Polygon(edges=3, rad=1)\n"));
        assert!(text.contains("interior angle deg: 60\n"));
    }

    #[test]
    fn sequence_text_has_one_line_per_polygon() {
        let text = sequence(6, 2.0).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "PolygonSequence(iterable: edges=6, fixed: rad=2)");
        assert!(lines[4].starts_with("Polygon(edges=6, rad=2): angle=120.0000 edge=2.0000"));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), Level::WARN);
        assert_eq!(level(1), Level::INFO);
        assert_eq!(level(3), Level::TRACE);
        assert_eq!(level(9), Level::TRACE);
    }
}
