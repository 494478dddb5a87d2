//! Prints the face layout of an envelopment and a marks render pass as JSON.
//!
//! ```text
//! spatialkit-inspect --width 400 --height 300 --depth 0 --stateful \
//!     --faces back,front,top --mark 10,20,0 --mark 5,5,2,touch
//! ```
//!
//! Set `RUST_LOG=debug` to see cache assignments and face decisions.

use clap::Parser;
use serde::Serialize;
use spatialkit_core::envelopment::{Envelopment, FaceGeometry, Faces, Placement};
use spatialkit_core::{
    Adaptation, DrawnMark, LayoutEnvironment, Mark, MarkKey, MarksOverlay, Point3D, Size3D,
    SpatialError, Vector3D,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum InspectError {
    #[error("Invalid mark {0}, expected x,y,z or x,y,z,touch")]
    InvalidMark(String),
    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

#[derive(Debug, Parser)]
#[command(name = "spatialkit-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print envelopment face geometry and drawn marks as JSON", long_about = None)]
struct Cli {
    /// Volume width
    #[arg(long, default_value_t = 400.0, allow_negative_numbers = true)]
    width: f64,

    /// Volume height
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    height: f64,

    /// Volume depth; 0 lays the envelopment out flat
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    depth: f64,

    /// Adaptation override (simulateFrontView, show:<placement> or a placement)
    #[arg(long)]
    adaptation: Option<Adaptation>,

    /// Build content through the state-aware form
    #[arg(long)]
    stateful: bool,

    /// Placements that receive content
    #[arg(long, value_delimiter = ',', default_values_t = Placement::ALL.to_vec())]
    faces: Vec<Placement>,

    /// Mark to draw as x,y,z or x,y,z,touch (repeatable)
    #[arg(long = "mark", value_parser = parse_mark)]
    marks: Vec<Mark>,
}

impl Cli {
    fn size(&self) -> Result<Size3D, InspectError> {
        Ok(Size3D::try_new(self.width, self.height, self.depth)?)
    }
}

#[derive(Serialize)]
struct LayerReport {
    geometry: FaceGeometry,
    origin_offset: Vector3D,
    content: Vec<String>,
}

#[derive(Serialize)]
struct Report {
    size: Size3D,
    adaptation: String,
    layers: Vec<LayerReport>,
    marks: Vec<DrawnMark<MarkKey>>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let size = match cli.size() {
        Ok(size) => size,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };

    let report = inspect(&cli, size);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            log::error!("Failed to serialize report: {}", err);
            std::process::exit(1);
        }
    }
}

fn parse_mark(value: &str) -> Result<Mark, InspectError> {
    let invalid = || InspectError::InvalidMark(value.to_string());
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let (coords, touch) = match parts.as_slice() {
        [x, y, z] => ([*x, *y, *z], false),
        [x, y, z, "touch"] => ([*x, *y, *z], true),
        _ => return Err(invalid()),
    };
    let mut numbers = [0.0; 3];
    for (slot, text) in numbers.iter_mut().zip(coords) {
        *slot = text.parse().map_err(|_| invalid())?;
    }
    let position = Point3D::new(numbers[0], numbers[1], numbers[2]);
    Ok(if touch {
        Mark::touch(position)
    } else {
        Mark::point(position)
    })
}

fn inspect(cli: &Cli, size: Size3D) -> Report {
    let mut env = LayoutEnvironment::new();
    if let Some(adaptation) = cli.adaptation {
        env = env.with_adaptation(adaptation);
    }

    let mut faces = Faces::new();
    for placement in &cli.faces {
        faces.push(*placement, placement.name().to_string());
    }
    let envelopment = if cli.stateful {
        Envelopment::stateful(move |_| faces.clone())
    } else {
        Envelopment::new(faces)
    };

    let layers = envelopment
        .layout(size, &env)
        .into_iter()
        .map(|layer| LayerReport {
            origin_offset: layer.geometry.origin_offset(size),
            geometry: layer.geometry,
            content: layer.content,
        })
        .collect();

    let mut overlay = MarksOverlay::from_environment(&env);
    for (index, mark) in cli.marks.iter().enumerate() {
        overlay
            .marks_mut()
            .insert(MarkKey::named(format!("mark-{}", index)), *mark);
    }

    Report {
        size,
        adaptation: envelopment.resolve_adaptation(&env).to_string(),
        layers,
        marks: overlay.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("spatialkit-inspect").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let cli = parse(&[
            "--depth",
            "0",
            "--stateful",
            "--faces",
            "back,front",
            "--mark",
            "1,2,3,touch",
            "--mark",
            "0,0,0",
            "--adaptation",
            "show:front",
        ])
        .unwrap();
        assert!(!cli.size().unwrap().has_depth());
        assert!(cli.stateful);
        assert_eq!(cli.faces, vec![Placement::Back, Placement::Front]);
        assert_eq!(
            cli.marks,
            vec![
                Mark::touch(Point3D::new(1.0, 2.0, 3.0)),
                Mark::point(Point3D::ZERO)
            ]
        );
        assert_eq!(cli.adaptation, Some(Adaptation::Show(Placement::Front)));
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.size().unwrap(), Size3D::new(400.0, 300.0, 100.0));
        assert_eq!(cli.faces, Placement::ALL.to_vec());
        assert!(cli.marks.is_empty());
        assert_eq!(cli.adaptation, None);
    }

    #[test]
    fn test_parse_errors() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).unwrap_err().kind();
        assert!(parse(&["--width"]).is_err());
        assert_eq!(kind(&["--zoom", "2"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["--faces", "ceiling"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--mark", "1,2"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--adaptation", "sideways"]), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        let cli = parse(&["--depth", "-1"]).unwrap();
        assert!(matches!(
            cli.size(),
            Err(InspectError::Spatial(SpatialError::InvalidSize(_)))
        ));
    }

    #[test]
    fn test_inspect_flat_stateful() {
        let cli = parse(&["--depth", "0", "--stateful", "--mark", "0,0,0"]).unwrap();
        let report = inspect(&cli, cli.size().unwrap());
        assert_eq!(report.adaptation, "simulateFrontView");
        let placements: Vec<_> = report.layers.iter().map(|l| l.geometry.placement).collect();
        assert_eq!(
            placements,
            vec![Placement::Back, Placement::Front, Placement::FrontOutward]
        );
        assert_eq!(report.marks.len(), 1);
    }
}
