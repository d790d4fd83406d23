use clap::Subcommand;
use ursinity_core::error::Result;
use ursinity_core::{math, Vec2};

#[derive(Subcommand)]
pub enum MathAction {
    /// Convert degrees to radians
    Radians {
        #[arg(allow_hyphen_values = true)]
        degrees: f32,
    },
    /// Convert radians to degrees
    Degrees {
        #[arg(allow_hyphen_values = true)]
        radians: f32,
    },
    /// Point on a circle around (x, y)
    Point {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f32,
        /// Radius; negative values point the other way
        #[arg(long, allow_hyphen_values = true)]
        distance: f32,
        /// Angle in degrees, counter-clockwise from +x
        #[arg(long, allow_hyphen_values = true)]
        angle: f32,
    },
}

pub fn run(action: MathAction) -> Result<()> {
    match action {
        MathAction::Radians { degrees } => println!("{}", math::to_radians(degrees)),
        MathAction::Degrees { radians } => println!("{}", math::to_degrees(radians)),
        MathAction::Point {
            x,
            y,
            distance,
            angle,
        } => {
            let p = math::point_on_circle(Vec2::new(x, y), distance, angle);
            println!("{} {}", p.x, p.y);
        }
    }
    Ok(())
}
