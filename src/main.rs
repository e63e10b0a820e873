use std::error::Error;

use clap::Parser;
use palette::{named, WithAlpha};
use planet_sim::{
    scatter::{grid, scatter, GridLayout},
    Body, CliArgs, Color, Config, IdAllocator, SphereRenderer, Trail,
};
use tracing::{info, trace, warn};
use ultraviolet::Vec3;

/// Logs draw calls instead of rasterizing them.
#[derive(Default)]
struct TracingRenderer {
    spheres: usize,
    lines: usize,
}

impl SphereRenderer for TracingRenderer {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.spheres += 1;
        trace!(?center, radius, ?color, "sphere");
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.lines += 1;
        trace!(?from, ?to, alpha = color.alpha, "line");
    }
}

const DRAW_EVERY: u32 = 60;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    planet_sim::log::init_logging(Some(&config));
    info!(dir = %config_dir.display(), "planet-sim starting");

    let material = config.body.material()?;
    let mut ids = IdAllocator::new();

    let mut bodies = Vec::with_capacity(config.demo.bodies + 1);
    let sun_radius = config.scatter.inner_radius * 0.5;
    if sun_radius > 0.0 {
        let sun_id = ids.allocate()?;
        let sun = Body::with_material(sun_id, Vec3::zero(), Vec3::zero(), sun_radius, material)?;
        bodies.push(sun.pinned());
    }
    bodies.extend(scatter(config.demo.bodies, &config.scatter, &mut ids, &material)?);

    let block = GridLayout {
        origin: Vec3::new(config.scatter.outer_radius * 1.5, 0.0, 0.0),
        columns: config.demo.grid_columns,
        rows: config.demo.grid_rows,
        radius: config.scatter.min_radius,
        spacing: config.scatter.min_radius,
        stationary: false,
    };
    bodies.extend(grid(&block, &mut ids, &material)?);

    if config.trail.enabled {
        bodies = bodies
            .into_iter()
            .map(|b| b.with_trail(Trail::from_config(&config.trail)))
            .collect();
    }

    let sun_color: Color = named::GOLD.with_alpha(255);
    let planet_color: Color = named::LIGHTSKYBLUE.with_alpha(255);
    let mut renderer = TracingRenderer::default();

    for tick in 0..config.demo.ticks {
        if tick > 0 && tick % DRAW_EVERY == 0 {
            if let Err(e) = config.reload_tuning(&config_dir, &args) {
                warn!(error = %e, "config reload failed, keeping current settings");
            }
        }

        let dt = config.demo.dt;
        for body in bodies.iter_mut().filter(|b| !b.stationary) {
            let d = body.pos.mag();
            if d > 0.0 {
                let pull = -body.pos / d * config.demo.central_pull * body.mass();
                body.add_force(pull);
            }
        }
        for body in bodies.iter_mut() {
            body.update(dt);
        }

        if tick % DRAW_EVERY == 0 {
            for body in &bodies {
                let color = if body.stationary { sun_color } else { planet_color };
                body.draw(&mut renderer, color);
            }
            let energy: f32 = bodies.iter().map(Body::kinetic_energy).sum();
            info!(tick, energy, "frame");
        }
    }

    let moving: Vec<&Body> = bodies.iter().filter(|b| !b.stationary).collect();
    let mean_speed = if moving.is_empty() {
        0.0
    } else {
        moving.iter().map(|b| b.speed()).sum::<f32>() / moving.len() as f32
    };
    let fastest = moving.iter().max_by(|a, b| a.speed().total_cmp(&b.speed()));

    info!(
        bodies = bodies.len(),
        ticks = config.demo.ticks,
        mean_speed,
        spheres = renderer.spheres,
        lines = renderer.lines,
        "simulation finished"
    );
    if let Some(body) = fastest {
        info!(id = %body.id, speed = body.speed(), "fastest body");
    }

    Ok(())
}
