use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use searoute_lib::{
    GridBounds, GridCell, OceanGrid, PlannerConfig, RoutePlanner, RouteSummary, VesselParameters,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-optimal ocean weather routing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a minimum-fuel route across a synthetic weather field.
    Route {
        /// Start cell as lat_index,lon_index.
        #[arg(long, value_delimiter = ',', value_name = "LAT,LON")]
        start: Vec<usize>,

        /// Goal cell as lat_index,lon_index.
        #[arg(long, value_delimiter = ',', value_name = "LAT,LON")]
        goal: Vec<usize>,

        /// Transit speed in knots.
        #[arg(long, default_value_t = 15.0)]
        speed: f64,

        /// Seed for the synthetic weather field.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Lattice resolution in degrees.
        #[arg(long, default_value_t = 0.5)]
        resolution: f64,

        /// Vessel length in metres.
        #[arg(long, default_value_t = 200.0, allow_hyphen_values = true)]
        length: f64,

        /// Vessel beam in metres.
        #[arg(long, default_value_t = 32.0)]
        beam: f64,

        /// Vessel draft in metres.
        #[arg(long, default_value_t = 12.0)]
        draft: f64,

        /// Hull block coefficient.
        #[arg(long, default_value_t = 0.8)]
        block_coefficient: f64,

        /// Vessel design speed in knots.
        #[arg(long, default_value_t = 15.0)]
        design_speed: f64,

        /// Emit the route summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            start,
            goal,
            speed,
            seed,
            resolution,
            length,
            beam,
            draft,
            block_coefficient,
            design_speed,
            json,
        } => {
            let vessel = VesselParameters::new(length, beam, draft, block_coefficient, design_speed)
                .context("invalid vessel parameters")?;
            handle_route(&start, &goal, speed, seed, resolution, vessel, json)
        }
    }
}

fn handle_route(
    start: &[usize],
    goal: &[usize],
    speed: f64,
    seed: u64,
    resolution: f64,
    vessel: VesselParameters,
    json: bool,
) -> Result<()> {
    let start = parse_cell(start).context("--start expects lat_index,lon_index")?;
    let goal = parse_cell(goal).context("--goal expects lat_index,lon_index")?;

    let grid = OceanGrid::synthetic(GridBounds::default(), resolution, 1, seed)
        .context("failed to generate the synthetic weather field")?;
    let config = PlannerConfig {
        cell_spacing_km: grid.cell_spacing_km(),
        time_index: 0,
    };
    let planner = RoutePlanner::with_config(&grid, vessel, config)?;

    let plan = planner.plan(start, goal, speed)?;
    if !plan.found() {
        println!(
            "No route found between ({}, {}) and ({}, {})",
            start.lat_index, start.lon_index, goal.lat_index, goal.lon_index
        );
        return Ok(());
    }

    let summary = RouteSummary::from_plan(&grid, planner.model(), planner.config(), &plan)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }

    Ok(())
}

fn parse_cell(raw: &[usize]) -> Result<GridCell> {
    if raw.len() != 2 {
        bail!("expected lat_index,lon_index, got {raw:?}");
    }
    Ok(GridCell::new(raw[0], raw[1]))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
