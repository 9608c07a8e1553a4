//! trilhos — rail route planner over the Brazilian state-capital network.
//!
//! Loads the network from a snapshot (building and caching it on first run),
//! resolves the two endpoints by city name or by coordinate, and prints a
//! turn-by-turn route.  Optionally exports the route for map renderers.
//!
//! ```text
//! trilhos route --from "São Paulo" --to Salvador
//! trilhos route --from-coord=-22.91,-47.06 --to Recife --weight travel_time
//! trilhos route --from Manaus --to Natal --export out --format json
//! trilhos cities
//! ```

mod display;
mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use rail_core::{GeoPoint, NodeId, WeightKey};
use rail_network::topology::load_topology_csv;
use rail_network::{
    load_or_build, plan_route, DijkstraRouter, LinearScanLocator, Locator, NetworkError,
    RailNetwork, Topology,
};
use rail_output::{CsvWriter, JsonWriter, RouteWriter};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "trilhos", version, about = "Plan rail routes between Brazilian capitals")]
struct Cli {
    /// Network snapshot used as a cache between runs.
    #[arg(long, env = "TRILHOS_SNAPSHOT", default_value = "data/rail_network.json")]
    snapshot: PathBuf,

    /// Ignore any existing snapshot and rebuild from topology.
    #[arg(long)]
    rebuild: bool,

    /// City CSV (`name,lat,lon`) replacing the built-in topology.
    #[arg(long, requires = "connections")]
    cities: Option<PathBuf>,

    /// Connection CSV (`from,to,distance_km`) replacing the built-in topology.
    #[arg(long, requires = "cities")]
    connections: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best route between two cities.
    Route(RouteArgs),
    /// List the cities on the network.
    Cities,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin city name.
    #[arg(long, required_unless_present = "from_coord", conflicts_with = "from_coord")]
    from: Option<String>,

    /// Origin as `lat,lon`; snapped to the nearest city.
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    from_coord: Option<GeoPoint>,

    /// Destination city name.
    #[arg(long, required_unless_present = "to_coord", conflicts_with = "to_coord")]
    to: Option<String>,

    /// Destination as `lat,lon`; snapped to the nearest city.
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    to_coord: Option<GeoPoint>,

    /// Edge attribute to minimise.
    #[arg(long, default_value_t = WeightKey::Length)]
    weight: WeightKey,

    /// Directory to export the route into.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn parse_coord(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude {lat:?}: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("longitude {lon:?}: {e}"))?;
    let p = GeoPoint::new(lat, lon);
    if !p.is_valid() {
        return Err(format!("{p} is outside WGS-84 bounds"));
    }
    Ok(p)
}

// ── Network loading ───────────────────────────────────────────────────────────

fn load_network(cli: &Cli) -> Result<RailNetwork> {
    let (topology, custom): (Topology, bool) = match (&cli.cities, &cli.connections) {
        (Some(c), Some(k)) => (
            load_topology_csv(c, k).context("reading topology CSV")?,
            true,
        ),
        _ => (network::brazil(), false),
    };

    // A custom topology never reuses a snapshot built from another one.
    let force = cli.rebuild || custom;
    let t0 = Instant::now();
    let net = load_or_build(&cli.snapshot, &topology, force)
        .with_context(|| format!("loading network (snapshot {})", cli.snapshot.display()))?;

    println!(
        "Rail network ready: {} cities, {} connections ({:.1} ms)",
        net.node_count(),
        net.edge_count(),
        t0.elapsed().as_secs_f64() * 1_000.0
    );
    Ok(net)
}

// ── Endpoint resolution ───────────────────────────────────────────────────────

fn resolve(net: &RailNetwork, name: Option<&str>, coord: Option<GeoPoint>) -> Result<NodeId> {
    match (name, coord) {
        (Some(name), _) => match net.find_by_name(name) {
            Some(id) => Ok(id),
            None => bail!("unknown city {name:?}; run `trilhos cities` for the list"),
        },
        (None, Some(p)) => {
            let hit = LinearScanLocator.nearest(net, p)?;
            log::info!(
                "{p} snapped to {} ({})",
                net.nodes()[hit.id.index()].name,
                display::km(hit.distance_m)
            );
            Ok(hit.id)
        }
        (None, None) => bail!("an endpoint needs a city name or a coordinate"),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_route(net: &RailNetwork, args: &RouteArgs) -> Result<()> {
    let from = resolve(net, args.from.as_deref(), args.from_coord)?;
    let to = resolve(net, args.to.as_deref(), args.to_coord)?;
    let from_name = &net.nodes()[from.index()].name;
    let to_name = &net.nodes()[to.index()].name;

    println!();
    println!("Computing route ...");
    let route = match plan_route(&DijkstraRouter::new(), net, from, to, args.weight) {
        Ok(route) => route,
        Err(NetworkError::NoPath { .. }) => {
            println!("No connection between {from_name} and {to_name}.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    print!("{}", display::render_route(&route, from_name, to_name, args.weight));

    if let Some(dir) = &args.export {
        export(dir, args.format, &route, args.weight)?;
        println!();
        println!("Route exported to {}", dir.display());
    }
    Ok(())
}

fn export(dir: &Path, format: ExportFormat, route: &rail_network::Route, weight: WeightKey) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut writer: Box<dyn RouteWriter> = match format {
        ExportFormat::Csv  => Box::new(CsvWriter::new(dir)?),
        ExportFormat::Json => Box::new(JsonWriter::new(dir)?),
    };
    writer.write_route(route, weight)?;
    writer.finish()?;
    Ok(())
}

fn run_cities(net: &RailNetwork) {
    println!();
    println!("{:<4} {:<18} {:>10} {:>10} {:>6}", "#", "City", "Lat", "Lon", "Links");
    println!("{}", "-".repeat(52));
    for id in net.node_ids() {
        let node = &net.nodes()[id.index()];
        println!(
            "{:<4} {:<18} {:>10.4} {:>10.4} {:>6}",
            id.0 + 1,
            node.name,
            node.pos.lat,
            node.pos.lon,
            net.degree(id)
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    println!("=== trilhos: Brazilian rail route planner ===");
    let net = load_network(&cli)?;

    match &cli.command {
        Command::Route(args) => run_route(&net, args),
        Command::Cities => {
            run_cities(&net);
            Ok(())
        }
    }
}
