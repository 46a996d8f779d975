use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use rs_cobot_kinematics::animation::Sweep;
use rs_cobot_kinematics::control_mapping::RobotModel;
use rs_cobot_kinematics::presets::PresetTable;
use rs_cobot_kinematics::render_model::{skeleton, visual_frames};
use rs_cobot_kinematics::session::Session;
use rs_cobot_kinematics::urdf::from_urdf_file;
use rs_cobot_kinematics::utils::{format_joints, format_pose};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Solves the pose of every link of a six axis arm and prints it.
#[derive(Parser, Debug)]
#[command(name = "cobot-pose", version, about)]
struct Args {
    /// Robot model: mycobot320 (values are control parameters) or generic (joint angles)
    #[arg(long, default_value = "mycobot320")]
    robot: String,

    /// Read the chain from this URDF file instead of the built-in table
    #[arg(long)]
    urdf: Option<String>,

    /// YAML file overriding preset values
    #[arg(long)]
    presets: Option<String>,

    /// List available presets and exit
    #[arg(long)]
    list: bool,

    /// Preset to solve
    preset: Option<String>,

    /// Comma separated values to solve, like "0,0.5,-0.2,0,0,0"
    #[arg(long, allow_hyphen_values = true)]
    joints: Option<String>,

    /// Values given with --joints are in degrees
    #[arg(long)]
    degrees: bool,

    /// Print the tip position along a demo sweep of this many steps
    #[arg(long)]
    animate: Option<usize>,

    /// Also print the skeleton polyline and link visual placements
    #[arg(long)]
    skeleton: bool,
}

fn parse_values(text: &str, degrees: bool) -> Result<Vec<f64>> {
    text.split(',')
        .map(|s| {
            let value: f64 = s.trim().parse()
                .with_context(|| format!("Not a number: '{}'", s.trim()))?;
            Ok(if degrees { value.to_radians() } else { value })
        })
        .collect()
}

fn print_poses(session: &Session, with_skeleton: bool) {
    let poses = session.poses();
    println!("Values:");
    print!("{}", session.angles_report());
    println!("Joint angles, degrees: {}", format_joints(&session.joints()));
    println!("Link poses:");
    for (i, pose) in poses.iter().enumerate() {
        println!("  Link {}: {}", i + 1, format_pose(pose));
    }
    let outside = session.out_of_limits();
    if !outside.is_empty() {
        let names: Vec<String> = outside.iter().map(|i| format!("J{}", i + 1)).collect();
        println!("Outside joint limits: {}", names.join(", "));
    }
    if with_skeleton {
        println!("Skeleton:");
        for point in skeleton(session.chain(), &poses) {
            println!("  [{:.5}, {:.5}, {:.5}]", point.x, point.y, point.z);
        }
        println!("Visuals:");
        for placed in visual_frames(session.chain(), &poses) {
            let owner = placed.link.map_or("base".to_string(), |i| format!("link {}", i + 1));
            println!("  {:<7} {} {:?} at {}", owner, placed.visual.color, placed.visual.shape,
                     format_pose(&placed.placement));
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let model = RobotModel::from_name(&args.robot)
        .ok_or_else(|| anyhow!("Unknown robot '{}', use mycobot320 or generic", args.robot))?;

    let chain = match &args.urdf {
        Some(path) => from_urdf_file(path)
            .with_context(|| format!("Cannot read robot description from {}", path))?,
        None => model.chain(),
    };
    let presets = match &args.presets {
        Some(path) => PresetTable::from_yaml_file(path)
            .with_context(|| format!("Cannot read presets from {}", path))?,
        None => PresetTable::builtin(),
    };
    info!("Using chain '{}' for robot {}", chain.name(), model.name());

    let mut session = Session::with_chain(model, chain, presets);

    if args.list {
        print!("{}", session.presets().listing());
        return Ok(());
    }

    if let Some(steps) = args.animate {
        let sweep = Sweep::from_limits(session.chain().all_limits(), steps)?;
        for (step, frame) in sweep.frames().enumerate() {
            session.set_joints(&frame)?;
            let tip = session.poses()[5];
            println!("{:4}: {}", step, format_pose(&tip));
        }
        return Ok(());
    }

    match (&args.preset, &args.joints) {
        (Some(_), Some(_)) => bail!("Give either a preset name or --joints, not both"),
        (Some(name), None) => {
            if let Err(e) = session.apply_preset_named(name) {
                bail!("{}. Available presets:\n{}", e, session.presets().listing());
            }
        }
        (None, Some(text)) => session.set_all(&parse_values(text, args.degrees)?)?,
        (None, None) => println!("No preset or --joints given, solving the home position"),
    }

    println!("{}", session.chain().describe());
    print_poses(&session, args.skeleton);
    Ok(())
}
