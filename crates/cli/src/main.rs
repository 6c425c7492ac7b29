use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;
use std::path::Path;
use symgroup::float::are_perpendicular;
use symgroup::group::axial;
use symgroup::op::reflection_from_slice;
use symgroup::{PointGroup, SymOp};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "symgroup")]
#[command(about = "Build 3D symmetry groups and dump them as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a group and print it (or write it to --out with a provenance sidecar)
    Group(GroupArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Family {
    C,
    S,
    Ch,
    Cv,
    D,
    Dh,
    Dd,
    Cuboid,
    CuboidRotations,
    Reflection,
    Inversion,
    Screw,
    Glide,
}

#[derive(clap::Args, Debug)]
struct GroupArgs {
    #[arg(long, value_enum)]
    family: Family,
    /// Group index (order of the principal axis)
    #[arg(long, default_value_t = 1)]
    n: usize,
    /// Principal axis / mirror normal, comma separated
    #[arg(long, default_value = "0,0,1")]
    axis: String,
    /// Secondary axis perpendicular to --axis, comma separated
    #[arg(long, default_value = "1,0,0")]
    axis2: String,
    /// Screw angle in degrees
    #[arg(long, default_value_t = 180.0)]
    angle: f64,
    /// Screw / glide translation, comma separated
    #[arg(long, default_value = "0,0,1")]
    trans: String,
    /// Point the screw axis or glide plane passes through
    #[arg(long, default_value = "0,0,0")]
    origin: String,
    /// Lattice vectors as columns (nine comma separated numbers, column-major)
    #[arg(long)]
    cell: Option<String>,
    /// Include the product table in the output
    #[arg(long)]
    table: bool,
    #[arg(long)]
    out: Option<String>,
}

#[derive(Serialize)]
struct OpJson {
    w: [[f64; 3]; 3],
    t: [f64; 3],
    det: f64,
}

impl From<&SymOp> for OpJson {
    fn from(op: &SymOp) -> Self {
        let row = |i: usize| [op.w[(i, 0)], op.w[(i, 1)], op.w[(i, 2)]];
        Self {
            w: [row(0), row(1), row(2)],
            t: [op.t.x, op.t.y, op.t.z],
            det: op.determinant(),
        }
    }
}

#[derive(Serialize)]
struct GroupJson {
    family: Family,
    order: usize,
    ndim: usize,
    ops: Vec<OpJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_table: Option<Vec<Vec<usize>>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Group(args) => group(args),
        Action::Report => report(),
    }
}

fn parse_components(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number {c:?} in {s:?}"))
        })
        .collect()
}

fn parse_vec3(s: &str) -> Result<Vector3<f64>> {
    let c = parse_components(s)?;
    ensure!(c.len() == 3, "expected 3 components, got {} in {s:?}", c.len());
    Ok(Vector3::new(c[0], c[1], c[2]))
}

fn parse_axis(s: &str) -> Result<Vector3<f64>> {
    let a = parse_vec3(s)?;
    ensure!(a.iter().all(|x| x.is_finite()), "axis {s:?} is not finite");
    ensure!(a.norm() > 0.0, "axis {s:?} has zero length");
    Ok(a)
}

fn parse_cell(s: &str) -> Result<Matrix3<f64>> {
    let c = parse_components(s)?;
    ensure!(c.len() == 9, "unit cell needs 9 components, got {}", c.len());
    let cell = Matrix3::from_column_slice(&c);
    ensure!(
        cell.determinant().abs() > 1e-12,
        "unit cell {s:?} is singular"
    );
    Ok(cell)
}

fn build_group(args: &GroupArgs) -> Result<PointGroup> {
    let n = args.n;
    ensure!(n >= 1, "--n must be positive");
    let perpendicular_pair = || -> Result<(Vector3<f64>, Vector3<f64>)> {
        let a = parse_axis(&args.axis)?;
        let b = parse_axis(&args.axis2)?;
        ensure!(
            are_perpendicular(&a, &b),
            "--axis {} and --axis2 {} must be perpendicular",
            args.axis,
            args.axis2
        );
        Ok((a, b))
    };
    let g = match args.family {
        Family::C => axial::c_n(n, parse_axis(&args.axis)?),
        Family::S => axial::s_n(n, parse_axis(&args.axis)?),
        Family::Ch => axial::c_nh(n, parse_axis(&args.axis)?),
        Family::Cv => {
            let (a, b) = perpendicular_pair()?;
            axial::c_nv(n, a, b)
        }
        Family::D => {
            let (a, b) = perpendicular_pair()?;
            axial::d_n(n, a, b)
        }
        Family::Dh => {
            let (a, b) = perpendicular_pair()?;
            axial::d_nh(n, a, b)
        }
        Family::Dd => {
            let (a, b) = perpendicular_pair()?;
            axial::d_nd(n, a, b)
        }
        Family::Cuboid => axial::cuboid(),
        Family::CuboidRotations => axial::cuboid_rotations(),
        Family::Reflection => {
            let op = reflection_from_slice(&parse_components(&args.axis)?)?;
            PointGroup::new(vec![SymOp::identity(), op])
        }
        Family::Inversion => axial::inversion_group(),
        Family::Screw => {
            let trans = parse_vec3(&args.trans)?;
            if trans.norm() == 0.0 {
                bail!("screw translation must be non-zero");
            }
            axial::screw_group(args.angle, trans, parse_vec3(&args.origin)?)?
        }
        Family::Glide => {
            let a = parse_axis(&args.axis)?;
            let trans = parse_vec3(&args.trans)?;
            ensure!(
                are_perpendicular(&a, &trans),
                "glide --trans {} must be perpendicular to --axis {}",
                args.trans,
                args.axis
            );
            axial::glide_group(a, trans, parse_vec3(&args.origin)?)
        }
    };
    Ok(match &args.cell {
        Some(cell) => g.with_unit_cell(parse_cell(cell)?),
        None => g,
    })
}

fn to_json(family: Family, g: &PointGroup, table: bool) -> Result<GroupJson> {
    let product_table = if table { Some(g.product_table()?) } else { None };
    Ok(GroupJson {
        family,
        order: g.len(),
        ndim: g.ndim,
        ops: g.iter().map(OpJson::from).collect(),
        product_table,
    })
}

fn group(args: GroupArgs) -> Result<()> {
    tracing::info!(family = ?args.family, n = args.n, out = ?args.out, "group");
    let g = build_group(&args)?;
    tracing::info!(order = g.len(), translations = g.has_translations(), "built");
    let doc = serde_json::to_vec_pretty(&to_json(args.family, &g, args.table)?)?;
    let Some(out) = &args.out else {
        println!("{}", String::from_utf8_lossy(&doc));
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, &doc).with_context(|| format!("writing {out}"))?;
    let params = serde_json::json!({
        "family": args.family,
        "n": args.n,
        "axis": args.axis,
        "axis2": args.axis2,
        "angle": args.angle,
        "trans": args.trans,
        "origin": args.origin,
        "cell": args.cell,
    });
    let prov = provenance::write_sidecar(out_path, provenance::Payload::new("group", params))?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "symgroup_version": symgroup::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
