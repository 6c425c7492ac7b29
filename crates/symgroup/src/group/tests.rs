use super::axial::*;
use super::PointGroup;
use crate::error::SymError;
use crate::op::{reflection, rotation, rotoreflection, screw, SymOp};
use crate::SymCfg;
use nalgebra::{vector, Matrix3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn assert_identity_first(g: &PointGroup) {
    assert!(!g.is_empty());
    assert!(g[0].is_identity_eps(1e-12), "identity must come first");
}

fn assert_closed(g: &PointGroup) {
    let table = g.product_table().expect("group should be closed");
    let n = g.len();
    // Identity row and diagonal of inv(g_i)∘g_i.
    assert_eq!(table[0], (0..n).collect::<Vec<_>>());
    for (i, row) in table.iter().enumerate() {
        assert_eq!(row[i], 0);
        // Latin square: every row is a permutation.
        let mut sorted = row.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }
}

fn random_perpendicular_pair(rng: &mut StdRng) -> (Vector3<f64>, Vector3<f64>) {
    let a = vector![
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0)
    ] + vector![0.0, 0.0, 1.5];
    let r = vector![
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0)
    ];
    let mut b = a.cross(&r);
    if b.norm() < 1e-3 {
        b = a.cross(&Vector3::x());
    }
    (a, b)
}

#[test]
fn c4_about_z_is_quarter_turns() {
    let g = c_n(4, Vector3::z());
    assert_eq!(g.len(), 4);
    assert_eq!(g.ndim, 3);
    for (i, op) in g.iter().enumerate() {
        assert!(op.approx_eq(&rotation(90.0 * i as f64, Vector3::z()), 1e-12));
    }
    assert_closed(&g);
}

#[test]
fn c_n_orders_and_generator_power() {
    let axis = vector![1.0, 2.0, 2.0];
    for n in 1..=12 {
        let g = c_n(n, axis);
        assert_eq!(g.len(), n);
        assert_identity_first(&g);
        let gen = rotation(360.0 / n as f64, axis);
        let mut acc = SymOp::identity();
        for _ in 0..n {
            acc = acc * gen;
        }
        assert!(acc.is_identity_eps(1e-10));
    }
}

#[test]
#[should_panic(expected = "positive")]
fn c_zero_panics() {
    let _ = c_n(0, Vector3::z());
}

#[test]
fn rotation_group_alias() {
    let a = rotation_group(3, Vector3::y());
    let b = c_n(3, Vector3::y());
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(b.iter()).all(|(x, y)| x.approx_eq(y, 0.0)));
}

#[test]
fn s_n_even_alternates() {
    let n = 4;
    let g = s_n(n, Vector3::z());
    assert_eq!(g.len(), 4);
    assert_identity_first(&g);
    assert!(g[1].approx_eq(&rotoreflection(90.0, Vector3::z()), 1e-12));
    assert!(g[2].approx_eq(&rotation(180.0, Vector3::z()), 1e-12));
    assert!(g[3].approx_eq(&rotoreflection(270.0, Vector3::z()), 1e-12));
    // Elements match the powers of the generator.
    let gen = rotoreflection(90.0, Vector3::z());
    let mut acc = SymOp::identity();
    for op in g.iter() {
        assert!(op.approx_eq(&acc, 1e-10));
        acc = acc * gen;
    }
    assert_closed(&g);
    assert_closed(&rotoreflection_group(6, vector![1.0, 1.0, 0.0]));
}

#[test]
fn s_n_odd_is_c_nh() {
    let axis = vector![0.0, 1.0, 1.0];
    let s3 = s_n(3, axis);
    let c3h = c_nh(3, axis);
    assert_eq!(s3.len(), 6);
    assert!(s3.iter().zip(c3h.iter()).all(|(a, b)| a.approx_eq(b, 1e-12)));
    assert_closed(&s3);
}

#[test]
fn two_element_groups() {
    let r = reflection_group(vector![1.0, 0.0, 0.0]);
    assert_eq!(r.len(), 2);
    assert!(r[1].approx_eq(&reflection(Vector3::x()), 0.0));
    assert_closed(&r);

    let inv = inversion_group();
    assert_eq!(inv.len(), 2);
    assert!((inv[1].w + Matrix3::identity()).amax() == 0.0);
    assert_closed(&inv);

    let gl = glide_group(Vector3::z(), vector![0.5, 0.0, 0.0], Vector3::zeros());
    assert_eq!(gl.len(), 2);
    assert_identity_first(&gl);
    assert!(gl.has_translations());
}

#[test]
#[should_panic(expected = "mirror plane")]
fn glide_group_rejects_non_perpendicular_translation() {
    let _ = glide_group(Vector3::z(), vector![0.0, 0.0, 0.5], Vector3::zeros());
}

#[test]
fn glide_group_closes_on_compatible_lattice() {
    let gl = glide_group(Vector3::z(), vector![0.5, 0.0, 0.0], Vector3::zeros());
    assert!(matches!(gl.product_table(), Err(SymError::MissingUnitCell)));
    let gl = gl.with_unit_cell(Matrix3::identity());
    assert_closed(&gl);
}

#[test]
fn composite_orders() {
    let z = Vector3::z();
    let x = Vector3::x();
    for n in 1..=6 {
        let expected = [
            ("c_nh", c_nh(n, z), 2 * n),
            ("c_nv", c_nv(n, z, x), 2 * n),
            ("d_n", d_n(n, z, x), 2 * n),
            ("d_nh", d_nh(n, z, x), 4 * n),
            ("d_nd", d_nd(n, z, x), 4 * n),
        ];
        for (name, g, order) in expected {
            assert_eq!(g.len(), order, "{name}({n})");
            assert_identity_first(&g);
            assert_closed(&g);
        }
    }
}

#[test]
fn aliases_match_schoenflies_names() {
    let z = Vector3::z();
    let x = Vector3::x();
    assert_eq!(pyramidal(3, z, x).len(), c_nv(3, z, x).len());
    assert_eq!(dihedral(3, z, x).len(), d_n(3, z, x).len());
    assert_eq!(prismatic(3, z, x).len(), d_nh(3, z, x).len());
    assert_eq!(antiprismatic(3, z, x).len(), d_nd(3, z, x).len());
}

#[test]
fn composites_on_random_axes_close() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let (a, b) = random_perpendicular_pair(&mut rng);
        let n = rng.gen_range(2..6);
        assert_closed(&c_nv(n, a, b));
        assert_closed(&d_n(n, a, b));
        assert_closed(&d_nh(n, a, b));
        assert_closed(&d_nd(n, a, b));
    }
}

#[test]
#[should_panic(expected = "perpendicular")]
fn c_nv_rejects_parallel_axes() {
    let _ = c_nv(3, Vector3::z(), Vector3::z());
}

#[test]
#[should_panic(expected = "perpendicular")]
fn d_n_rejects_parallel_axes() {
    let _ = d_n(3, Vector3::z(), Vector3::z());
}

#[test]
#[should_panic(expected = "perpendicular")]
fn d_nd_rejects_skew_axes() {
    let _ = d_nd(2, Vector3::z(), vector![1.0, 0.0, 0.1]);
}

#[test]
fn cuboid_groups() {
    let rot = cuboid_rotations();
    assert_eq!(rot.len(), 4);
    assert!(rot.iter().all(SymOp::is_proper));
    assert_closed(&rot);

    let full = cuboid();
    assert_eq!(full.len(), 8);
    assert_identity_first(&full);
    assert_closed(&full);
    // D_2h contains inversion and the three axis mirrors.
    for op in [
        crate::op::inversion(),
        reflection(Vector3::x()),
        reflection(Vector3::y()),
        reflection(Vector3::z()),
    ] {
        assert!(full.find(&op).is_some());
    }
    // Every element maps the box [-1,1]×[-2,2]×[-3,3] onto itself.
    let corner = vector![1.0, 2.0, 3.0];
    for op in &full {
        let p = op.apply(corner);
        assert!((p.abs() - corner).amax() < 1e-12);
    }
}

#[test]
fn compose_deduplicates_and_keeps_identity_first() {
    let c4 = c_n(4, Vector3::z());
    let c2 = c_n(2, Vector3::z());
    let g = &c2 * &c4;
    assert_eq!(g.len(), 4);
    assert_identity_first(&g);
    let by_value = c2 * c4;
    assert_eq!(by_value.len(), 4);
}

#[test]
fn screw_group_twofold() {
    let g = screw_group(180.0, vector![0.0, 0.0, 1.0], Vector3::zeros()).unwrap();
    assert_eq!(g.len(), 2);
    assert_identity_first(&g);
    assert!(g[1].approx_eq(&screw(180.0, vector![0.0, 0.0, 1.0], Vector3::zeros()), 1e-12));
    assert!((g[1].t - vector![0.0, 0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn screw_group_fourfold_closes_on_lattice() {
    let trans = vector![0.0, 0.0, 0.25];
    let origin = vector![0.5, 0.5, 0.0];
    let g = screw_group(90.0, trans, origin).unwrap();
    assert_eq!(g.len(), 4);
    for (i, op) in g.iter().enumerate().skip(1) {
        let k = i as f64;
        assert!(op.approx_eq(&screw(90.0 * k, trans * k, origin), 1e-12));
    }
    assert!(matches!(g.product_table(), Err(SymError::MissingUnitCell)));
    let g = g.with_unit_cell(Matrix3::identity());
    assert_closed(&g);
    let inv = g.inverse_indices().unwrap();
    assert_eq!(inv, vec![0, 3, 2, 1]);
}

#[test]
fn screw_group_orders_from_angle() {
    let t = vector![0.0, 1.0, 0.0];
    let o = Vector3::zeros();
    assert_eq!(screw_group(120.0, t, o).unwrap().len(), 3);
    assert_eq!(screw_group(60.0, t, o).unwrap().len(), 6);
    // 144° = 2·360°/5 closes after five steps.
    assert_eq!(screw_group(144.0, t, o).unwrap().len(), 5);
    // Full turns give the trivial group.
    assert_eq!(screw_group(360.0, t, o).unwrap().len(), 1);
    assert_eq!(screw_group(0.0, t, o).unwrap().len(), 1);
}

#[test]
fn screw_group_bounded_iteration() {
    let cfg = SymCfg {
        max_screw_order: 16,
        ..SymCfg::default()
    };
    let t = vector![0.0, 0.0, 1.0];
    // 100° closes only at i = 18.
    let err = screw_group_with(100.0, t, Vector3::zeros(), &cfg).unwrap_err();
    assert_eq!(
        err,
        SymError::ScrewNotClosed {
            angle: 100.0,
            max_order: 16
        }
    );
    assert_eq!(screw_group(100.0, t, Vector3::zeros()).unwrap().len(), 18);
    // Irrational multiple of a full turn never closes.
    let irrational = 360.0 / std::f64::consts::SQRT_2;
    assert!(matches!(
        screw_group(irrational, t, Vector3::zeros()),
        Err(SymError::ScrewNotClosed { .. })
    ));
}

#[test]
fn screw_group_rejects_non_finite_input() {
    let t = vector![0.0, 0.0, 1.0];
    assert!(matches!(
        screw_group(f64::NAN, t, Vector3::zeros()),
        Err(SymError::NonFinite(_))
    ));
    assert!(matches!(
        screw_group(90.0, t, vector![f64::INFINITY, 0.0, 0.0]),
        Err(SymError::NonFinite(_))
    ));
}

#[test]
fn product_table_reports_missing_elements() {
    // {I, R(90°)} is not closed.
    let g = PointGroup::new(vec![SymOp::identity(), rotation(90.0, Vector3::z())]);
    assert!(matches!(g.product_table(), Err(SymError::NotClosed { .. })));
    assert!(matches!(
        g.inverse_indices(),
        Err(SymError::MissingInverse { index: 1 })
    ));
}
