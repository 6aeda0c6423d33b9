use crate::derive::derive;
use crate::path::render_path;
use crate::*;
use std::collections::HashSet;

fn zigzag(n: usize) -> Vec<ControlPoint> {
    (0..n)
        .map(|i| {
            let x = 37.5 * (i as f64 + 1.0);
            let y = if i % 2 == 0 { 41.25 } else { -13.0 / 7.0 };
            ControlPoint::new(format!("p{i}").as_str(), x, y)
        })
        .collect()
}

fn sequences() -> Vec<Vec<PathPoint>> {
    let source = Coordinate::new(-12.5, 3.0 / 7.0);
    let target = Coordinate::new(410.125, -88.0);
    (0..5)
        .map(|n| path_points(source, &zigzag(n), target))
        .collect()
}

fn orientations() -> Vec<Orientation> {
    let sides = [Side::Left, Side::Right, Side::Top, Side::Bottom];
    let mut out = Vec::new();
    for from in sides {
        for to in sides {
            out.push(Orientation::new(from, to));
        }
    }
    out
}

#[test]
fn derive_and_render_are_deterministic() {
    for seq in sequences() {
        for alg in Algorithm::ALL {
            for o in orientations() {
                assert_eq!(derive(&seq, alg, o, 0.25), derive(&seq, alg, o, 0.25));
                let a = render_path(&seq, alg, o, 0.25);
                let b = render_path(&seq, alg, o, 0.25);
                assert_eq!(a, b);
                assert_eq!(a.to_svg_d(), b.to_svg_d());
            }
        }
    }
}

#[test]
fn paths_start_and_end_exactly_on_the_anchors() {
    for seq in sequences() {
        let first = seq[0].position();
        let last = seq[seq.len() - 1].position();
        for alg in Algorithm::ALL {
            for o in orientations() {
                let path = render_path(&seq, alg, o, 0.25);
                assert!(matches!(
                    path.commands()[0],
                    PathCommand::MoveTo { to } if to == first
                ));
                assert_eq!(path.last(), Some(last), "{alg} {o:?}");
                assert_eq!(path.len(), seq.len(), "one segment per consecutive pair");
            }
        }
    }
}

#[test]
fn linear_derive_is_the_identity_on_positions() {
    for seq in sequences() {
        let out = derive(&seq, Algorithm::Linear, Orientation::default(), 0.25);
        assert_eq!(out.len(), seq.len());
        for (d, p) in out.iter().zip(&seq) {
            assert!(d.active);
            assert_eq!(d.position, p.position());
            if let PathPoint::Control(cp) = p {
                assert_eq!(d.id.as_ref(), Some(&cp.id));
            }
        }
    }
}

#[test]
fn derived_handles_match_rendered_cubic_controls() {
    for seq in sequences() {
        for alg in [Algorithm::Bezier, Algorithm::BezierCatmullRom] {
            let o = Orientation::new(Side::Top, Side::Bottom);
            let derived = derive(&seq, alg, o, 0.25);
            let path = render_path(&seq, alg, o, 0.25);
            let handles: Vec<Coordinate> = derived
                .iter()
                .filter(|p| !p.active)
                .map(|p| p.position)
                .collect();
            let controls: Vec<Coordinate> = path
                .commands()
                .iter()
                .filter_map(|c| match *c {
                    PathCommand::CubicTo { c1, c2, .. } => Some([c1, c2]),
                    _ => None,
                })
                .flatten()
                .collect();
            assert_eq!(handles, controls);
        }
    }
}

#[test]
fn count_change_never_reuses_previous_synthetic_ids() {
    let mut ledger = IdLedger::new();
    let o = Orientation::default();
    let seqs = sequences();

    let first = ledger.stabilize(derive(&seqs[1], Algorithm::Bezier, o, 0.25));
    let first_inactive: HashSet<PointId> = first
        .iter()
        .filter(|p| !p.active)
        .map(|p| p.id.clone())
        .collect();
    assert!(!first_inactive.is_empty());

    let second = ledger.stabilize(derive(&seqs[2], Algorithm::Bezier, o, 0.25));
    let mut seen = HashSet::new();
    for p in second.iter().filter(|p| !p.active) {
        assert!(!first_inactive.contains(&p.id));
        assert!(seen.insert(p.id.clone()), "duplicate synthetic id");
    }
}

#[test]
fn stable_ids_are_unique_within_one_render() {
    let mut ledger = IdLedger::new();
    for seq in sequences() {
        for alg in Algorithm::ALL {
            let out = ledger.stabilize(derive(&seq, alg, Orientation::default(), 0.25));
            let ids: HashSet<_> = out.iter().map(|p| &p.id).collect();
            assert_eq!(ids.len(), out.len(), "{alg}");
        }
    }
}
