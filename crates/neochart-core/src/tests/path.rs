use crate::geom::Vector2;
use crate::path::{Arc, PathData};
use svgtypes::{PathParser, PathSegment};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn repeated_commands_share_one_letter() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.line_to(v(1.0, 2.0)).line_to(v(3.0, 4.0)).close();
    assert_eq!(path.to_string(), "M 0 0 L 1 2 3 4 Z");
}

#[test]
fn moveto_is_always_written_out() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.move_to(v(5.0, 5.0)).move_by(v(1.0, 1.0)).move_by(v(1.0, 1.0));
    assert_eq!(path.to_string(), "M 0 0 M 5 5 m 1 1 m 1 1");
}

#[test]
fn closepath_is_always_written_out() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.line_by(v(1.0, 0.0)).close().move_to(v(2.0, 0.0)).line_by(v(1.0, 0.0)).close();
    assert_eq!(path.to_string(), "M 0 0 l 1 0 Z M 2 0 l 1 0 Z");
}

#[test]
fn every_command_pair_is_emitted() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.horizontal_to(10.0)
        .vertical_by(2.5)
        .horizontal_by(-1.0)
        .vertical_to(0.0)
        .cubic_to(v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0))
        .smooth_cubic_by(v(1.0, 0.0), v(2.0, 0.0))
        .quad_to(v(4.0, 4.0), v(5.0, 5.0))
        .smooth_quad_by(v(1.0, 1.0))
        .cubic_by(v(0.5, 0.0), v(1.0, 0.5), v(1.0, 1.0))
        .smooth_cubic_to(v(9.0, 9.0), v(10.0, 10.0))
        .quad_by(v(1.0, 0.0), v(1.0, 1.0))
        .smooth_quad_to(v(12.0, 12.0))
        .arc_by(Arc::circular(2.0, true, false), v(4.0, 0.0))
        .close();
    assert_eq!(
        path.to_string(),
        "M 0 0 H 10 v 2.5 h -1 V 0 C 1 1 2 2 3 3 s 1 0 2 0 Q 4 4 5 5 t 1 1 \
         c 0.500 0 1 0.500 1 1 S 9 9 10 10 q 1 0 1 1 T 12 12 a 2 2 0 1 0 4 0 Z"
    );
    let segments: Vec<PathSegment> = PathParser::from(path.to_string().as_str())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(segments.len(), 15);
}

#[test]
fn arc_parameters_use_compact_format_and_flags() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.line_to(v(0.0, -100.0))
        .arc_to(Arc::circular(100.0, false, true), v(70.7106781, -70.7106781))
        .close();
    assert_eq!(
        path.to_string(),
        "M 0 0 L 0 -100 A 100 100 0 0 1 70.711 -70.711 Z"
    );
    let segments: Vec<PathSegment> = PathParser::from(path.to_string().as_str())
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(matches!(
        segments[2],
        PathSegment::EllipticalArc {
            abs: true,
            large_arc: false,
            sweep: true,
            ..
        }
    ));
}

#[test]
fn consecutive_arcs_concatenate() {
    let mut path = PathData::new(v(0.0, 0.0));
    path.arc_to(Arc::circular(1.0, false, true), v(2.0, 0.0))
        .arc_to(Arc::circular(1.0, false, true), v(0.0, 0.0));
    assert_eq!(path.to_string(), "M 0 0 A 1 1 0 0 1 2 0 1 1 0 0 1 0 0");
}
