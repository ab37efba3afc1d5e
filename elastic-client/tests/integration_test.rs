use elastic_client::{demo_script, Replay, TraceFrame, MAX_REGIONS};
use elastic_shared::{Position, Script};
use serde_json::json;

fn script_from(value: serde_json::Value) -> Script {
    serde_json::from_value(value).unwrap()
}

/// One 100x100 region centered on (200, 200) with instant-follow settings
fn snappy_script(samples: serde_json::Value) -> Script {
    script_from(json!({
        "settings": {
            "initial_position": { "x": 0.0, "y": 0.0 },
            "position_smoothing": 1.0,
            "scale_smoothing": 1.0
        },
        "regions": [
            { "center_x": 200.0, "center_y": 200.0, "width": 100.0, "height": 100.0 }
        ],
        "samples": samples
    }))
}

fn last(trace: &[TraceFrame]) -> &TraceFrame {
    trace.last().unwrap()
}

#[test]
fn test_free_path_tracks_pointer() {
    let script = snappy_script(json!([{ "x": 3.0, "y": 4.0 }]));
    let mut replay = Replay::new(&script, 60.0, 1).unwrap();

    let trace = replay.run(&script.samples, 0).unwrap();
    assert_eq!(trace.len(), 1);

    let frame = &trace[0].pose;
    assert_eq!(frame.frame, 1);
    assert_eq!((frame.translate_x, frame.translate_y), (3.0, 4.0));
    assert!((frame.rotation - 53.13).abs() < 0.01);
    assert!((frame.scale_x - 1.2).abs() < 1e-4);
    assert!((frame.scale_y - 0.8).abs() < 1e-4);
    assert!(!frame.stuck);
}

#[test]
fn test_pointer_over_region_sticks_near_center() {
    let script = snappy_script(json!([{ "x": 240.0, "y": 200.0 }]));
    let mut replay = Replay::new(&script, 60.0, 1).unwrap();

    let trace = replay.run(&script.samples, 60).unwrap();
    let end = &last(&trace).pose;
    assert!(end.stuck);
    assert!((end.translate_x - 206.0).abs() < 1e-3);
    assert!((end.translate_y - 200.0).abs() < 1e-3);

    // dist = 0.4: x grows by 0.4^3 * 3, y shrinks by 0.3^3 * 3
    assert!((end.scale_x - 2.192).abs() < 1e-3);
    assert!((end.scale_y - 1.919).abs() < 1e-3);
}

#[test]
fn test_magnet_follows_then_returns() {
    let script = snappy_script(json!([
        { "x": 240.0, "y": 200.0 },
        { "x": 600.0, "y": 600.0 }
    ]));
    let mut replay = Replay::new(&script, 60.0, 70).unwrap();

    let trace = replay.feed(script.samples[0]).unwrap();
    let pulled = &last(&trace).magnets[0];
    assert!((pulled.x - 8.0).abs() < 1e-3);

    let trace = replay.feed(script.samples[1]).unwrap();
    let end = last(&trace);
    assert!(!end.pose.stuck);
    assert!(end.magnets[0].x.abs() < 1e-3);
    assert_eq!((end.pose.translate_x, end.pose.translate_y), (600.0, 600.0));
}

#[test]
fn test_demo_sweep_sticks_then_frees() {
    let script = demo_script();
    let mut replay = Replay::new(&script, 60.0, 2).unwrap();
    let trace = replay.run(&script.samples, 30).unwrap();

    assert_eq!(trace.len(), script.samples.len() * 2 + 30);
    assert!(trace.iter().any(|f| f.pose.stuck));
    assert!(!last(&trace).pose.stuck);
    assert!(trace.iter().all(|f| f.magnets.len() == 1));
}

#[test]
fn test_trace_frame_json_is_flat() {
    let script = snappy_script(json!([{ "x": 10.0, "y": 0.0 }]));
    let mut replay = Replay::new(&script, 30.0, 1).unwrap();
    let trace = replay.run(&script.samples, 0).unwrap();

    let value = serde_json::to_value(&trace[0]).unwrap();
    assert_eq!(value["frame"], 1);
    assert_eq!(value["stuck"], false);
    assert_eq!(value["magnets"][0]["x"], 0.0);
}

#[test]
fn test_rejects_bad_frame_rate() {
    let script = demo_script();
    assert!(Replay::new(&script, 0.0, 1).is_err());
    assert!(Replay::new(&script, f32::NAN, 1).is_err());
}

#[test]
fn test_rejects_invalid_settings() {
    let script = script_from(json!({
        "settings": { "position_smoothing": 0.0 },
        "samples": []
    }));
    let err = Replay::new(&script, 60.0, 1).err().unwrap();
    assert!(format!("{:#}", err).contains("position_smoothing"));
}

#[test]
fn test_rejects_too_many_regions() {
    let regions: Vec<_> = (0..=MAX_REGIONS)
        .map(|i| json!({ "center_x": i as f32 * 50.0, "center_y": 0.0, "width": 10.0, "height": 10.0 }))
        .collect();
    let script = script_from(json!({ "regions": regions, "samples": [] }));
    assert!(Replay::new(&script, 60.0, 1).is_err());
}

#[test]
fn test_settle_without_samples_stays_at_start() {
    let script = script_from(json!({ "samples": [] }));
    let mut replay = Replay::new(&script, 60.0, 1).unwrap();
    let trace = replay.settle(3);
    assert_eq!(trace.len(), 3);
    assert!(trace
        .iter()
        .all(|f| f.pose.translate_x == -100.0 && f.pose.translate_y == -100.0));
    assert_eq!(replay.feed(Position::new(-100.0, -100.0)).unwrap().len(), 1);
}

#[test]
fn test_pointer_crossing_into_touching_region_resticks() {
    let script = script_from(json!({
        "settings": {
            "initial_position": { "x": 0.0, "y": 0.0 },
            "position_smoothing": 1.0,
            "scale_smoothing": 1.0
        },
        "regions": [
            { "center_x": 100.0, "center_y": 100.0, "width": 100.0, "height": 100.0 },
            { "center_x": 200.0, "center_y": 100.0, "width": 100.0, "height": 100.0 }
        ],
        "samples": [{ "x": 120.0, "y": 100.0 }, { "x": 190.0, "y": 100.0 }]
    }));
    let mut replay = Replay::new(&script, 60.0, 70).unwrap();

    let trace = replay.feed(script.samples[0]).unwrap();
    let first = last(&trace);
    assert!(first.pose.stuck);
    assert!((first.pose.translate_x - 103.0).abs() < 1e-3);
    assert!((first.magnets[0].x - 4.0).abs() < 1e-3);

    let trace = replay.feed(script.samples[1]).unwrap();
    let end = last(&trace);
    assert!(end.pose.stuck);
    // 15% of the -10 offset from the second region's center
    assert!((end.pose.translate_x - 198.5).abs() < 1e-3);
    assert!((end.pose.translate_y - 100.0).abs() < 1e-3);
    assert!(end.magnets[0].x.abs() < 1e-3);
    assert!((end.magnets[1].x + 2.0).abs() < 1e-3);
}
