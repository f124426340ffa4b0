use datazoom_rs::core::{Point, SliderLayout, TrackBounds, ZoomWindow};
use datazoom_rs::interaction::{HitZone, classify_pointer};

const MID_Y: f64 = 40.0;

fn default_layout() -> SliderLayout {
    // bottom 10, resolved height 60: track rows span [10, 70],
    // selection spans [60, 140] on a 200px track
    let mut window = ZoomWindow::slider_default();
    window.resolve_height(100.0);
    SliderLayout::compute(&window, TrackBounds::new(0.0, 200.0))
}

#[test]
fn pointer_outside_track_is_none() {
    let layout = default_layout();

    assert_eq!(classify_pointer(&layout, Point::new(100.0, 5.0)), HitZone::None);
    assert_eq!(classify_pointer(&layout, Point::new(100.0, 80.0)), HitZone::None);
    assert_eq!(classify_pointer(&layout, Point::new(-20.0, MID_Y)), HitZone::None);
}

#[test]
fn pointer_on_track_background_classifies_track() {
    let layout = default_layout();

    assert_eq!(classify_pointer(&layout, Point::new(20.0, MID_Y)), HitZone::Track);
    assert_eq!(classify_pointer(&layout, Point::new(170.0, MID_Y)), HitZone::Track);
}

#[test]
fn pointer_inside_selection_classifies_selection() {
    let layout = default_layout();

    assert_eq!(classify_pointer(&layout, Point::new(100.0, MID_Y)), HitZone::Selection);
    assert_eq!(classify_pointer(&layout, Point::new(75.0, MID_Y)), HitZone::Selection);
}

#[test]
fn handle_bands_beat_selection() {
    let layout = default_layout();

    // both sides of each selection edge resolve to the handle
    assert_eq!(classify_pointer(&layout, Point::new(59.0, MID_Y)), HitZone::StartHandle);
    assert_eq!(classify_pointer(&layout, Point::new(61.0, MID_Y)), HitZone::StartHandle);
    assert_eq!(classify_pointer(&layout, Point::new(139.0, MID_Y)), HitZone::EndHandle);
    assert_eq!(classify_pointer(&layout, Point::new(141.0, MID_Y)), HitZone::EndHandle);
}

#[test]
fn handle_band_reaches_outside_selection_onto_track() {
    let layout = default_layout();

    assert_eq!(classify_pointer(&layout, Point::new(52.0, MID_Y)), HitZone::StartHandle);
    assert_eq!(classify_pointer(&layout, Point::new(148.0, MID_Y)), HitZone::EndHandle);
}

#[test]
fn overlapping_handle_bands_pick_nearest_center() {
    // 50..52 percent on a 200px track: band centers sit at x=100 and x=104
    let mut window = ZoomWindow::slider_default();
    window.resolve_height(100.0);
    window.set_start(50.0);
    window.set_end(52.0);
    let layout = SliderLayout::compute(&window, TrackBounds::new(0.0, 200.0));

    assert_eq!(classify_pointer(&layout, Point::new(101.0, MID_Y)), HitZone::StartHandle);
    assert_eq!(classify_pointer(&layout, Point::new(103.0, MID_Y)), HitZone::EndHandle);
    // exact tie resolves to the start handle
    assert_eq!(classify_pointer(&layout, Point::new(102.0, MID_Y)), HitZone::StartHandle);
}

#[test]
fn unresolved_height_hits_nothing() {
    let window = ZoomWindow::slider_default();
    let layout = SliderLayout::compute(&window, TrackBounds::new(0.0, 200.0));

    assert_eq!(classify_pointer(&layout, Point::new(100.0, 10.0)), HitZone::None);
}
