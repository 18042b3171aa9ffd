//! Whole cropping sessions: lay out the window, load an image, select with
//! the wheel and by dragging, and plan the resulting job.

use zencrop::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn b(x: i32, y: i32, w: i32, h: i32) -> Box2D {
    Box2D::new(Size2D::new(x, y), Size2D::new(w, h))
}

/// 1600x800 window, so the image area is 800x800. 2000x1000 image, so the
/// preview is 800x400 at y=200, scaled by 1/2.5.
fn session(config: SelectionConfig) -> (WindowLayout, Selection) {
    init_logging();
    let layout = WindowLayout::split(Size2D::new(1600, 800));
    let mut selection = Selection::new(config);
    assert!(selection.resize_area(layout.image_area));
    selection.load_image(Size2D::new(2000, 1000)).unwrap();
    (layout, selection)
}

#[test]
fn scroll_then_drag_then_scroll() {
    let (layout, mut s) = session(SelectionConfig::default());
    assert_eq!(s.mode(), SelectionMode::Scroll);
    assert_eq!(s.scroll_crop_width(), 1101);

    // Wheel down grows by the coarse factor, then to the next whole height.
    s.pointer_down(Position::new(400, 400));
    assert_eq!(
        s.scroll(ScrollDirection::Down, Modifiers::NONE),
        ScrollStep::Resized(1212)
    );
    let crop = s.image_crop_box().unwrap();
    assert_eq!(crop.rect(), b(394, 96, 1212, 808));

    let job = Job::crop(crop, &CropperConfig::default());
    let out = job.output_size(s.image_size().unwrap());
    assert_eq!(out, Size2D::new(1212, 808));
    assert_eq!(
        letterbox(out, layout.preview_area),
        Some(b(0, 133, 800, 534))
    );

    // Shift + wheel up walks down one pixel at a time.
    assert_eq!(
        s.scroll(ScrollDirection::Up, Modifiers::SHIFT),
        ScrollStep::Resized(1209)
    );

    // Click-drag with the default fixed 3:2 aspect.
    s.set_mode(SelectionMode::ClickDrag);
    s.pointer_down(Position::new(100, 300));
    s.pointer_drag(Position::new(300, 400), Modifiers::NONE);
    let crop = s.image_crop_box().unwrap();
    assert_eq!(crop.rect(), b(250, 250, 500, 334));
    assert_eq!(
        Job::crop(crop, &CropperConfig::default()).convert_args("a.jpg", "out/a.jpg"),
        ["a.jpg", "-crop", "500x334+250+250", "-resize", "1920x1080>", "out/a.jpg"]
    );

    // Back to scroll: the width survived, centered on the last pointer position.
    s.set_mode(SelectionMode::Scroll);
    assert_eq!(s.scroll_crop_width(), 1209);
    assert_eq!(s.image_crop_box().unwrap().rect(), b(146, 97, 1209, 806));
}

#[test]
fn perfect_pixel_grow_from_100() {
    let (_, mut s) = session(SelectionConfig::default());
    s.set_scroll_crop_width(100);
    let mut previous = s.scroll_crop_width();
    for _ in 0..40 {
        let step = s.scroll(ScrollDirection::Down, Modifiers::NONE);
        let width = step.width();
        assert!(width >= previous, "{width} < {previous}");
        if let ScrollStep::Resized(w) = step {
            assert_eq!(w * 2 % 3, 0, "width {w} has fractional height");
            assert!(s.has_whole_scroll_size());
        }
        previous = width;
    }
    assert_eq!(s.scroll_crop_width(), 2000);
}

#[test]
fn crop_appears_once_area_is_laid_out() {
    init_logging();
    let mut s = Selection::new(SelectionConfig::default());
    s.load_image(Size2D::new(2000, 1000)).unwrap();
    assert_eq!(s.image_crop_box(), None);
    assert_eq!(s.selection_box(), None);

    assert!(s.resize_area(Size2D::new(800, 800)));
    assert!(!s.resize_area(Size2D::new(800, 800)));
    // Pointer was centered in the then-empty area, so at the display origin.
    assert_eq!(s.image_crop_box().unwrap().rect(), b(0, 0, 1101, 734));
}

#[test]
fn rejected_image_keeps_previous_state() {
    let (_, mut s) = session(SelectionConfig::default());
    assert_eq!(
        s.load_image(Size2D::new(0, 100)),
        Err(FitError::NonPositiveSource)
    );
    assert_eq!(s.image_size(), Some(Size2D::new(2000, 1000)));
    assert_eq!(s.scroll_crop_width(), 1101);
}

#[test]
fn free_drag_past_edge_is_clipped_by_job() {
    let config = SelectionConfig::default()
        .mode(SelectionMode::ClickDrag)
        .fixed_aspect(false);
    let (_, mut s) = session(config);
    s.pointer_down(Position::new(700, 500));
    s.pointer_drag(Position::new(900, 700), Modifiers::NONE);

    let crop = s.image_crop_box().unwrap();
    assert_eq!(crop.rect(), b(1750, 750, 500, 500));
    let no_resize = CropperConfig {
        resize: false,
        ..CropperConfig::default()
    };
    let job = Job::crop(crop, &no_resize);
    assert_eq!(job.output_size(Size2D::new(2000, 1000)), Size2D::new(250, 250));
}

#[test]
fn aspect_from_ratio_text() {
    let aspect: AspectRatio = "4:3".parse().unwrap();
    let (_, mut s) = session(SelectionConfig::default().aspect(aspect));
    s.set_scroll_crop_width(400);
    assert_eq!(s.scroll_crop_size(), (400, 300.0));
    assert_eq!(
        "4-3".parse::<AspectRatio>(),
        Err(AspectError::Malformed)
    );
}

#[test]
fn aspect_from_text_input() {
    let aspect = AspectRatio::from_input(" 16 ", "9");
    let (_, mut s) = session(SelectionConfig::default().aspect(aspect));
    s.set_scroll_crop_width(160);
    assert_eq!(s.scroll_crop_size(), (160, 90.0));
    assert!(s.has_whole_scroll_size());
}

#[cfg(feature = "serde")]
mod serde_config {
    use zencrop::*;

    #[test]
    fn round_trip() {
        let config = Config {
            selection: SelectionConfig::default()
                .mode(SelectionMode::ClickDrag)
                .show_guides(true),
            cropper: CropperConfig::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""mode":"click-drag""#), "{json}");
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn overwrite_preference_survives() {
        let config = Config {
            cropper: CropperConfig::default().confirm_overwrite(false),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""confirm_overwrite":false"#), "{json}");
        let back: Config = serde_json::from_str(&json).unwrap();
        assert!(!back.cropper.confirm_overwrite);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"cropper":{"resize":false}}"#).unwrap();
        assert_eq!(config.selection, SelectionConfig::default());
        assert!(!config.cropper.resize);
        assert_eq!(config.cropper.resize_width, 1920);
        assert!(config.cropper.confirm_overwrite);
    }

    #[test]
    fn invalid_aspect_is_rejected() {
        let json = r#"{"selection":{"aspect":{"width":0,"height":2}}}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
