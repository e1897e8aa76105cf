use super::*;

#[test]
fn color_fills_everything() {
    let mut c = Color::new(1, 2, 3);
    let mut buf = [Color::BLACK; 3];
    c.render(&mut buf, 0);
    assert_eq!(buf, [Color::new(1, 2, 3); 3]);
    c.render(&mut [], 0);
}

#[test]
fn frame_copies_the_overlap() {
    let mut f = Frame::from([Color::new(1, 1, 1), Color::new(2, 2, 2)]);
    let mut long = [Color::WHITE; 3];
    f.render(&mut long, 0);
    assert_eq!(long, [Color::new(1, 1, 1), Color::new(2, 2, 2), Color::WHITE]);
    let mut short = [Color::BLACK; 1];
    f.render(&mut short, 0);
    assert_eq!(short, [Color::new(1, 1, 1)]);
}

#[test]
fn rainbow_runs_violet_to_red() {
    let mut r = Rainbow::new();
    let mut buf = Frame::black(100);
    r.render(&mut buf, 0);
    assert!(buf[0].b > 0 && buf[0].g == 0, "{:?}", buf[0]);
    assert_eq!(buf[99], Color::BLACK);
    assert!(buf[90].r > 0 && buf[90].g == 0 && buf[90].b == 0, "{:?}", buf[90]);
    let greenest = buf
        .iter()
        .position(|c| c.g == 255 && c.r == 0)
        .expect("green band");
    let bluest = buf
        .iter()
        .position(|c| c.b == 255 && c.g == 0)
        .expect("blue band");
    assert!(bluest < greenest);
}

#[test]
fn rainbow_recomputes_on_resize_only() {
    let mut r = Rainbow::new();
    let mut a = Frame::black(10);
    r.render(&mut a, 0);
    let mut b = Frame::black(10);
    r.render(&mut b, 99_999);
    assert_eq!(a, b);
    let mut c = Frame::black(20);
    r.render(&mut c, 0);
    assert_eq!(r.cache.len(), 20);
    r.render(&mut [], 0);
    assert!(r.cache.is_empty());
}

#[test]
fn wavelength_bands() {
    assert_eq!(wavelength_to_rgb(379), Color::BLACK);
    assert_eq!(wavelength_to_rgb(380), Color::new(26, 0, 26));
    assert_eq!(wavelength_to_rgb(440), Color::new(0, 0, 255));
    assert_eq!(wavelength_to_rgb(510), Color::new(0, 255, 0));
    assert_eq!(wavelength_to_rgb(645), Color::new(255, 0, 0));
    assert_eq!(wavelength_to_rgb(780), Color::new(26, 0, 0));
    assert_eq!(wavelength_to_rgb(781), Color::BLACK);
}

#[test]
fn repeated_tiles_and_truncates() {
    let mut r = Repeated {
        frame: Frame::from([Color::new(1, 1, 1), Color::new(2, 2, 2)]),
    };
    let mut buf = [Color::BLACK; 5];
    r.render(&mut buf, 0);
    assert_eq!(
        buf,
        [
            Color::new(1, 1, 1),
            Color::new(2, 2, 2),
            Color::new(1, 1, 1),
            Color::new(2, 2, 2),
            Color::new(1, 1, 1),
        ]
    );

    let mut empty = Repeated::default();
    let mut buf = [Color::WHITE; 2];
    empty.render(&mut buf, 0);
    assert_eq!(buf, [Color::WHITE; 2]);
}
