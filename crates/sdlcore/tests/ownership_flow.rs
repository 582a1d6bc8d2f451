//! End-to-end scenarios across the public API: an owning handle's full
//! lifecycle, shared-count drain, and a poll-branch-draw frame loop driven
//! entirely through the event overlay and the draw builder.

use sdlcore::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fake native resource kind backed by a heap allocation.
struct FakeDisplay;

impl ResourceKind for FakeDisplay {
    type Raw = u32;
    const NAME: &'static str = "fake display";
}

static DISPLAY_DELETES: AtomicUsize = AtomicUsize::new(0);

struct DisplayDelete;

impl Deleter<FakeDisplay> for DisplayDelete {
    unsafe fn delete(raw: *mut u32) {
        DISPLAY_DELETES.fetch_add(1, Ordering::SeqCst);
        drop(Box::from_raw(raw));
    }
}

fn fake_display() -> Resource<FakeDisplay, DisplayDelete> {
    unsafe { Resource::from_raw(Box::into_raw(Box::new(0xD15_u32))) }
}

#[test]
fn owning_handle_lifecycle() {
    let deletes_before = DISPLAY_DELETES.load(Ordering::SeqCst);

    let mut display = fake_display();
    assert!(display.is_valid());

    let view = Ref::new(&display);
    assert_eq!(view.as_ptr(), display.as_ptr());

    display.reset();
    assert!(!display.is_valid());
    display.reset(); // idempotent

    assert_eq!(DISPLAY_DELETES.load(Ordering::SeqCst) - deletes_before, 1);
}

#[test]
fn shared_handle_count_drain() {
    struct Probe;
    impl ResourceKind for Probe {
        type Raw = u64;
        const NAME: &'static str = "probe";
    }

    static DELETES: AtomicUsize = AtomicUsize::new(0);
    struct Del;
    impl Deleter<Probe> for Del {
        unsafe fn delete(raw: *mut u64) {
            DELETES.fetch_add(1, Ordering::SeqCst);
            drop(Box::from_raw(raw));
        }
    }

    let resource: Resource<Probe, Del> =
        unsafe { Resource::from_raw(Box::into_raw(Box::new(77_u64))) };

    let a = Shared::from(resource);
    assert_eq!(a.use_count(), 1);

    let mut b = a.clone();
    assert_eq!(a.use_count(), 2);
    assert_eq!(b.use_count(), 2);

    b.reset();
    assert_eq!(a.use_count(), 1);
    assert_eq!(b.use_count(), 0);
    assert_eq!(DELETES.load(Ordering::SeqCst), 0);

    drop(a);
    assert_eq!(DELETES.load(Ordering::SeqCst), 1);
}

/// Collects the copy calls a frame loop issues.
#[derive(Default)]
struct Canvas {
    copies: Vec<(Option<Rect>, Option<Rect>)>,
}

impl DrawTarget for Canvas {
    fn copy(&mut self, src: Option<Rect>, dst: Option<Rect>) -> DrawResult<()> {
        self.copies.push((src, dst));
        Ok(())
    }
}

/// Simulates the native queue by writing records through the raw seam.
fn synthesize(record: &mut EventRecord, fill: impl FnOnce(&mut EventRecord)) {
    *record.as_raw_mut() = sdlcore::sys::Event::zeroed();
    fill(record);
}

#[test]
fn poll_branch_draw_frame_loop() {
    let mut canvas = Canvas::default();
    let mut record = EventRecord::default();
    let mut cursor = Point::new(0, 0);
    let mut running = true;

    let frames: [&dyn Fn(&mut EventRecord); 3] = [
        &|record| {
            record.set_kind(EventKind::MouseMotion);
            record.mouse_motion().set_position(Point::new(200, 150));
        },
        &|record| {
            record.set_kind(EventKind::Window);
            record.window().set_size(Area::new(640, 480));
        },
        &|record| {
            record.set_kind(EventKind::Quit);
        },
    ];

    for fill in frames {
        if !running {
            break;
        }
        synthesize(&mut record, fill);

        match record.kind() {
            EventKind::MouseMotion => {
                cursor = record.mouse_motion().position();
                // Draw a 16x16 cursor sprite centered on the pointer.
                RenderOp::new(&mut canvas)
                    .src(Rect::from_raw(0, 0, 16, 16))
                    .at(cursor)
                    .anchor(Anchor::Center)
                    .run()
                    .unwrap();
            }
            EventKind::Window => {
                // Repaint the whole target after a resize.
                RenderOp::new(&mut canvas).fill().run().unwrap();
            }
            EventKind::Quit => running = false,
            _ => {}
        }
    }

    assert!(!running);
    assert_eq!(cursor, Point::new(200, 150));
    assert_eq!(
        canvas.copies,
        vec![
            (
                Some(Rect::from_raw(0, 0, 16, 16)),
                Some(Rect::from_raw(192, 142, 16, 16)),
            ),
            (None, None),
        ]
    );
}
