use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        let span = (end_exclusive as i64 - start as i64) as u64;
        (start as i64 + (self.next_u64() % span) as i64) as i32
    }
}

fn tech_stack() -> Carousel {
    Carousel::new(
        CarouselOptions::new(7)
            .with_visible_count(3)
            .with_card_width(300),
    )
}

fn counting(options: CarouselOptions) -> (Carousel, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Carousel::new(options.with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Carousel| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));
    (c, calls)
}

fn assert_frame_consistent(c: &Carousel) {
    let f = c.frame();
    assert!(c.current_index() <= c.max_index());
    assert_eq!(f.translate_x, -(c.current_index() as i64) * c.card_width() as i64);
    assert_eq!(f.prev_disabled, c.current_index() == 0);
    assert_eq!(f.next_disabled, c.current_index() == c.max_index());
    assert_eq!(f.indicator_count, c.card_count().div_ceil(c.visible_count()));
    if c.card_count() == 0 {
        assert_eq!(f.active_indicator, None);
    } else {
        assert_eq!(
            f.active_indicator,
            Some(c.current_index() / c.visible_count())
        );
        let active = (0..f.indicator_count)
            .filter(|&i| f.is_indicator_active(i))
            .count();
        assert_eq!(active, 1);
    }
    assert_eq!(f.cards.len(), c.card_count());
    for (i, e) in f.cards.iter().enumerate() {
        let visible = i >= c.current_index() && i < c.current_index() + c.visible_count();
        assert_eq!(e.is_emphasized(), visible, "card {i}");
    }
}

#[test]
fn initial_frame_for_seven_cards() {
    let c = tech_stack();
    assert_eq!(c.max_index(), 4);
    assert_eq!(c.current_index(), 0);

    let f = c.frame();
    assert_eq!(f.translate_x, 0);
    assert!(f.prev_disabled);
    assert!(!f.next_disabled);
    assert_eq!(f.indicator_count, 3);
    assert_eq!(f.active_indicator, Some(0));
    assert_eq!(f.cursor, Cursor::Grab);
    assert_eq!(
        f.window,
        Window {
            start_index: 0,
            end_index: 3
        }
    );
    assert_eq!(
        f.cards,
        vec![
            Emphasis::Emphasized,
            Emphasis::Emphasized,
            Emphasis::Emphasized,
            Emphasis::DeEmphasized,
            Emphasis::DeEmphasized,
            Emphasis::DeEmphasized,
            Emphasis::DeEmphasized,
        ]
    );
}

#[test]
fn advance_saturates_at_last_window() {
    let mut c = tech_stack();
    for _ in 0..3 {
        assert!(c.advance());
    }
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.frame().translate_x, -900);
    assert!(!c.frame().next_disabled);

    assert!(c.advance());
    let f = c.frame();
    assert_eq!(c.current_index(), 4);
    assert_eq!(f.translate_x, -1200);
    assert!(f.next_disabled);
    assert!(!f.prev_disabled);
    assert_eq!(f.active_indicator, Some(1));

    assert!(!c.advance());
    assert_eq!(c.current_index(), 4);
    assert_eq!(c.frame(), f);
}

#[test]
fn retreat_saturates_at_zero() {
    let mut c = tech_stack();
    assert!(!c.retreat());
    assert_eq!(c.current_index(), 0);

    c.jump_to(2);
    assert!(c.retreat());
    assert!(c.retreat());
    assert!(!c.retreat());
    assert_eq!(c.current_index(), 0);
    assert!(c.frame().prev_disabled);
}

#[test]
fn jump_to_clamps_every_target() {
    let mut c = tech_stack();
    for target in -20isize..=20 {
        let expected = target.clamp(0, c.max_index() as isize) as usize;
        assert_eq!(c.jump_to(target), expected, "target={target}");
        assert_eq!(c.current_index(), expected);
    }
    assert_eq!(c.jump_to(isize::MIN), 0);
    assert_eq!(c.jump_to(isize::MAX), 4);
    assert_eq!(c.jump_to_index(usize::MAX), 4);
}

#[test]
fn indicators_map_to_page_starts() {
    let mut c = tech_stack();
    assert_eq!(c.page_count(), 3);
    let starts: Vec<usize> = (0..c.page_count()).map(|p| c.page_start(p)).collect();
    assert_eq!(starts, vec![0, 3, 6]);

    assert_eq!(c.go_to_page(1), 3);
    assert_eq!(c.frame().active_indicator, Some(1));

    // The third page starts past the last window and lands on it.
    assert_eq!(c.go_to_page(2), 4);
    assert_eq!(c.current_index(), 4);
    assert_eq!(c.frame().active_indicator, Some(1));

    assert_eq!(c.go_to_page(0), 0);
    assert_eq!(c.frame().active_indicator, Some(0));

    assert_eq!(c.go_to_page(usize::MAX), 4);
}

#[test]
fn drag_past_threshold_navigates() {
    let mut c = tech_stack();

    c.pointer_down(500);
    assert!(c.is_dragging());
    assert_eq!(c.frame().cursor, Cursor::Grabbing);
    assert!(c.pointer_move(460));
    assert_eq!(c.current_index(), 0, "window does not follow the pointer");
    assert!(c.pointer_up(430));
    assert_eq!(c.current_index(), 1);
    assert!(!c.is_dragging());
    assert_eq!(c.frame().cursor, Cursor::Grab);

    c.pointer_down(500);
    assert!(!c.pointer_up(470));
    assert_eq!(c.current_index(), 1);

    c.pointer_down(430);
    assert!(c.pointer_up(500));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn drag_threshold_is_strict() {
    let mut g = DragGesture::new(50);
    g.press(100);
    assert_eq!(g.release(150), None);
    g.press(100);
    assert_eq!(g.release(50), None);
    g.press(100);
    assert_eq!(g.release(151), Some(Swipe::Backward));
    g.press(100);
    assert_eq!(g.release(49), Some(Swipe::Forward));
}

#[test]
fn drag_release_without_press_is_ignored() {
    let mut g = DragGesture::default();
    assert_eq!(g.threshold(), DEFAULT_DRAG_THRESHOLD);
    assert!(!g.pointer_move(10));
    assert_eq!(g.release(1000), None);
    assert_eq!(g.state(), DragState::Idle);
}

#[test]
fn drag_second_press_restarts() {
    let mut g = DragGesture::new(50);
    g.press(0);
    g.press(400);
    assert_eq!(g.state(), DragState::Dragging { start_x: 400 });
    assert_eq!(g.release(380), None);
}

#[test]
fn leaving_track_cancels_drag() {
    let mut c = tech_stack();
    c.pointer_down(500);
    c.pointer_leave();
    assert!(!c.is_dragging());
    assert!(!c.pointer_move(300));
    assert!(!c.pointer_up(100));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn drag_at_boundary_does_not_navigate() {
    let mut c = tech_stack();
    c.pointer_down(100);
    assert!(!c.pointer_up(400));
    assert_eq!(c.current_index(), 0);

    c.jump_to(4);
    c.pointer_down(400);
    assert!(!c.pointer_up(100));
    assert_eq!(c.current_index(), 4);
}

#[test]
fn handle_routes_inputs() {
    let mut c = tech_stack();

    let r = c.handle(Input::PrevClicked);
    assert_eq!(r, Response::default());

    let r = c.handle(Input::NextClicked);
    assert!(r.navigated);
    assert_eq!(c.current_index(), 1);

    let r = c.handle(Input::IndicatorClicked(2));
    assert!(r.navigated);
    assert_eq!(c.current_index(), 4);

    let r = c.handle(Input::IndicatorClicked(2));
    assert!(!r.navigated);

    let r = c.handle(Input::PointerMove { x: 10 });
    assert!(!r.prevent_default);

    c.handle(Input::PointerDown { x: 300 });
    let r = c.handle(Input::PointerMove { x: 320 });
    assert!(r.prevent_default);
    let r = c.handle(Input::PointerUp { x: 380 });
    assert!(r.navigated);
    assert_eq!(c.current_index(), 3);

    c.handle(Input::PointerDown { x: 300 });
    c.handle(Input::PointerLeave);
    let r = c.handle(Input::PointerUp { x: 0 });
    assert!(!r.navigated);
    assert_eq!(c.current_index(), 3);
}

#[test]
fn on_change_fires_after_each_state_change() {
    let (mut c, calls) = counting(CarouselOptions::new(7));
    let count = || calls.load(Ordering::Relaxed);
    assert_eq!(count(), 0);

    c.pointer_down(500);
    assert_eq!(count(), 1);
    c.pointer_move(480);
    assert_eq!(count(), 1);
    // Cursor reset and navigation coalesce into one render.
    c.pointer_up(430);
    assert_eq!(count(), 2);
    assert_eq!(c.current_index(), 1);

    // Jumping re-renders even when the index is unchanged.
    c.jump_to(1);
    assert_eq!(count(), 3);

    for _ in 0..10 {
        c.advance();
    }
    assert_eq!(c.current_index(), 4);
    assert_eq!(count(), 6);

    c.pointer_leave();
    assert_eq!(count(), 6);
    c.pointer_down(0);
    c.pointer_leave();
    assert_eq!(count(), 8);
}

#[test]
fn batch_update_coalesces_notifications() {
    let (mut c, calls) = counting(CarouselOptions::new(10));
    c.batch_update(|c| {
        c.advance();
        c.advance();
        c.jump_to(5);
        c.retreat();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(c.current_index(), 4);

    c.batch_update(|c| {
        c.retreat();
        c.batch_update(|c| {
            c.retreat();
        });
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(c.current_index(), 2);

    c.batch_update(|_| {});
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn on_change_sees_updated_state() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let mut c = Carousel::new(CarouselOptions::new(7));
    c.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &Carousel| {
            seen.store(c.current_index(), Ordering::Relaxed);
        }
    }));
    c.go_to_page(1);
    assert_eq!(seen.load(Ordering::Relaxed), 3);
}

#[test]
fn zero_cards_is_a_permanent_noop() {
    let (mut c, calls) = counting(CarouselOptions::new(0));
    assert_eq!(c.max_index(), 0);
    assert_eq!(c.page_count(), 0);
    assert!(!c.advance());
    assert!(!c.retreat());
    assert_eq!(c.jump_to(3), 0);
    assert_eq!(c.go_to_page(0), 0);
    c.pointer_down(500);
    assert!(!c.pointer_up(0));
    assert_eq!(c.current_index(), 0);
    assert!(calls.load(Ordering::Relaxed) > 0);

    let f = c.frame();
    assert!(f.cards.is_empty());
    assert_eq!(f.indicator_count, 0);
    assert_eq!(f.active_indicator, None);
    assert!(f.prev_disabled);
    assert!(f.next_disabled);
    assert_eq!(f.translate_x, 0);
    assert!(!c.is_emphasized(0));
}

#[test]
fn fewer_cards_than_window() {
    let c = Carousel::new(CarouselOptions::new(2));
    assert_eq!(c.max_index(), 0);
    assert_eq!(c.page_count(), 1);
    let f = c.frame();
    assert_eq!(f.active_indicator, Some(0));
    assert_eq!(f.cards, vec![Emphasis::Emphasized; 2]);
    assert!(f.prev_disabled && f.next_disabled);
    assert_eq!(f.window.len(), 3);
}

#[test]
fn zero_visible_count_is_normalized() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_visible_count(0));
    assert_eq!(c.visible_count(), 1);
    assert_eq!(c.max_index(), 4);
    assert_eq!(c.page_count(), 5);
    assert_eq!(c.go_to_page(3), 3);
    assert_frame_consistent(&c);
}

#[test]
fn initial_index_is_clamped() {
    let c = Carousel::new(CarouselOptions::new(7).with_initial_index(10));
    assert_eq!(c.current_index(), 4);
    assert_frame_consistent(&c);
}

#[test]
fn emphasis_visual_values() {
    assert_eq!(Emphasis::Emphasized.opacity(), 1.0);
    assert_eq!(Emphasis::Emphasized.scale(), 1.0);
    assert_eq!(Emphasis::DeEmphasized.opacity(), 0.7);
    assert_eq!(Emphasis::DeEmphasized.scale(), 0.9);
    assert_eq!(Emphasis::from_visible(true), Emphasis::Emphasized);
}

#[test]
fn for_each_card_matches_frame() {
    let mut c = tech_stack();
    c.jump_to(2);
    let mut out = Vec::new();
    c.for_each_card(|i, e| out.push((i, e)));
    let frame = c.frame();
    assert_eq!(out.len(), 7);
    for (i, e) in out {
        assert_eq!(frame.card(i), Some(e));
        assert_eq!(c.emphasis(i), e);
    }
    assert_eq!(frame.card(7), None);
}

#[test]
fn random_operation_sequences_keep_invariants() {
    let mut rng = Lcg::new(0x5eed_f011);
    for _ in 0..200 {
        let card_count = rng.gen_range_usize(0, 25);
        let visible_count = rng.gen_range_usize(1, 6);
        let card_width = rng.gen_range_u64(1, 500) as u32;
        let mut c = Carousel::new(
            CarouselOptions::new(card_count)
                .with_visible_count(visible_count)
                .with_card_width(card_width),
        );
        assert_eq!(c.max_index(), card_count.saturating_sub(visible_count));
        assert_frame_consistent(&c);

        for _ in 0..60 {
            let before = c.current_index();
            match rng.gen_range_usize(0, 7) {
                0 => {
                    let moved = c.advance();
                    assert_eq!(moved, before < c.max_index());
                    if !moved {
                        assert_eq!(c.current_index(), before);
                    }
                }
                1 => {
                    let moved = c.retreat();
                    assert_eq!(moved, before > 0);
                }
                2 => {
                    let target = rng.gen_range_u64(0, 60) as isize - 30;
                    let applied = c.jump_to(target);
                    assert_eq!(applied, target.clamp(0, c.max_index() as isize) as usize);
                }
                3 => {
                    let page = rng.gen_range_usize(0, c.page_count().max(1));
                    c.handle(Input::IndicatorClicked(page));
                }
                4 => {
                    let x = rng.gen_range_i32(-200, 1200);
                    c.handle(Input::PointerDown { x });
                }
                5 => {
                    let x = rng.gen_range_i32(-200, 1200);
                    c.handle(Input::PointerUp { x });
                }
                _ => {
                    c.handle(Input::PointerLeave);
                }
            }
            assert_frame_consistent(&c);
        }
    }
}

#[test]
fn tabs_keep_a_single_active_tab() {
    let mut tabs = TabSet::new(DEFAULT_TABS);
    assert_eq!(tabs.active(), Some("projects"));

    assert_eq!(tabs.activate("techstack"), Ok(2));
    assert!(tabs.is_active("techstack"));
    assert_eq!(tabs.iter().filter(|(_, active)| *active).count(), 1);

    assert_eq!(
        tabs.activate("blog"),
        Err(TabError::Unknown(String::from("blog")))
    );
    assert_eq!(tabs.active(), Some("techstack"));

    assert_eq!(tabs.activate_index(1), Ok("certificates"));
    assert_eq!(
        tabs.activate_index(3),
        Err(TabError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(tabs.active_index(), Some(1));

    let listed: Vec<(&str, bool)> = tabs.iter().collect();
    assert_eq!(
        listed,
        vec![("projects", false), ("certificates", true), ("techstack", false)]
    );
}

#[test]
fn empty_tab_set_has_no_active_tab() {
    let mut tabs = TabSet::new(Vec::<String>::new());
    assert!(tabs.is_empty());
    assert_eq!(tabs.active(), None);
    assert!(tabs.activate("projects").is_err());

    let tabs = TabSet::new(["a", "b"]).with_active("b").unwrap();
    assert_eq!(tabs.active(), Some("b"));
    assert!(TabSet::new(["a"]).with_active("z").is_err());
}

#[test]
fn parse_hash_shapes() {
    assert_eq!(parse_hash("#portfolio/projects", "portfolio"), Some("projects"));
    assert_eq!(
        parse_hash("#portfolio/certificates/2024", "portfolio"),
        Some("certificates")
    );
    assert_eq!(parse_hash("#portfolio/", "portfolio"), None);
    assert_eq!(parse_hash("#portfolio?tab=techstack", "portfolio"), Some("techstack"));
    assert_eq!(parse_hash("#anything?tab=projects", "portfolio"), Some("projects"));
    assert_eq!(parse_hash("#portfolio?tab=", "portfolio"), None);
    assert_eq!(parse_hash("#portfolio", "portfolio"), None);
    assert_eq!(parse_hash("#about", "portfolio"), None);
    assert_eq!(parse_hash("", "portfolio"), None);
    assert_eq!(parse_hash("#work/projects", "work"), Some("projects"));
}

#[test]
fn router_validates_tab_names() {
    let router = HashRouter::default();
    assert_eq!(router.section(), "portfolio");
    assert_eq!(
        router.resolve("#portfolio/techstack"),
        Ok(DeepLink {
            tab: String::from("techstack"),
            scroll_target: String::from("portfolio"),
        })
    );
    assert_eq!(
        router.resolve("#portfolio/blog"),
        Err(RouteError::UnknownTab(String::from("blog")))
    );
    assert_eq!(router.resolve("#contact"), Err(RouteError::NoTab));
    assert!(router.is_known("certificates"));
}

#[test]
fn portfolio_deep_links_into_tabs() {
    let mut page = Portfolio::new(PortfolioOptions::new(7));
    assert_eq!(page.tabs().active(), Some("projects"));

    let link = page.handle_hash("#portfolio?tab=techstack").unwrap();
    assert_eq!(link.tab, "techstack");
    assert_eq!(link.scroll_target, "portfolio");
    assert_eq!(page.tabs().active(), Some("techstack"));

    assert_eq!(page.handle_hash("#portfolio/blog"), None);
    assert_eq!(page.handle_hash(""), None);
    assert_eq!(page.tabs().active(), Some("techstack"));

    assert_eq!(page.click_tab("certificates"), Ok(1));
    assert!(page.click_tab("blog").is_err());
    assert_eq!(page.tabs().active(), Some("certificates"));

    let r = page.handle_carousel(Input::NextClicked);
    assert!(r.navigated);
    assert_eq!(page.carousel().current_index(), 1);
    page.carousel_mut().go_to_page(2);
    assert_eq!(page.carousel().current_index(), 4);
}

#[test]
fn portfolio_custom_layout() {
    let mut page = Portfolio::new(
        PortfolioOptions::new(4)
            .with_tabs(["work", "talks"])
            .with_section("home")
            .with_carousel(CarouselOptions::new(9).with_visible_count(4)),
    );
    assert_eq!(page.carousel().card_count(), 9);
    assert_eq!(page.carousel().page_count(), 3);
    assert_eq!(page.router().tabs().len(), 2);

    let link = page.handle_hash("#home/talks").unwrap();
    assert_eq!(link.scroll_target, "home");
    assert_eq!(page.tabs().active(), Some("talks"));
    assert_eq!(page.handle_hash("#portfolio/projects"), None);
}

#[test]
fn portfolio_ignores_routed_tab_missing_from_page() {
    let mut page = Portfolio::from_parts(
        TabSet::new(["projects", "certificates"]),
        HashRouter::default(),
        tech_stack(),
    );
    page.click_tab("certificates").unwrap();
    assert_eq!(page.handle_hash("#portfolio/techstack"), None);
    assert_eq!(page.tabs().active(), Some("certificates"));

    let link = page.handle_hash("#portfolio/projects").unwrap();
    assert_eq!(link.tab, "projects");
    assert_eq!(page.tabs().active(), Some("projects"));
}

#[test]
fn pointer_move_only_reads_state() {
    let idle = DragGesture::new(50);
    assert!(!idle.pointer_move(0));

    let mut dragging = DragGesture::new(50);
    dragging.press(200);
    let snapshot = dragging;
    assert!(snapshot.pointer_move(120));
    assert_eq!(snapshot, dragging);

    let c = tech_stack();
    assert!(!c.pointer_move(10));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn frame_round_trips() {
        let mut c = tech_stack();
        c.go_to_page(1);
        c.pointer_down(10);
        let frame = c.frame();
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
        assert_eq!(back.cursor, Cursor::Grabbing);
    }

    #[test]
    fn inputs_round_trip() {
        for input in [
            Input::PrevClicked,
            Input::NextClicked,
            Input::IndicatorClicked(2),
            Input::PointerDown { x: -40 },
            Input::PointerMove { x: 12 },
            Input::PointerUp { x: 430 },
            Input::PointerLeave,
        ] {
            let json = serde_json::to_string(&input).unwrap();
            assert_eq!(serde_json::from_str::<Input>(&json).unwrap(), input);
        }
    }

    #[test]
    fn drag_gesture_resumes_after_round_trip() {
        let mut g = DragGesture::new(50);
        g.press(500);
        let json = serde_json::to_string(&g).unwrap();
        let mut back: DragGesture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.release(430), Some(Swipe::Forward));
    }

    #[test]
    fn deep_link_round_trips() {
        let link = HashRouter::default().resolve("#portfolio/techstack").unwrap();
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(serde_json::from_str::<DeepLink>(&json).unwrap(), link);
    }

    #[test]
    fn tab_set_round_trips() {
        let tabs = TabSet::new(DEFAULT_TABS).with_active("techstack").unwrap();
        let json = serde_json::to_string(&tabs).unwrap();
        let back: TabSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tabs);
        assert_eq!(back.active(), Some("techstack"));

        let none: TabSet = serde_json::from_str(r#"{"names":[],"active":null}"#).unwrap();
        assert_eq!(none.active(), None);
    }

    #[test]
    fn tab_set_rejects_out_of_range_active() {
        let err = serde_json::from_str::<TabSet>(r#"{"names":["projects"],"active":5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("tab index 5 out of range (1 tabs)"));

        let err = serde_json::from_str::<TabSet>(r#"{"names":[],"active":0}"#).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
