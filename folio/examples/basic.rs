use folio::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(7)
            .with_visible_count(3)
            .with_card_width(300),
    );
    println!("max_index={} pages={}", c.max_index(), c.page_count());

    for _ in 0..5 {
        let moved = c.advance();
        let f = c.frame();
        println!(
            "advance moved={moved} index={} translate={}px prev_disabled={} next_disabled={} indicator={:?}",
            c.current_index(),
            f.translate_x,
            f.prev_disabled,
            f.next_disabled,
            f.active_indicator
        );
    }

    c.go_to_page(0);
    println!("after indicator 0: window={:?}", c.window());
}
