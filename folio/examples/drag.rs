use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use folio::{Carousel, CarouselOptions, Input};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(CarouselOptions::new(7).with_on_change(Some({
        let renders = Arc::clone(&renders);
        move |c: &Carousel| {
            renders.fetch_add(1, Ordering::Relaxed);
            println!("render: index={} cursor={:?}", c.current_index(), c.cursor());
        }
    })));

    // A long swipe to the left advances; a short one is ignored.
    let gestures = [
        [Input::PointerDown { x: 500 }, Input::PointerMove { x: 460 }, Input::PointerUp { x: 430 }],
        [Input::PointerDown { x: 500 }, Input::PointerMove { x: 480 }, Input::PointerUp { x: 470 }],
        [Input::PointerDown { x: 100 }, Input::PointerMove { x: 200 }, Input::PointerLeave],
    ];
    for gesture in gestures {
        for input in gesture {
            let r = c.handle(input);
            println!("{input:?} -> {r:?}");
        }
    }

    println!(
        "final index={} renders={}",
        c.current_index(),
        renders.load(Ordering::Relaxed)
    );
}
