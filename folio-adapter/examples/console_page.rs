use folio::{Cursor, Emphasis, Input, PortfolioOptions};
use folio_adapter::{CarouselSurface, PageController, PageSurface, style};

/// Prints every property update as the CSS a styled document would receive.
///
/// The page has no "previous" control, so those updates are skipped.
struct ConsoleSurface;

impl CarouselSurface for ConsoleSurface {
    fn set_track_offset(&mut self, translate_x: i64) -> bool {
        println!("#carouselTrack transform: {}", style::transform_css(translate_x));
        true
    }

    fn set_track_cursor(&mut self, cursor: Cursor) -> bool {
        println!("#carouselTrack cursor: {}", style::cursor_css(cursor));
        true
    }

    fn set_prev_disabled(&mut self, _disabled: bool) -> bool {
        false
    }

    fn set_next_disabled(&mut self, disabled: bool) -> bool {
        println!("#nextBtn disabled={disabled}");
        true
    }

    fn set_indicator_count(&mut self, count: usize) -> bool {
        println!("#indicators: {count} x .{}", style::INDICATOR_CLASS);
        true
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) -> bool {
        println!(".{}[{index}] {}={active}", style::INDICATOR_CLASS, style::ACTIVE_CLASS);
        true
    }

    fn set_card_emphasis(&mut self, index: usize, emphasis: Emphasis) -> bool {
        println!(
            ".techstack-card[{index}] opacity: {}; transform: {}",
            style::opacity_css(emphasis),
            style::scale_css(emphasis)
        );
        true
    }
}

impl PageSurface for ConsoleSurface {
    fn set_tab_active(&mut self, name: &str, active: bool) -> bool {
        println!(".tab[data-tab={name}] {}={active}", style::ACTIVE_CLASS);
        true
    }

    fn set_panel_active(&mut self, name: &str, active: bool) -> bool {
        println!("#{name} {}={active}", style::ACTIVE_CLASS);
        true
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        println!("scroll #{id} into view");
        true
    }
}

fn main() {
    let mut surface = ConsoleSurface;
    let mut page = PageController::new(PortfolioOptions::new(7));

    println!("-- mount");
    let applied = page.mount("#portfolio/techstack", &mut surface);
    println!("applied={} skipped={}", applied.applied, applied.skipped);

    println!("-- next");
    page.dispatch(Input::NextClicked, &mut surface);

    println!("-- swipe left");
    for input in [
        Input::PointerDown { x: 500 },
        Input::PointerMove { x: 450 },
        Input::PointerUp { x: 430 },
    ] {
        page.dispatch(input, &mut surface);
    }

    println!("-- third indicator");
    page.dispatch(Input::IndicatorClicked(2), &mut surface);

    println!("-- tab click");
    if let Err(err) = page.click_tab("certificates", &mut surface) {
        println!("tab click failed: {err}");
    }
}
