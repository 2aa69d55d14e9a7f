use folio::{Portfolio, PortfolioOptions};

fn main() {
    let mut page = Portfolio::new(PortfolioOptions::new(7));
    println!("initial tab={:?}", page.tabs().active());

    for hash in [
        "#portfolio/techstack",
        "#portfolio?tab=certificates",
        "#portfolio/blog",
        "#contact",
    ] {
        match page.handle_hash(hash) {
            Some(link) => println!(
                "{hash}: show {} and scroll to #{}",
                link.tab, link.scroll_target
            ),
            None => println!("{hash}: ignored"),
        }
    }
    println!("active tab={:?}", page.tabs().active());
}
