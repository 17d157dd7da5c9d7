use eco_core::nav::current_page;
use eco_core::{NavHighlighter, NavLink, Page};
use pretty_assertions::assert_eq;

fn active_hrefs(nav: &NavHighlighter) -> Vec<&str> {
    nav.active().map(|l| l.href.as_str()).collect()
}

#[test]
fn current_page_is_last_path_segment() {
    assert_eq!(current_page("/site/contact.html", "index.html"), "contact.html");
    assert_eq!(current_page("book.html", "index.html"), "book.html");
}

#[test]
fn empty_path_defaults_to_home() {
    assert_eq!(current_page("", "index.html"), "index.html");
    assert_eq!(current_page("/", "index.html"), "index.html");
    assert_eq!(current_page("/eco/", "index.html"), "index.html");
}

#[test]
fn exactly_one_link_active() {
    let mut nav = NavHighlighter::new("index.html");
    nav.set_active("/report.html");
    assert_eq!(active_hrefs(&nav), vec!["report.html"]);
    assert_eq!(nav.current_route(), Some(Page::Report));
}

#[test]
fn root_path_activates_home() {
    let mut nav = NavHighlighter::new("index.html");
    nav.set_active("/");
    assert_eq!(active_hrefs(&nav), vec!["index.html"]);
}

#[test]
fn moving_between_pages_clears_previous_highlight() {
    let mut nav = NavHighlighter::new("index.html");
    nav.set_active("/contact.html");
    nav.set_active("/book.html");
    assert_eq!(active_hrefs(&nav), vec!["book.html"]);
}

#[test]
fn unknown_page_highlights_nothing() {
    let mut nav = NavHighlighter::new("index.html");
    assert_eq!(nav.set_active("/about.html"), "about.html");
    assert!(active_hrefs(&nav).is_empty());
    assert_eq!(nav.current_route(), None);
}

#[test]
fn no_links_is_fine() {
    let mut nav = NavHighlighter::with_links(Vec::<NavLink>::new(), "index.html");
    nav.set_active("/index.html");
    assert!(nav.links().is_empty());
}

#[test]
fn page_hrefs_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_href(page.href()), Some(page));
    }
}
