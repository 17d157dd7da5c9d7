//! Navigation links and active-page highlighting.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Report,
    Book,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Report, Page::Book, Page::Contact];

    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Report => "report.html",
            Page::Book => "book.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Report => "Report Garbage",
            Page::Book => "Book Vehicle",
            Page::Contact => "Contact",
        }
    }

    pub fn from_href(href: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.href() == href)
    }
}

/// Last path segment of `path`, or `default_page` when that segment is empty.
pub fn current_page<'a>(path: &'a str, default_page: &'a str) -> &'a str {
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(default_page)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavHighlighter {
    links: Vec<NavLink>,
    default_page: String,
    current: String,
}

impl NavHighlighter {
    /// Site navigation: one link per [`Page`].
    pub fn new(default_page: impl Into<String>) -> Self {
        Self::with_links(
            Page::ALL.into_iter().map(|p| NavLink::new(p.href(), p.label())),
            default_page,
        )
    }

    pub fn with_links(links: impl IntoIterator<Item = NavLink>, default_page: impl Into<String>) -> Self {
        let default_page = default_page.into();
        Self {
            links: links.into_iter().collect(),
            current: default_page.clone(),
            default_page,
        }
    }

    /// Marks every link whose href equals the current page and clears the rest.
    /// Returns the resolved page identifier.
    pub fn set_active(&mut self, path: &str) -> &str {
        self.current = current_page(path, &self.default_page).to_string();
        for link in &mut self.links {
            link.active = link.href == self.current;
        }
        &self.current
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_route(&self) -> Option<Page> {
        Page::from_href(&self.current)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|l| l.active)
    }
}
